mod create_category;
mod emit_category;
mod get_categories;
mod update_category;

pub use create_category::{__path_create_category_handler, create_category_handler, CategoryRequest};
pub use emit_category::emit_category_handler;
pub use get_categories::{
    __path_get_categories_handler, __path_get_category_handler, get_categories_handler,
    get_category_handler,
};
pub use update_category::{__path_update_category_handler, update_category_handler};

use crate::{
    category::application::ports::incoming::use_cases::CategoryCommandError,
    shared::api::ApiResponse,
};

fn map_command_error(err: CategoryCommandError) -> actix_web::HttpResponse {
    match err {
        CategoryCommandError::BlankName => {
            ApiResponse::bad_request("BLANK_NAME", "Category name cannot be blank")
        }
        CategoryCommandError::NegativePosition => {
            ApiResponse::bad_request("NEGATIVE_POSITION", "Position cannot be negative")
        }
    }
}
