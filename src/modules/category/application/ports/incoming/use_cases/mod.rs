mod create_category;
mod emit_category;
mod get_categories;
mod update_category;

pub use create_category::{
    CategoryCommandError, CreateCategoryCommand, CreateCategoryError, CreateCategoryUseCase,
};
pub use emit_category::{EmitCategoryError, EmitCategoryUseCase};
pub use get_categories::{GetCategoriesError, GetCategoriesUseCase};
pub use update_category::{UpdateCategoryCommand, UpdateCategoryError, UpdateCategoryUseCase};
