mod create_comment;
mod delete_comment;
mod get_comments;
mod update_comment;

pub use create_comment::{__path_create_comment_handler, create_comment_handler, CommentRequest};
pub use delete_comment::delete_comment_handler;
pub use get_comments::{
    __path_get_topic_comments_handler, __path_get_user_comments_handler, get_topic_comments_handler,
    get_user_comments_handler, PageQuery,
};
pub use update_comment::{__path_update_comment_handler, update_comment_handler};

use crate::{comment::application::domain::entities::CommentBodyError, shared::api::ApiResponse};

fn map_body_error(err: CommentBodyError) -> actix_web::HttpResponse {
    match err {
        CommentBodyError::TooShort => ApiResponse::bad_request("BODY_TOO_SHORT", &err.to_string()),
    }
}
