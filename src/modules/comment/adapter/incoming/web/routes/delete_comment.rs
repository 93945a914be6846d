use actix_web::{delete, web, Responder};
use uuid::Uuid;

use crate::{
    auth::adapter::incoming::web::extractors::auth::AuthenticatedActor,
    comment::application::ports::incoming::use_cases::DeleteCommentError,
    shared::api::ApiResponse,
    AppState,
};

#[delete("/api/comments/{comment_id}")]
pub async fn delete_comment_handler(
    actor: AuthenticatedActor,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    match data.comment.delete.execute(actor.0, path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(err) => map_delete_comment_error(err),
    }
}

fn map_delete_comment_error(err: DeleteCommentError) -> actix_web::HttpResponse {
    match err {
        DeleteCommentError::CommentNotFound => {
            ApiResponse::not_found("COMMENT_NOT_FOUND", "Comment not found")
        }
        DeleteCommentError::Forbidden => {
            ApiResponse::forbidden("FORBIDDEN", "You are not the owner of this comment")
        }
        DeleteCommentError::BadData => {
            ApiResponse::bad_request("BAD_DATA", "Comment references a missing topic")
        }
        DeleteCommentError::TransactionError(msg) => {
            tracing::error!(error = %msg, "failed to delete comment");
            ApiResponse::internal_error()
        }
    }
}
