use actix_web::{put, web, Responder};
use uuid::Uuid;

use crate::{
    api::schemas::ErrorResponse,
    auth::adapter::incoming::web::extractors::auth::AuthenticatedActor,
    comment::application::ports::{
        incoming::use_cases::{UpdateCommentCommand, UpdateCommentError},
        outgoing::CommentResult,
    },
    shared::api::ApiResponse,
    AppState,
};

use super::{map_body_error, CommentRequest};

/// Edit comment
///
/// Owner or admin only.
#[utoipa::path(
    put,
    path = "/api/comments/{comment_id}",
    tag = "comments",
    params(("comment_id" = Uuid, Path, description = "Comment id")),
    request_body = CommentRequest,
    responses(
        (status = 200, description = "Comment updated", body = CommentResult),
        (status = 400, description = "Body too short", body = ErrorResponse),
        (status = 403, description = "Not the owner", body = ErrorResponse),
        (status = 404, description = "Comment not found", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[put("/api/comments/{comment_id}")]
pub async fn update_comment_handler(
    actor: AuthenticatedActor,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    payload: web::Json<CommentRequest>,
) -> impl Responder {
    let command = match UpdateCommentCommand::new(path.into_inner(), &payload.body) {
        Ok(cmd) => cmd,
        Err(err) => return map_body_error(err),
    };

    match data.comment.update.execute(actor.0, command).await {
        Ok(comment) => ApiResponse::success(comment),
        Err(err) => map_update_comment_error(err),
    }
}

fn map_update_comment_error(err: UpdateCommentError) -> actix_web::HttpResponse {
    match err {
        UpdateCommentError::CommentNotFound => {
            ApiResponse::not_found("COMMENT_NOT_FOUND", "Comment not found")
        }
        UpdateCommentError::Forbidden => {
            ApiResponse::forbidden("FORBIDDEN", "You are not the owner of this comment")
        }
        UpdateCommentError::TransactionError(msg) => {
            tracing::error!(error = %msg, "failed to update comment");
            ApiResponse::internal_error()
        }
    }
}
