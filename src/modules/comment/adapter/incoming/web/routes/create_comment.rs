use actix_web::{post, web, Responder};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    api::schemas::ErrorResponse,
    auth::adapter::incoming::web::extractors::auth::AuthenticatedActor,
    comment::application::ports::{
        incoming::use_cases::{CreateCommentCommand, CreateCommentError},
        outgoing::CommentResult,
    },
    shared::api::ApiResponse,
    AppState,
};

use super::map_body_error;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, ToSchema)]
pub struct CommentRequest {
    #[schema(example = "Lifetimes finally clicked for me.")]
    pub body: String,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Comment on a topic
///
/// Rewrites the topic's comment count in the same transaction.
#[utoipa::path(
    post,
    path = "/api/topics/{topic_id}/comments",
    tag = "comments",
    params(("topic_id" = Uuid, Path, description = "Topic id")),
    request_body = CommentRequest,
    responses(
        (status = 201, description = "Comment created", body = CommentResult),
        (status = 400, description = "Body too short", body = ErrorResponse),
        (status = 404, description = "Topic not found", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/topics/{topic_id}/comments")]
pub async fn create_comment_handler(
    actor: AuthenticatedActor,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    payload: web::Json<CommentRequest>,
) -> impl Responder {
    let command = match CreateCommentCommand::new(path.into_inner(), actor.0.id, &payload.body) {
        Ok(cmd) => cmd,
        Err(err) => return map_body_error(err),
    };

    match data.comment.create.execute(command).await {
        Ok(comment) => ApiResponse::created(comment),
        Err(err) => map_create_comment_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_create_comment_error(err: CreateCommentError) -> actix_web::HttpResponse {
    match err {
        CreateCommentError::TopicNotFound => {
            ApiResponse::not_found("TOPIC_NOT_FOUND", "Topic not found")
        }
        CreateCommentError::TransactionError(msg) => {
            tracing::error!(error = %msg, "failed to create comment");
            ApiResponse::internal_error()
        }
    }
}
