use actix_web::{delete, web, Responder};
use uuid::Uuid;

use crate::{
    auth::adapter::incoming::web::extractors::auth::AuthenticatedActor,
    shared::api::ApiResponse,
    topic::application::ports::incoming::use_cases::DeleteTopicError,
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[delete("/api/topics/{topic_id}")]
pub async fn delete_topic_handler(
    actor: AuthenticatedActor,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    match data.topic.delete.execute(actor.0, path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(err) => map_delete_topic_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_delete_topic_error(err: DeleteTopicError) -> actix_web::HttpResponse {
    match err {
        DeleteTopicError::TopicNotFound => {
            ApiResponse::not_found("TOPIC_NOT_FOUND", "Topic not found")
        }
        DeleteTopicError::Forbidden => {
            ApiResponse::forbidden("FORBIDDEN", "You are not the owner of this topic")
        }
        DeleteTopicError::DatabaseError(msg) => {
            tracing::error!(error = %msg, "failed to delete topic");
            ApiResponse::internal_error()
        }
    }
}
