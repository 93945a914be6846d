use actix_web::{delete, post, web, HttpResponse, Responder};
use uuid::Uuid;

use crate::{
    api::schemas::ErrorResponse,
    auth::{
        adapter::incoming::web::extractors::auth::AuthenticatedActor,
        application::domain::entities::Actor,
    },
    shared::api::ApiResponse,
    topic::application::ports::{
        incoming::use_cases::{TopicActionCommand, TopicActionError},
        outgoing::TopicResult,
    },
    AppState,
};

/// Set a flag (`liked` or `bookmarked`) on a topic for the caller
#[utoipa::path(
    post,
    path = "/api/topics/{topic_id}/actions/{action}",
    tag = "topics",
    params(
        ("topic_id" = Uuid, Path, description = "Topic id"),
        ("action" = String, Path, description = "liked | bookmarked"),
    ),
    responses(
        (status = 200, description = "Topic with updated counters", body = TopicResult),
        (status = 400, description = "Unknown action", body = ErrorResponse),
        (status = 404, description = "Topic not found", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/topics/{topic_id}/actions/{action}")]
pub async fn set_topic_action_handler(
    actor: AuthenticatedActor,
    data: web::Data<AppState>,
    path: web::Path<(Uuid, String)>,
) -> impl Responder {
    let (topic_id, action) = path.into_inner();
    apply(&data, actor.0, topic_id, &action, true).await
}

/// Clear a flag on a topic for the caller
#[utoipa::path(
    delete,
    path = "/api/topics/{topic_id}/actions/{action}",
    tag = "topics",
    params(
        ("topic_id" = Uuid, Path, description = "Topic id"),
        ("action" = String, Path, description = "liked | bookmarked"),
    ),
    responses(
        (status = 200, description = "Topic with updated counters", body = TopicResult),
        (status = 400, description = "Unknown action", body = ErrorResponse),
        (status = 404, description = "Topic not found", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[delete("/api/topics/{topic_id}/actions/{action}")]
pub async fn clear_topic_action_handler(
    actor: AuthenticatedActor,
    data: web::Data<AppState>,
    path: web::Path<(Uuid, String)>,
) -> impl Responder {
    let (topic_id, action) = path.into_inner();
    apply(&data, actor.0, topic_id, &action, false).await
}

async fn apply(
    data: &AppState,
    actor: Actor,
    topic_id: Uuid,
    action: &str,
    state: bool,
) -> HttpResponse {
    let command = match TopicActionCommand::new(topic_id, action, state) {
        Ok(cmd) => cmd,
        Err(err) => return ApiResponse::bad_request("BAD_DATA", &err.to_string()),
    };

    match data.topic.action.execute(actor, command).await {
        Ok(topic) => ApiResponse::success(topic),
        Err(TopicActionError::TopicNotFound) => {
            ApiResponse::not_found("TOPIC_NOT_FOUND", "Topic not found")
        }
        Err(TopicActionError::TransactionError(msg)) => {
            tracing::error!(topic_id = %topic_id, error = %msg, "topic action failed");
            ApiResponse::internal_error()
        }
    }
}
