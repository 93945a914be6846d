use actix_web::{post, web, Responder};
use uuid::Uuid;

use crate::{
    auth::adapter::incoming::web::extractors::auth::AuthenticatedActor,
    shared::api::ApiResponse,
    topic::application::ports::incoming::use_cases::RecomputeTopicCountersError,
    AppState,
};

#[post("/api/admin/topics/{topic_id}/recompute")]
pub async fn recompute_topic_counters_handler(
    actor: AuthenticatedActor,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    match data.topic.recompute.execute(actor.0, path.into_inner()).await {
        Ok(topic) => ApiResponse::success(topic),
        Err(RecomputeTopicCountersError::Forbidden) => {
            ApiResponse::forbidden("FORBIDDEN", "Administrator role required")
        }
        Err(RecomputeTopicCountersError::TopicNotFound) => {
            ApiResponse::not_found("TOPIC_NOT_FOUND", "Topic not found")
        }
        Err(RecomputeTopicCountersError::TransactionError(msg)) => {
            tracing::error!(error = %msg, "failed to recompute topic counters");
            ApiResponse::internal_error()
        }
    }
}
