use actix_web::{get, web, Responder};

use crate::{
    api::schemas::ErrorResponse,
    auth::adapter::incoming::web::extractors::auth::MaybeActor,
    shared::api::ApiResponse,
    topic::application::ports::{incoming::use_cases::GetTopicError, outgoing::TopicResult},
    AppState,
};

/// Read topic
///
/// With a bearer token the `is_liked_by` and `is_bookmarked_by` flags describe
/// the caller.
#[utoipa::path(
    get,
    path = "/api/topics/{topic_id}",
    tag = "topics",
    params(("topic_id" = String, Path, description = "Topic id")),
    responses(
        (status = 200, description = "Topic", body = TopicResult),
        (status = 404, description = "Topic not found", body = ErrorResponse),
    )
)]
#[get("/api/topics/{topic_id}")]
pub async fn get_topic_handler(
    viewer: MaybeActor,
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let viewer = viewer.0.map(|actor| actor.id);

    match data.topic.get.execute(&path.into_inner(), viewer).await {
        Ok(Some(topic)) => ApiResponse::success(topic),
        Ok(None) => ApiResponse::not_found("TOPIC_NOT_FOUND", "Topic not found"),
        Err(GetTopicError::QueryFailed(msg)) => {
            tracing::error!(error = %msg, "failed to read topic");
            ApiResponse::internal_error()
        }
    }
}
