use actix_web::{post, web, Responder};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    api::schemas::ErrorResponse,
    auth::adapter::incoming::web::extractors::auth::AuthenticatedActor,
    shared::api::ApiResponse,
    topic::application::ports::{
        incoming::use_cases::{CreateTopicCommand, CreateTopicCommandError, CreateTopicError},
        outgoing::TopicResult,
    },
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTopicRequest {
    #[schema(example = "Borrow checker questions")]
    pub title: String,

    #[serde(default)]
    pub body: String,

    pub category_id: Uuid,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Create topic
///
/// The category's last topic and topic count are refreshed afterwards.
#[utoipa::path(
    post,
    path = "/api/topics",
    tag = "topics",
    request_body = CreateTopicRequest,
    responses(
        (status = 201, description = "Topic created", body = TopicResult),
        (status = 400, description = "Invalid title", body = ErrorResponse),
        (status = 404, description = "Category not found", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/topics")]
pub async fn create_topic_handler(
    actor: AuthenticatedActor,
    data: web::Data<AppState>,
    payload: web::Json<CreateTopicRequest>,
) -> impl Responder {
    let command = match CreateTopicCommand::new(
        actor.0.id,
        payload.category_id,
        &payload.title,
        &payload.body,
    ) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.topic.create.execute(command).await {
        Ok(topic) => ApiResponse::created(topic),
        Err(err) => map_create_topic_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_command_error(err: CreateTopicCommandError) -> actix_web::HttpResponse {
    match err {
        CreateTopicCommandError::EmptyTitle => {
            ApiResponse::bad_request("EMPTY_TITLE", "Title cannot be empty")
        }
        CreateTopicCommandError::TitleTooLong => {
            ApiResponse::bad_request("TITLE_TOO_LONG", "Title must not exceed 72 characters")
        }
    }
}

fn map_create_topic_error(err: CreateTopicError) -> actix_web::HttpResponse {
    match err {
        CreateTopicError::CategoryNotFound => {
            ApiResponse::not_found("CATEGORY_NOT_FOUND", "Category not found")
        }
        CreateTopicError::RepositoryError(msg) => {
            tracing::error!(error = %msg, "failed to create topic");
            ApiResponse::internal_error()
        }
    }
}
