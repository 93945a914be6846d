use actix_web::{get, web, Responder};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    api::schemas::ErrorResponse,
    comment::application::{
        domain::entities::next_page_offset,
        ports::{
            incoming::use_cases::GetCommentsError,
            outgoing::CommentResult,
        },
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// Only comments created strictly before this instant. Defaults to now.
    pub offset: Option<DateTime<Utc>>,
}

/// How the next page of a read is reached.
#[derive(Debug, Clone, Copy)]
enum Paging {
    /// Newest first; `offset` walks backwards through time.
    Descending,
    /// Oldest first under an upper bound; no cursor moves past the first page.
    Ascending,
}

fn page_response(
    result: Result<Vec<CommentResult>, GetCommentsError>,
    paging: Paging,
) -> actix_web::HttpResponse {
    match result {
        Ok(comments) => {
            let next_offset = match paging {
                Paging::Descending => {
                    let stamps: Vec<_> = comments.iter().map(|c| c.created_at).collect();
                    next_page_offset(&stamps)
                }
                Paging::Ascending => None,
            };
            ApiResponse::page(comments, next_offset)
        }
        Err(GetCommentsError::QueryFailed(msg)) => {
            tracing::error!(error = %msg, "failed to read comments");
            ApiResponse::internal_error()
        }
    }
}

/// Comments of a topic, oldest first. `meta.next_offset` is always null.
#[utoipa::path(
    get,
    path = "/api/topics/{topic_id}/comments",
    tag = "comments",
    params(("topic_id" = String, Path, description = "Topic id"), PageQuery),
    responses(
        (status = 200, description = "Page of comments", body = [CommentResult]),
        (status = 500, description = "Store failure", body = ErrorResponse),
    )
)]
#[get("/api/topics/{topic_id}/comments")]
pub async fn get_topic_comments_handler(
    data: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<PageQuery>,
) -> impl Responder {
    page_response(
        data.comment.get.by_topic(&path, query.offset).await,
        Paging::Ascending,
    )
}

/// Comments written by a user, newest first
#[utoipa::path(
    get,
    path = "/api/users/{user_id}/comments",
    tag = "comments",
    params(("user_id" = String, Path, description = "User id"), PageQuery),
    responses(
        (status = 200, description = "Page of comments", body = [CommentResult]),
        (status = 500, description = "Store failure", body = ErrorResponse),
    )
)]
#[get("/api/users/{user_id}/comments")]
pub async fn get_user_comments_handler(
    data: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<PageQuery>,
) -> impl Responder {
    page_response(
        data.comment.get.by_user(&path, query.offset).await,
        Paging::Descending,
    )
}
