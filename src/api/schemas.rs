// src/api/schemas.rs
//
// OpenAPI shapes of the `ApiResponse` envelope in `shared::api::response`.
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// Envelope of every 200/201 body
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    #[schema(example = true)]
    pub success: bool,
    pub data: T,
}

/// `meta` block sent alongside comment pages
#[derive(Serialize, ToSchema)]
pub struct PageMetaSchema {
    /// Send back as `offset` for the next page. Null after a short page and
    /// on oldest-first reads.
    pub next_offset: Option<DateTime<Utc>>,
}

/// Envelope of every 4xx/5xx body
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Stable machine-readable code
    #[schema(example = "BODY_TOO_SHORT")]
    pub code: String,

    #[schema(example = "Comment body must be at least 6 characters")]
    pub message: String,
}
