use actix_web::{get, web, Responder};

use crate::{
    api::schemas::ErrorResponse,
    category::application::ports::{
        incoming::use_cases::GetCategoriesError, outgoing::CategoryResult,
    },
    shared::api::ApiResponse,
    AppState,
};

/// List categories ordered by position
#[utoipa::path(
    get,
    path = "/api/categories",
    tag = "categories",
    responses(
        (status = 200, description = "Categories", body = [CategoryResult]),
        (status = 500, description = "Store failure", body = ErrorResponse),
    )
)]
#[get("/api/categories")]
pub async fn get_categories_handler(data: web::Data<AppState>) -> impl Responder {
    match data.category.get.list().await {
        Ok(categories) => ApiResponse::success(categories),
        Err(err) => map_get_categories_error(err),
    }
}

/// Single category by id or by exact name
#[utoipa::path(
    get,
    path = "/api/categories/{category_id}",
    tag = "categories",
    params(("category_id" = String, Path, description = "Category id or name")),
    responses(
        (status = 200, description = "Category", body = CategoryResult),
        (status = 404, description = "Category not found", body = ErrorResponse),
    )
)]
#[get("/api/categories/{category_id}")]
pub async fn get_category_handler(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    match data.category.get.find(&path.into_inner()).await {
        Ok(Some(category)) => ApiResponse::success(category),
        Ok(None) => ApiResponse::not_found("CATEGORY_NOT_FOUND", "Category not found"),
        Err(err) => map_get_categories_error(err),
    }
}

fn map_get_categories_error(err: GetCategoriesError) -> actix_web::HttpResponse {
    match err {
        GetCategoriesError::QueryFailed(msg) => {
            tracing::error!(error = %msg, "failed to read categories");
            ApiResponse::internal_error()
        }
    }
}
