use actix_web::{put, web, Responder};
use uuid::Uuid;

use crate::{
    api::schemas::ErrorResponse,
    auth::adapter::incoming::web::extractors::auth::AuthenticatedActor,
    category::application::ports::{
        incoming::use_cases::{UpdateCategoryCommand, UpdateCategoryError},
        outgoing::CategoryResult,
    },
    shared::api::ApiResponse,
    AppState,
};

use super::{map_command_error, CategoryRequest};

/// Update category (admin)
#[utoipa::path(
    put,
    path = "/api/categories/{category_id}",
    tag = "categories",
    request_body = CategoryRequest,
    params(("category_id" = Uuid, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category updated", body = CategoryResult),
        (status = 400, description = "Blank name or negative position", body = ErrorResponse),
        (status = 403, description = "Caller is not an administrator", body = ErrorResponse),
        (status = 404, description = "Category not found", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[put("/api/categories/{category_id}")]
pub async fn update_category_handler(
    actor: AuthenticatedActor,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    payload: web::Json<CategoryRequest>,
) -> impl Responder {
    let command = match UpdateCategoryCommand::new(
        path.into_inner(),
        &payload.name,
        payload.alias.as_deref(),
        payload.description.as_deref(),
        payload.position.unwrap_or(0),
    ) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.category.update.execute(actor.0, command).await {
        Ok(category) => ApiResponse::success(category),
        Err(err) => map_update_category_error(err),
    }
}

fn map_update_category_error(err: UpdateCategoryError) -> actix_web::HttpResponse {
    match err {
        UpdateCategoryError::Forbidden => {
            ApiResponse::forbidden("FORBIDDEN", "Only administrators can manage categories")
        }
        UpdateCategoryError::CategoryNotFound => {
            ApiResponse::not_found("CATEGORY_NOT_FOUND", "Category not found")
        }
        UpdateCategoryError::TransactionError(msg) => {
            tracing::error!(error = %msg, "failed to update category");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    use crate::{
        auth::application::domain::entities::Actor,
        tests::support::{
            app_state_builder::TestAppStateBuilder,
            auth_helper::{bearer, token_provider_data, StubTokenProvider},
            fixtures::category_result,
            stubs::StubUpdateCategoryUseCase,
        },
    };

    async fn call(stub: StubUpdateCategoryUseCase, uri: &str) -> StatusCode {
        let state = TestAppStateBuilder::default()
            .with_update_category(stub)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_data(StubTokenProvider::valid(Actor::admin(
                    Uuid::new_v4(),
                ))))
                .service(update_category_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(uri)
            .insert_header(bearer())
            .set_json(serde_json::json!({ "name": "Renamed", "position": 3 }))
            .to_request();

        test::call_service(&app, req).await.status()
    }

    #[actix_web::test]
    async fn update_success() {
        let uri = format!("/api/categories/{}", Uuid::new_v4());
        let status = call(
            StubUpdateCategoryUseCase(Ok(category_result("Renamed"))),
            &uri,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
    }

    #[actix_web::test]
    async fn update_missing_category() {
        let uri = format!("/api/categories/{}", Uuid::new_v4());
        let status = call(
            StubUpdateCategoryUseCase(Err(UpdateCategoryError::CategoryNotFound)),
            &uri,
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn update_store_failure_is_internal_error() {
        let uri = format!("/api/categories/{}", Uuid::new_v4());
        let status = call(
            StubUpdateCategoryUseCase(Err(UpdateCategoryError::TransactionError(
                "serialization failure".into(),
            ))),
            &uri,
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
