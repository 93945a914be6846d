use actix_web::{post, web, Responder};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    api::schemas::ErrorResponse,
    auth::adapter::incoming::web::extractors::auth::AuthenticatedActor,
    category::application::ports::{
        incoming::use_cases::{CreateCategoryCommand, CreateCategoryError},
        outgoing::CategoryResult,
    },
    shared::api::ApiResponse,
    AppState,
};

use super::map_command_error;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, ToSchema)]
pub struct CategoryRequest {
    /// Display name, trimmed
    #[schema(example = "General")]
    pub name: String,

    /// Defaults to the name when omitted or blank
    #[schema(example = "general")]
    pub alias: Option<String>,

    pub description: Option<String>,

    /// 0 or omitted appends after the last category
    #[schema(example = 0)]
    pub position: Option<i64>,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Create category (admin)
#[utoipa::path(
    post,
    path = "/api/categories",
    tag = "categories",
    request_body = CategoryRequest,
    responses(
        (status = 201, description = "Category created", body = CategoryResult),
        (status = 400, description = "Blank name or negative position", body = ErrorResponse),
        (status = 403, description = "Caller is not an administrator", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/categories")]
pub async fn create_category_handler(
    actor: AuthenticatedActor,
    data: web::Data<AppState>,
    payload: web::Json<CategoryRequest>,
) -> impl Responder {
    let command = match CreateCategoryCommand::new(
        &payload.name,
        payload.alias.as_deref(),
        payload.description.as_deref(),
        payload.position.unwrap_or(0),
    ) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.category.create.execute(actor.0, command).await {
        Ok(category) => ApiResponse::created(category),
        Err(err) => map_create_category_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_create_category_error(err: CreateCategoryError) -> actix_web::HttpResponse {
    match err {
        CreateCategoryError::Forbidden => {
            ApiResponse::forbidden("FORBIDDEN", "Only administrators can manage categories")
        }
        CreateCategoryError::TransactionError(msg) => {
            tracing::error!(error = %msg, "failed to create category");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use uuid::Uuid;

    use crate::{
        auth::application::domain::entities::Actor,
        tests::support::{
            app_state_builder::TestAppStateBuilder,
            auth_helper::{bearer, token_provider_data, StubTokenProvider},
            fixtures::category_result,
            stubs::StubCreateCategoryUseCase,
        },
    };

    async fn read_json(resp: actix_web::dev::ServiceResponse) -> serde_json::Value {
        let body = test::read_body(resp).await;
        serde_json::from_slice(&body).unwrap()
    }

    #[actix_web::test]
    async fn admin_creates_category() {
        let state = TestAppStateBuilder::default()
            .with_create_category(StubCreateCategoryUseCase(Ok(category_result("General"))))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_data(StubTokenProvider::valid(Actor::admin(
                    Uuid::new_v4(),
                ))))
                .service(create_category_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/categories")
            .insert_header(bearer())
            .set_json(serde_json::json!({ "name": "General" }))
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CREATED);
        let json = read_json(resp).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["name"], "General");
    }

    #[actix_web::test]
    async fn blank_name_is_rejected_before_use_case() {
        let state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_data(StubTokenProvider::valid(Actor::admin(
                    Uuid::new_v4(),
                ))))
                .service(create_category_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/categories")
            .insert_header(bearer())
            .set_json(serde_json::json!({ "name": "   " }))
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let json = read_json(resp).await;
        assert_eq!(json["error"]["code"], "BLANK_NAME");
    }

    #[actix_web::test]
    async fn forbidden_for_members() {
        let state = TestAppStateBuilder::default()
            .with_create_category(StubCreateCategoryUseCase(Err(CreateCategoryError::Forbidden)))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_data(StubTokenProvider::valid(Actor::member(
                    Uuid::new_v4(),
                ))))
                .service(create_category_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/categories")
            .insert_header(bearer())
            .set_json(serde_json::json!({ "name": "General" }))
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn requires_authentication() {
        let state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_data(StubTokenProvider::invalid()))
                .service(create_category_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/categories")
            .set_json(serde_json::json!({ "name": "General" }))
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
