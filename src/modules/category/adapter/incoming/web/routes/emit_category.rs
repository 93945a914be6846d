use actix_web::{post, web, Responder};
use uuid::Uuid;

use crate::{
    auth::adapter::incoming::web::extractors::auth::AuthenticatedActor,
    category::application::ports::incoming::use_cases::EmitCategoryError,
    shared::api::ApiResponse,
    AppState,
};

/// Manually re-derives a category's last topic and topic count.
#[post("/api/admin/categories/{category_id}/emit")]
pub async fn emit_category_handler(
    actor: AuthenticatedActor,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    if !actor.0.is_admin() {
        return ApiResponse::forbidden("FORBIDDEN", "Administrator role required");
    }

    match data.category.emit.execute(path.into_inner()).await {
        Ok(category) => ApiResponse::success(category),
        Err(EmitCategoryError::CategoryNotFound) => {
            ApiResponse::not_found("CATEGORY_NOT_FOUND", "Category not found")
        }
        Err(EmitCategoryError::TransactionError(msg)) => {
            tracing::error!(error = %msg, "failed to emit category");
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
            stubs::StubEmitCategoryUseCase,
        },
    };

    async fn call_as(actor: Actor, stub: StubEmitCategoryUseCase) -> StatusCode {
        let state = TestAppStateBuilder::default().with_emit_category(stub).build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_data(StubTokenProvider::valid(actor)))
                .service(emit_category_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/api/admin/categories/{}/emit", Uuid::new_v4()))
            .insert_header(bearer())
            .to_request();

        test::call_service(&app, req).await.status()
    }

    #[actix_web::test]
    async fn admin_can_emit() {
        let status = call_as(
            Actor::admin(Uuid::new_v4()),
            StubEmitCategoryUseCase(Ok(category_result("General"))),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
    }

    #[actix_web::test]
    async fn member_cannot_emit() {
        let status = call_as(
            Actor::member(Uuid::new_v4()),
            StubEmitCategoryUseCase(Ok(category_result("General"))),
        )
        .await;

        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn unknown_category() {
        let status = call_as(
            Actor::admin(Uuid::new_v4()),
            StubEmitCategoryUseCase(Err(EmitCategoryError::CategoryNotFound)),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
