use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};

use crate::auth::application::domain::entities::{Actor, UserId};
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::shared::api::ApiResponse;

/// Request guard: the bearer token must verify, otherwise 401.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedActor(pub Actor);

/// Like [`AuthenticatedActor`] but anonymous requests pass through as `None`.
/// A present but invalid token is still rejected.
#[derive(Debug, Clone, Copy)]
pub struct MaybeActor(pub Option<Actor>);

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

fn resolve_actor(req: &HttpRequest, token: &str) -> Result<Actor, ActixError> {
    let provider = req
        .app_data::<web::Data<Arc<dyn TokenProvider + Send + Sync>>>()
        .ok_or_else(|| create_api_error(ApiResponse::internal_error()))?;

    provider
        .verify_token(token)
        .map(|claims| Actor::new(UserId::from(claims.sub), claims.role))
        .map_err(|_| {
            create_api_error(ApiResponse::unauthorized(
                "INVALID_TOKEN",
                "Invalid or expired token",
            ))
        })
}

impl FromRequest for AuthenticatedActor {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = match extract_token_from_header(req) {
            Some(token) => resolve_actor(req, &token).map(AuthenticatedActor),
            None => Err(create_api_error(ApiResponse::unauthorized(
                "MISSING_AUTH_HEADER",
                "Missing or invalid authorization header",
            ))),
        };

        ready(result)
    }
}

impl FromRequest for MaybeActor {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = match extract_token_from_header(req) {
            Some(token) => resolve_actor(req, &token).map(|a| MaybeActor(Some(a))),
            None => Ok(MaybeActor(None)),
        };

        ready(result)
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}
