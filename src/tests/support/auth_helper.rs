use actix_web::{http::header, web};
use std::sync::Arc;

use crate::auth::application::{
    domain::entities::Actor,
    ports::outgoing::token_provider::{TokenClaims, TokenError, TokenProvider},
};

/// Accepts any token as the configured actor, or rejects every token.
#[derive(Debug, Clone)]
pub struct StubTokenProvider {
    actor: Option<Actor>,
}

impl StubTokenProvider {
    pub fn valid(actor: Actor) -> Self {
        Self { actor: Some(actor) }
    }

    pub fn invalid() -> Self {
        Self { actor: None }
    }
}

impl TokenProvider for StubTokenProvider {
    fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
        let actor = self.actor.ok_or(TokenError::InvalidSignature)?;
        let now = chrono::Utc::now().timestamp();
        Ok(TokenClaims {
            sub: actor.id.value(),
            exp: now + 3600,
            iat: now,
            nbf: now,
            iss: "forum".to_string(),
            role: actor.role,
        })
    }
}

pub fn token_provider_data(
    provider: StubTokenProvider,
) -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(provider);
    web::Data::new(provider)
}

pub fn bearer() -> (header::HeaderName, String) {
    (header::AUTHORIZATION, "Bearer stub-token".to_string())
}
