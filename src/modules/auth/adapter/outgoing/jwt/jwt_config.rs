use std::env;

use crate::shared::config::{parse_or, ConfigError};

/// HS256 needs at least this many bytes of key material.
const MIN_SECRET_LEN: usize = 32;

/// Verification settings for tokens issued by the identity service.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub leeway: u64, // seconds
}

impl JwtConfig {
    /// Reads `JWT_SECRET`, `JWT_ISSUER` and `JWT_LEEWAY` from the process
    /// environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret_key = lookup("JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?;
        if secret_key.len() < MIN_SECRET_LEN {
            return Err(ConfigError::Invalid(
                "JWT_SECRET",
                format!("must be at least {} characters", MIN_SECRET_LEN),
            ));
        }

        Ok(Self {
            secret_key,
            issuer: lookup("JWT_ISSUER").unwrap_or_else(|| "forum".to_string()),
            leeway: parse_or(&lookup, "JWT_LEEWAY", 30u64)?,
        })
    }
}
