//! Application settings loaded from environment variables.

use std::env;

use super::constants::{DEFAULT_DATABASE_URL, DEFAULT_JWT_EXPIRATION_HOURS, MIN_JWT_SECRET_LENGTH};

/// Application configuration.
///
/// Built once at startup and passed into every component that needs it;
/// nothing reads the environment after this point.
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    api_secret: String,
    jwt_secret: String,
    pub jwt_expiration_hours: i64,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("api_secret", &"[REDACTED]")
            .field("jwt_secret", &"[REDACTED]")
            .field("jwt_expiration_hours", &self.jwt_expiration_hours)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Panics
    /// Panics if `JWT_SECRET` or `API_SECRET` is missing in a release build,
    /// or if the signing secret is too short (security requirement).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let jwt_secret = require_secret("JWT_SECRET", "dev-signing-key-minimum-32-chars!!");

        // Validate signing secret length
        if jwt_secret.len() < MIN_JWT_SECRET_LENGTH {
            panic!(
                "JWT_SECRET must be at least {} characters long",
                MIN_JWT_SECRET_LENGTH
            );
        }

        let api_secret = require_secret("API_SECRET", "dev-api-secret");

        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            api_secret,
            jwt_secret,
            jwt_expiration_hours: env::var("JWT_EXPIRATION_HOURS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_JWT_EXPIRATION_HOURS),
        }
    }

    /// Build a configuration from explicit values (tests, embedding).
    pub fn new(
        database_url: impl Into<String>,
        api_secret: impl Into<String>,
        jwt_secret: impl Into<String>,
        jwt_expiration_hours: i64,
    ) -> Self {
        Self {
            database_url: database_url.into(),
            api_secret: api_secret.into(),
            jwt_secret: jwt_secret.into(),
            jwt_expiration_hours,
        }
    }

    /// Pre-shared secret checked by the API-key gate.
    pub fn api_secret(&self) -> &str {
        &self.api_secret
    }

    /// Token signing secret bytes.
    pub fn jwt_secret_bytes(&self) -> &[u8] {
        self.jwt_secret.as_bytes()
    }
}

fn require_secret(key: &str, dev_default: &str) -> String {
    env::var(key).unwrap_or_else(|_| {
        if cfg!(debug_assertions) {
            tracing::warn!("{} not set, using insecure default for development", key);
            dev_default.to_string()
        } else {
            panic!("{} environment variable must be set in production", key);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_redacts_secrets() {
        let config = Config::new(
            "postgres://real:credentials@db/prod",
            "api-secret-value",
            "signing-secret-value-32-characters!",
            24,
        );
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("credentials"));
        assert!(!rendered.contains("api-secret-value"));
        assert!(!rendered.contains("signing-secret-value"));
    }
}
