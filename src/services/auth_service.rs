//! Authentication service - credential verification and token lifecycle.

use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::Password;
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;
use crate::services::token::{Claims, TokenCodec};

/// Structurally valid Argon2 hash verified against when a login names an
/// unknown email, so the timing of the response does not reveal whether the
/// account exists.
const DUMMY_PASSWORD_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$dummysalt123456$dummyhash1234567890123456789012";

/// Token response returned after successful authentication
#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    /// Signed bearer token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Verify credentials and issue a bearer token.
    async fn login(&self, email: String, password: String) -> AppResult<TokenResponse>;

    /// End a session. There is no revocation store, so issued tokens stay
    /// valid until their expiry; this only acknowledges the request.
    async fn logout(&self, subject: Uuid) -> AppResult<()>;

    /// Verify a bearer token and return its claims.
    fn verify_token(&self, token: &str) -> AppResult<Claims>;
}

/// Concrete implementation of [`AuthService`] over the credential store.
pub struct Authenticator {
    users: Arc<dyn UserRepository>,
    tokens: TokenCodec,
}

impl Authenticator {
    pub fn new(users: Arc<dyn UserRepository>, tokens: TokenCodec) -> Self {
        Self { users, tokens }
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn login(&self, email: String, password: String) -> AppResult<TokenResponse> {
        // Active users only; a soft-deleted account cannot log in.
        let user = self.users.find_by_email(&email).await?;

        let (stored_hash, known) = match &user {
            Some(user) => (user.password_hash.clone(), true),
            None => (DUMMY_PASSWORD_HASH.to_string(), false),
        };

        // Argon2 verification is CPU-bound; run it on the blocking pool so
        // it cannot stall unrelated requests. It runs for unknown emails too
        // (against the dummy hash) to keep response timing uniform.
        let valid = tokio::task::spawn_blocking(move || {
            Password::from_hash(stored_hash).verify(&password)
        })
        .await
        .map_err(|e| AppError::internal(format!("password verification task failed: {}", e)))?;

        if !known {
            tracing::info!("login rejected: no active account for the given email");
            return Err(AppError::Unauthorized);
        }
        let Some(user) = user else {
            return Err(AppError::Unauthorized);
        };
        if !valid {
            tracing::info!(user_id = %user.id, "login rejected: password mismatch");
            return Err(AppError::Unauthorized);
        }

        let token = self.tokens.issue(&user.id.to_string())?;
        Ok(TokenResponse { token })
    }

    async fn logout(&self, subject: Uuid) -> AppResult<()> {
        tracing::info!(user_id = %subject, "logout acknowledged; token remains valid until expiry");
        Ok(())
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        Ok(self.tokens.verify(token)?)
    }
}
