//! Shared-secret gate.
//!
//! Compares the `x-api-key` header against the configured secret. Rejections
//! are a bare 403 with no body: this surface is for trusted clients only and
//! discloses nothing about why the check failed.

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use subtle::ConstantTimeEq;

use crate::api::AppState;
use crate::config::API_KEY_HEADER;

/// Constant-time comparison of the provided key against the secret.
///
/// When lengths differ, a dummy comparison keeps the timing independent of
/// where the mismatch sits.
fn constant_time_eq(provided: &str, expected: &str) -> bool {
    let provided = provided.as_bytes();
    let expected = expected.as_bytes();
    if provided.len() != expected.len() {
        let _ = expected.ct_eq(expected);
        return false;
    }
    provided.ct_eq(expected).into()
}

/// Shared-secret gate middleware.
pub async fn api_key_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let provided = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok());

    match provided {
        Some(key) if constant_time_eq(key, state.config.api_secret()) => next.run(request).await,
        Some(_) => {
            tracing::warn!("api key gate: value mismatch");
            StatusCode::FORBIDDEN.into_response()
        }
        None => {
            tracing::warn!("api key gate: header missing");
            StatusCode::FORBIDDEN.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_time_eq_identical_keys() {
        assert!(constant_time_eq("secret-key-123", "secret-key-123"));
    }

    #[test]
    fn constant_time_eq_rejects_wrong_key() {
        assert!(!constant_time_eq("wrong-key", "secret-key-123"));
    }

    #[test]
    fn constant_time_eq_rejects_prefix() {
        assert!(!constant_time_eq("secret", "secret-key-123"));
    }

    #[test]
    fn constant_time_eq_rejects_empty() {
        assert!(!constant_time_eq("", "secret-key-123"));
    }
}
