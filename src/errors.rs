//! Centralized error handling.
//!
//! A closed taxonomy of application errors. Every error carries exactly one
//! kind; the kind alone decides the HTTP status and the symbolic code sent to
//! the client, and no other component picks status codes. Wrapped causes are
//! kept for server-side logging and never serialized into a response.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::services::token::TokenError;
use crate::types::ApiResponse;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Malformed or incomplete request payload
    #[error("{0}")]
    BadRequest(String),

    /// Missing or failed bearer credentials, and login failures
    #[error("unauthorized access")]
    Unauthorized,

    /// API-key gate failure
    #[error("access forbidden")]
    Forbidden,

    /// Uniqueness violation for the named entity
    #[error("{0} already exists")]
    Conflict(String),

    /// No entity with the given identifier
    #[error("{0} not found")]
    NotFound(String),

    /// Database failure, cause retained for diagnostics
    #[error("database error")]
    Database(#[from] sea_orm::DbErr),

    /// Token rejected; the specific kind stays server-side
    #[error("token rejected")]
    Token(#[from] TokenError),

    /// Anything without a more specific classification
    #[error("internal server error")]
    Internal(String),
}

impl AppError {
    /// Symbolic code for the client. HTTP status is derived from this
    /// classification, never chosen ad hoc.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::BadRequest(_) => "bad_request",
            AppError::Unauthorized => "unauthorized",
            AppError::Forbidden => "forbidden",
            AppError::Conflict(_) => "conflict",
            AppError::NotFound(_) => "not_found",
            // Signing failures happen while issuing, not verifying; they are
            // server faults rather than caller faults.
            AppError::Token(TokenError::Signing(_)) => "internal",
            AppError::Token(_) => "unauthorized",
            AppError::Database(_) | AppError::Internal(_) => "internal",
        }
    }

    /// HTTP status bound to this error's kind.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Token(TokenError::Signing(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Token(_) => StatusCode::UNAUTHORIZED,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// User-facing message. Client errors show their message; verification
    /// and server failures collapse to a fixed generic string so no internal
    /// detail crosses the response boundary.
    fn client_message(&self) -> String {
        match self {
            AppError::BadRequest(msg) => msg.clone(),
            AppError::Conflict(entity) => format!("{} already exists", entity),
            AppError::NotFound(entity) => format!("{} not found", entity),
            AppError::Forbidden => "access forbidden".to_string(),
            AppError::Unauthorized => "unauthorized access".to_string(),
            AppError::Token(TokenError::Signing(_)) => "internal server error".to_string(),
            AppError::Token(_) => "unauthorized access".to_string(),
            AppError::Database(_) | AppError::Internal(_) => "internal server error".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Full error (including any wrapped cause) is logged here, once,
        // at the boundary; only the sanitized envelope goes out.
        if status.is_server_error() {
            tracing::error!(error = ?self, code = self.code(), "request failed");
        } else {
            tracing::warn!(error = ?self, code = self.code(), "request rejected");
        }

        let body = ApiResponse::error(self.code(), self.client_message());
        (status, Json(body)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self, entity: &str) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, entity: &str) -> AppResult<T> {
        self.ok_or_else(|| AppError::NotFound(entity.to_string()))
    }
}

/// Convenience constructors
impl AppError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }

    pub fn conflict(entity: impl Into<String>) -> Self {
        AppError::Conflict(entity.into())
    }

    pub fn not_found(entity: impl Into<String>) -> Self {
        AppError::NotFound(entity.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_determines_status_and_code() {
        let cases = [
            (AppError::bad_request("x"), StatusCode::BAD_REQUEST, "bad_request"),
            (AppError::Unauthorized, StatusCode::UNAUTHORIZED, "unauthorized"),
            (AppError::Forbidden, StatusCode::FORBIDDEN, "forbidden"),
            (AppError::conflict("user"), StatusCode::CONFLICT, "conflict"),
            (AppError::not_found("user"), StatusCode::NOT_FOUND, "not_found"),
            (
                AppError::internal("boom"),
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal",
            ),
        ];
        for (err, status, code) in cases {
            assert_eq!(err.status(), status);
            assert_eq!(err.code(), code);
        }
    }

    #[test]
    fn verification_kinds_collapse_to_generic_unauthorized() {
        for kind in [
            TokenError::Malformed,
            TokenError::BadSignature,
            TokenError::Expired,
            TokenError::MissingSubject,
        ] {
            let err = AppError::Token(kind);
            assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
            assert_eq!(err.code(), "unauthorized");
            assert_eq!(err.client_message(), "unauthorized access");
        }
    }

    #[test]
    fn internal_message_never_reaches_the_client() {
        let err = AppError::internal("connection pool exhausted: db-primary-1");
        assert_eq!(err.client_message(), "internal server error");
    }

    #[test]
    fn option_ext_maps_none_to_not_found() {
        let missing: Option<u8> = None;
        let err = missing.ok_or_not_found("user").unwrap_err();
        assert!(matches!(err, AppError::NotFound(entity) if entity == "user"));
    }
}
