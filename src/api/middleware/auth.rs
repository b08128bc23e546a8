//! Bearer token gate.
//!
//! Extracts and verifies the token from the Authorization header, then
//! injects the resolved identity into the request extensions. Every failure
//! collapses to the same generic 401 envelope; which verification step
//! failed is logged server-side only.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::api::AppState;
use crate::config::BEARER_TOKEN_PREFIX;
use crate::errors::AppError;

/// Authenticated identity resolved from a verified bearer token.
#[derive(Clone, Debug)]
pub struct CurrentUser {
    pub id: Uuid,
}

/// Bearer token gate middleware.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or(AppError::Unauthorized)?;

    let token = auth_header
        .strip_prefix(BEARER_TOKEN_PREFIX)
        .ok_or(AppError::Unauthorized)?;
    if token.is_empty() {
        return Err(AppError::Unauthorized);
    }

    // Verification failures carry their specific kind through AppError;
    // the rendered response stays generic either way.
    let claims = state.auth_service.verify_token(token)?;

    let id = claims.sub.parse::<Uuid>().map_err(|_| {
        tracing::warn!("bearer gate: subject claim is not a valid user id");
        AppError::Unauthorized
    })?;

    request.extensions_mut().insert(CurrentUser { id });

    Ok(next.run(request).await)
}
