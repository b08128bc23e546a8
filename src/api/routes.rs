//! Application route configuration.

use axum::{middleware, response::Json, routing::get, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{logout_routes, record_routes, session_routes, user_routes};
use super::middleware::{api_key_middleware, auth_middleware};
use super::openapi::ApiDoc;
use super::AppState;
use crate::types::{ApiResponse, MessageResponse};

/// Create the application router with all routes and gates configured.
///
/// Gate assignment: user CRUD sits behind the shared-secret gate, login is
/// open, logout and records sit behind the bearer gate. `route_layer`
/// applies a gate only to the routes registered before it, so the merged
/// sub-routers keep their own gating.
pub fn create_router(state: AppState) -> Router {
    let users = user_routes()
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            api_key_middleware,
        ))
        .merge(session_routes())
        .merge(logout_routes().route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        )));

    let records = record_routes().route_layer(middleware::from_fn_with_state(
        state.clone(),
        auth_middleware,
    ));

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        // OpenAPI Swagger UI documentation
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/users", users)
        .nest("/records", records)
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Root endpoint
async fn root() -> Json<ApiResponse<MessageResponse>> {
    Json(ApiResponse::success(MessageResponse::new(
        "welcome to the ledger api",
    )))
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

/// Health check endpoint
async fn health() -> Json<ApiResponse<HealthResponse>> {
    Json(ApiResponse::success(HealthResponse { status: "ok" }))
}
