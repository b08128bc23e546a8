//! User account and session handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, post},
    Extension, Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::domain::UserResponse;
use crate::errors::AppResult;
use crate::services::TokenResponse;
use crate::types::{ApiResponse, Created, MessageResponse};

/// User creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    /// User display name
    #[validate(length(min = 1, message = "name is required"))]
    #[schema(example = "Jane Doe")]
    pub name: String,
    /// User email address
    #[validate(email(message = "invalid email format"))]
    #[schema(example = "user@example.com")]
    pub email: String,
    /// User password (minimum 8 characters)
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    #[schema(example = "SecurePass123!", min_length = 8)]
    pub password: String,
}

/// Partial user update request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateUserRequest {
    /// New display name
    #[validate(length(min = 1, message = "name must not be empty"))]
    #[schema(example = "Jane Doe")]
    pub name: Option<String>,
    /// New email address
    #[validate(email(message = "invalid email format"))]
    #[schema(example = "new@example.com")]
    pub email: Option<String>,
    /// New password (minimum 8 characters)
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: Option<String>,
}

/// User login request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    /// User email address
    #[validate(email(message = "invalid email format"))]
    #[schema(example = "user@example.com")]
    pub email: String,
    /// User password
    #[schema(example = "SecurePass123!")]
    pub password: String,
}

/// User CRUD routes (behind the shared-secret gate)
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_user))
        .route(
            "/:id",
            get(get_user).put(update_user).delete(delete_user),
        )
}

/// Session routes open to anyone with credentials
pub fn session_routes() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

/// Session routes that require a valid bearer token
pub fn logout_routes() -> Router<AppState> {
    Router::new().route("/logout", post(logout))
}

/// Create a new user account
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Invalid payload"),
        (status = 403, description = "Missing or invalid API key"),
        (status = 409, description = "Email already registered")
    ),
    security(("api_key" = []))
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUserRequest>,
) -> AppResult<Created<UserResponse>> {
    let user = state
        .user_service
        .create_user(payload.name, payload.email, payload.password)
        .await?;

    Ok(Created(UserResponse::from(user)))
}

/// Fetch a user by id
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 403, description = "Missing or invalid API key"),
        (status = 404, description = "No such user")
    ),
    security(("api_key" = []))
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<UserResponse>>> {
    let user = state.user_service.get_user(id).await?;
    Ok(Json(ApiResponse::success(UserResponse::from(user))))
}

/// Update a user's name, email, or password
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = Uuid, Path, description = "User id")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, description = "Invalid payload"),
        (status = 403, description = "Missing or invalid API key"),
        (status = 404, description = "No such user"),
        (status = 409, description = "Email already registered")
    ),
    security(("api_key" = []))
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateUserRequest>,
) -> AppResult<Json<ApiResponse<UserResponse>>> {
    let user = state
        .user_service
        .update_user(id, payload.name, payload.email, payload.password)
        .await?;

    Ok(Json(ApiResponse::success(UserResponse::from(user))))
}

/// Soft delete a user
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 403, description = "Missing or invalid API key"),
        (status = 404, description = "No such user, or already deleted")
    ),
    security(("api_key" = []))
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<MessageResponse>>> {
    state.user_service.delete_user(id).await?;
    Ok(Json(ApiResponse::success(MessageResponse::new(
        "user deleted",
    ))))
}

/// Log in with email and password
#[utoipa::path(
    post,
    path = "/users/login",
    tag = "Sessions",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = TokenResponse),
        (status = 400, description = "Invalid payload"),
        (status = 401, description = "Unknown email or wrong password")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Json<ApiResponse<TokenResponse>>> {
    let token = state
        .auth_service
        .login(payload.email, payload.password)
        .await?;

    Ok(Json(ApiResponse::success(token)))
}

/// Log out the authenticated user
#[utoipa::path(
    post,
    path = "/users/logout",
    tag = "Sessions",
    responses(
        (status = 200, description = "Logout acknowledged", body = MessageResponse),
        (status = 401, description = "Missing or invalid bearer token")
    ),
    security(("bearer_auth" = []))
)]
pub async fn logout(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
) -> AppResult<Json<ApiResponse<MessageResponse>>> {
    state.auth_service.logout(current_user.id).await?;
    Ok(Json(ApiResponse::success(MessageResponse::new(
        "logged out",
    ))))
}
