//! Financial record handlers.

use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Extension, Router,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::domain::{Record, RecordDraft, RecordKind};
use crate::errors::AppResult;
use crate::types::ApiResponse;

/// Record creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateRecordRequest {
    /// Record label
    #[validate(length(min = 1, message = "name is required"))]
    #[schema(example = "Groceries")]
    pub name: String,
    /// Optional free-form description
    #[serde(default)]
    pub description: String,
    /// Date the expense or income applies to
    pub date: DateTime<Utc>,
    /// Free-form tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// expense or income
    pub kind: RecordKind,
    /// Amount in minor currency units
    #[schema(example = 4250)]
    pub amount: i64,
}

/// Record routes (behind the bearer gate)
pub fn record_routes() -> Router<AppState> {
    Router::new()
        .route("/list", get(list_records))
        .route("/new", post(create_record))
}

/// List the authenticated user's records
#[utoipa::path(
    get,
    path = "/records/list",
    tag = "Records",
    responses(
        (status = 200, description = "Records for the authenticated user", body = [Record]),
        (status = 401, description = "Missing or invalid bearer token")
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_records(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
) -> AppResult<Json<ApiResponse<Vec<Record>>>> {
    let records = state.record_service.list_records(current_user.id).await?;
    Ok(Json(ApiResponse::success(records)))
}

/// Create a record for the authenticated user
#[utoipa::path(
    post,
    path = "/records/new",
    tag = "Records",
    request_body = CreateRecordRequest,
    responses(
        (status = 200, description = "Record created", body = Record),
        (status = 400, description = "Invalid payload"),
        (status = 401, description = "Missing or invalid bearer token")
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_record(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    ValidatedJson(payload): ValidatedJson<CreateRecordRequest>,
) -> AppResult<Json<ApiResponse<Record>>> {
    let draft = RecordDraft {
        name: payload.name,
        description: payload.description,
        date: payload.date,
        tags: payload.tags,
        kind: payload.kind,
        amount: payload.amount,
    };

    let record = state
        .record_service
        .create_record(current_user.id, draft)
        .await?;

    Ok(Json(ApiResponse::success(record)))
}
