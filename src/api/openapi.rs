//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{record_handler, user_handler};
use crate::config::API_KEY_HEADER;
use crate::domain::{Record, RecordKind, UserResponse};
use crate::services::TokenResponse;
use crate::types::{ErrorBody, MessageResponse};

/// OpenAPI documentation for the Ledger API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Ledger API",
        version = "0.1.0",
        description = "User accounts and financial records behind token authentication",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    paths(
        // User endpoints
        user_handler::create_user,
        user_handler::get_user,
        user_handler::update_user,
        user_handler::delete_user,
        // Session endpoints
        user_handler::login,
        user_handler::logout,
        // Record endpoints
        record_handler::list_records,
        record_handler::create_record,
    ),
    components(
        schemas(
            // Domain types
            UserResponse,
            Record,
            RecordKind,
            // Request types
            user_handler::CreateUserRequest,
            user_handler::UpdateUserRequest,
            user_handler::LoginRequest,
            record_handler::CreateRecordRequest,
            // Response types
            TokenResponse,
            MessageResponse,
            ErrorBody,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Users", description = "User account management (API key)"),
        (name = "Sessions", description = "Login and logout"),
        (name = "Records", description = "Financial records (bearer token)")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for the two gates
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "api_key",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(API_KEY_HEADER))),
            );
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Token obtained from /users/login"))
                        .build(),
                ),
            );
        }
    }
}
