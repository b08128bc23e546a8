//! Application services layer - use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion, one narrow capability trait per collaborator.

mod auth_service;
mod record_service;
pub mod token;
mod user_service;

pub use auth_service::{AuthService, Authenticator, TokenResponse};
pub use record_service::{RecordManager, RecordService};
pub use token::{Claims, TokenCodec, TokenError};
pub use user_service::{UserManager, UserService};
