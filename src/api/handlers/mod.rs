//! HTTP request handlers.

pub mod record_handler;
pub mod user_handler;

pub use record_handler::record_routes;
pub use user_handler::{logout_routes, session_routes, user_routes};
