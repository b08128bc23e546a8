//! Application configuration module
//!
//! Environment-derived settings and application-wide constants. The loaded
//! [`Config`] is handed to components explicitly; there is no global state.

mod constants;
mod settings;

pub use constants::*;
pub use settings::Config;
