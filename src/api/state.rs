//! Application state - dependency injection container.
//!
//! Everything here is read-only once constructed: the configuration and the
//! service trait objects are built at startup, before the first request, and
//! shared across request tasks behind `Arc`s.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::{Database, RecordStore, UserStore};
use crate::services::{
    AuthService, Authenticator, RecordManager, RecordService, TokenCodec, UserManager, UserService,
};

/// Application state containing configuration and all services.
#[derive(Clone)]
pub struct AppState {
    /// Process-wide configuration (secrets, token lifetime)
    pub config: Arc<Config>,
    /// Authentication service
    pub auth_service: Arc<dyn AuthService>,
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Record service
    pub record_service: Arc<dyn RecordService>,
}

impl AppState {
    /// Create application state with explicitly injected services.
    pub fn new(
        config: Arc<Config>,
        auth_service: Arc<dyn AuthService>,
        user_service: Arc<dyn UserService>,
        record_service: Arc<dyn RecordService>,
    ) -> Self {
        Self {
            config,
            auth_service,
            user_service,
            record_service,
        }
    }

    /// Create application state from a database connection and config.
    pub fn from_config(database: &Database, config: Config) -> Self {
        let users = Arc::new(UserStore::new(database.get_connection()));
        let records = Arc::new(RecordStore::new(database.get_connection()));
        let tokens = TokenCodec::new(config.jwt_secret_bytes(), config.jwt_expiration_hours);

        Self {
            config: Arc::new(config),
            auth_service: Arc::new(Authenticator::new(users.clone(), tokens)),
            user_service: Arc::new(UserManager::new(users)),
            record_service: Arc::new(RecordManager::new(records)),
        }
    }
}
