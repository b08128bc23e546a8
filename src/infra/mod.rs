//! Infrastructure layer - external systems integration
//!
//! Database connection management and the repositories that persist
//! domain entities.

pub mod db;
pub mod repositories;

pub use db::Database;
pub use repositories::{RecordRepository, RecordStore, UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockRecordRepository, MockUserRepository};
