//! Repository layer - data access abstraction
//!
//! Repositories provide an abstraction over data persistence. This is the
//! layer closest to raw database failures, so it classifies them: an absent
//! row becomes `NotFound`, a unique violation becomes `Conflict`, anything
//! else stays a wrapped database error.

pub(crate) mod entities;
mod record_repository;
mod user_repository;

pub use record_repository::{RecordRepository, RecordStore};
pub use user_repository::{UserRepository, UserStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use record_repository::MockRecordRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
