//! User service - account management business logic.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{Password, User};
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

/// User service trait for dependency injection.
///
/// All operations act on active users; soft-deleted accounts are invisible
/// here, except that their emails stay reserved.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Get an active user by id.
    async fn get_user(&self, id: Uuid) -> AppResult<User>;

    /// Create a user; fails with `Conflict` when the email is taken,
    /// including by a soft-deleted account.
    async fn create_user(&self, name: String, email: String, password: String) -> AppResult<User>;

    /// Update any subset of name, email, and password.
    async fn update_user(
        &self,
        id: Uuid,
        name: Option<String>,
        email: Option<String>,
        password: Option<String>,
    ) -> AppResult<User>;

    /// Soft delete a user; a repeat delete reports `NotFound`.
    async fn delete_user(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of [`UserService`] over the credential store.
pub struct UserManager {
    users: Arc<dyn UserRepository>,
}

impl UserManager {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

/// Hash a password on the blocking pool; Argon2 is CPU-bound by design.
async fn hash_password(password: String) -> AppResult<String> {
    tokio::task::spawn_blocking(move || Password::new(&password).map(Password::into_string))
        .await
        .map_err(|e| AppError::internal(format!("password hashing task failed: {}", e)))?
}

#[async_trait]
impl UserService for UserManager {
    async fn get_user(&self, id: Uuid) -> AppResult<User> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("user"))
    }

    async fn create_user(&self, name: String, email: String, password: String) -> AppResult<User> {
        // Uniqueness check includes soft-deleted accounts: a deleted
        // account's email is not re-creatable.
        if self
            .users
            .find_by_email_with_deleted(&email)
            .await?
            .is_some()
        {
            return Err(AppError::conflict("user"));
        }

        let password_hash = hash_password(password).await?;
        self.users.create(name, email, password_hash).await
    }

    async fn update_user(
        &self,
        id: Uuid,
        name: Option<String>,
        email: Option<String>,
        password: Option<String>,
    ) -> AppResult<User> {
        if let Some(new_email) = &email {
            match self.users.find_by_email_with_deleted(new_email).await? {
                Some(existing) if existing.id != id => {
                    return Err(AppError::conflict("user"));
                }
                _ => {}
            }
        }

        let password_hash = match password {
            Some(password) => Some(hash_password(password).await?),
            None => None,
        };

        self.users.update(id, name, email, password_hash).await
    }

    async fn delete_user(&self, id: Uuid) -> AppResult<()> {
        self.users.delete(id).await
    }
}
