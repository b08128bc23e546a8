//! User repository with soft delete support.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set, SqlErr,
};
use uuid::Uuid;

use super::entities::user::{self, Entity as UserEntity};
use crate::domain::User;
use crate::errors::{AppError, AppResult};

/// Credential store contract.
///
/// Query methods exclude soft-deleted users unless the name says otherwise.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find active user by id
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Find active user by email
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Find user by email including soft-deleted
    async fn find_by_email_with_deleted(&self, email: &str) -> AppResult<Option<User>>;

    /// Insert a new user row
    async fn create(&self, name: String, email: String, password_hash: String) -> AppResult<User>;

    /// Update the provided fields of an active user
    async fn update(
        &self,
        id: Uuid,
        name: Option<String>,
        email: Option<String>,
        password_hash: Option<String>,
    ) -> AppResult<User>;

    /// Soft delete an active user
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// SeaORM-backed implementation of [`UserRepository`].
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_active_model(&self, id: Uuid) -> AppResult<Option<user::Model>> {
        Ok(UserEntity::find_by_id(id)
            .filter(user::Column::DeletedAt.is_null())
            .one(&self.db)
            .await?)
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.find_active_model(id).await?.map(User::from))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let model = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .filter(user::Column::DeletedAt.is_null())
            .one(&self.db)
            .await?;
        Ok(model.map(User::from))
    }

    async fn find_by_email_with_deleted(&self, email: &str) -> AppResult<Option<User>> {
        let model = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await?;
        Ok(model.map(User::from))
    }

    async fn create(&self, name: String, email: String, password_hash: String) -> AppResult<User> {
        let now = Utc::now();
        let model = user::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name),
            email: Set(email),
            password_hash: Set(password_hash),
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
        };

        let inserted = model.insert(&self.db).await.map_err(|e| {
            // Concurrent creations can slip past the service-level check;
            // the unique index is the source of truth.
            if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
                AppError::conflict("user")
            } else {
                AppError::from(e)
            }
        })?;

        Ok(User::from(inserted))
    }

    async fn update(
        &self,
        id: Uuid,
        name: Option<String>,
        email: Option<String>,
        password_hash: Option<String>,
    ) -> AppResult<User> {
        let existing = self
            .find_active_model(id)
            .await?
            .ok_or_else(|| AppError::not_found("user"))?;

        let mut model: user::ActiveModel = existing.into();
        if let Some(name) = name {
            model.name = Set(name);
        }
        if let Some(email) = email {
            model.email = Set(email);
        }
        if let Some(password_hash) = password_hash {
            model.password_hash = Set(password_hash);
        }
        model.updated_at = Set(Utc::now());

        let updated = model.update(&self.db).await.map_err(|e| {
            if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
                AppError::conflict("user")
            } else {
                AppError::from(e)
            }
        })?;

        Ok(User::from(updated))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let existing = self
            .find_active_model(id)
            .await?
            .ok_or_else(|| AppError::not_found("user"))?;

        let now = Utc::now();
        let mut model: user::ActiveModel = existing.into();
        model.deleted_at = Set(Some(now));
        model.updated_at = Set(now);
        model.update(&self.db).await?;

        Ok(())
    }
}
