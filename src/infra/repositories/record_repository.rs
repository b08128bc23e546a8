//! Record repository.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use super::entities::record::{self, Entity as RecordEntity};
use crate::domain::{Record, RecordDraft};
use crate::errors::AppResult;

/// Record store contract. Records are always scoped to their owner.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// List a user's active records, newest first
    async fn list_for_user(&self, user_id: Uuid) -> AppResult<Vec<Record>>;

    /// Insert a new record owned by the given user
    async fn create(&self, user_id: Uuid, draft: RecordDraft) -> AppResult<Record>;
}

/// SeaORM-backed implementation of [`RecordRepository`].
pub struct RecordStore {
    db: DatabaseConnection,
}

impl RecordStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RecordRepository for RecordStore {
    async fn list_for_user(&self, user_id: Uuid) -> AppResult<Vec<Record>> {
        let models = RecordEntity::find()
            .filter(record::Column::UserId.eq(user_id))
            .filter(record::Column::DeletedAt.is_null())
            .order_by_desc(record::Column::Date)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Record::from).collect())
    }

    async fn create(&self, user_id: Uuid, draft: RecordDraft) -> AppResult<Record> {
        let now = Utc::now();
        let model = record::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(draft.name),
            description: Set(draft.description),
            date: Set(draft.date),
            tags: Set(draft.tags),
            kind: Set(draft.kind.to_string()),
            amount: Set(draft.amount),
            user_id: Set(user_id),
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
        };

        let inserted = model.insert(&self.db).await?;
        Ok(Record::from(inserted))
    }
}
