//! Record service - financial record business logic.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{Record, RecordDraft};
use crate::errors::AppResult;
use crate::infra::RecordRepository;

/// Record service trait for dependency injection.
#[async_trait]
pub trait RecordService: Send + Sync {
    /// List the authenticated user's records.
    async fn list_records(&self, user_id: Uuid) -> AppResult<Vec<Record>>;

    /// Create a record owned by the authenticated user.
    async fn create_record(&self, user_id: Uuid, draft: RecordDraft) -> AppResult<Record>;
}

/// Concrete implementation of [`RecordService`] over the record store.
pub struct RecordManager {
    records: Arc<dyn RecordRepository>,
}

impl RecordManager {
    pub fn new(records: Arc<dyn RecordRepository>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl RecordService for RecordManager {
    async fn list_records(&self, user_id: Uuid) -> AppResult<Vec<Record>> {
        self.records.list_for_user(user_id).await
    }

    async fn create_record(&self, user_id: Uuid, draft: RecordDraft) -> AppResult<Record> {
        self.records.create(user_id, draft).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RecordKind;
    use crate::infra::MockRecordRepository;
    use chrono::Utc;
    use mockall::predicate::eq;

    fn draft() -> RecordDraft {
        RecordDraft {
            name: "groceries".to_string(),
            description: String::new(),
            date: Utc::now(),
            tags: vec!["food".to_string()],
            kind: RecordKind::Expense,
            amount: 4250,
        }
    }

    #[tokio::test]
    async fn list_scopes_to_owner() {
        let user_id = Uuid::new_v4();
        let mut repo = MockRecordRepository::new();
        repo.expect_list_for_user()
            .with(eq(user_id))
            .returning(|_| Ok(vec![]));

        let service = RecordManager::new(Arc::new(repo));
        let records = service.list_records(user_id).await.unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn create_assigns_ownership() {
        let user_id = Uuid::new_v4();
        let mut repo = MockRecordRepository::new();
        repo.expect_create().returning(|owner, draft| {
            let now = Utc::now();
            Ok(Record {
                id: Uuid::new_v4(),
                name: draft.name,
                description: draft.description,
                date: draft.date,
                tags: draft.tags,
                kind: draft.kind,
                amount: draft.amount,
                user_id: owner,
                created_at: now,
                updated_at: now,
                deleted_at: None,
            })
        });

        let service = RecordManager::new(Arc::new(repo));
        let record = service.create_record(user_id, draft()).await.unwrap();
        assert_eq!(record.user_id, user_id);
        assert_eq!(record.amount, 4250);
    }
}
