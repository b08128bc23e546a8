//! Financial record entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Record classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Expense,
    Income,
}

impl From<&str> for RecordKind {
    fn from(s: &str) -> Self {
        match s {
            "income" => RecordKind::Income,
            _ => RecordKind::Expense,
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordKind::Expense => write!(f, "expense"),
            RecordKind::Income => write!(f, "income"),
        }
    }
}

/// Financial record owned by a user
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Record {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub tags: Vec<String>,
    pub kind: RecordKind,
    /// Amount in minor currency units
    #[schema(example = 1250)]
    pub amount: i64,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Fields required to create a record, before ownership and identity
/// are assigned.
#[derive(Debug, Clone)]
pub struct RecordDraft {
    pub name: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub tags: Vec<String>,
    pub kind: RecordKind,
    pub amount: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_round_trips_through_strings() {
        assert_eq!(RecordKind::from("income"), RecordKind::Income);
        assert_eq!(RecordKind::from("expense"), RecordKind::Expense);
        assert_eq!(RecordKind::Income.to_string(), "income");
        assert_eq!(RecordKind::Expense.to_string(), "expense");
    }

    #[test]
    fn kind_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&RecordKind::Expense).unwrap(),
            "\"expense\""
        );
    }
}
