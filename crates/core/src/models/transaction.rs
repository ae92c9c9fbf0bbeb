use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Direction of money movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    /// Money coming in
    Income,
    /// Money going out
    Expense,
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionKind::Income => write!(f, "income"),
            TransactionKind::Expense => write!(f, "expense"),
        }
    }
}

/// A single logged transaction.
///
/// **Important**: transactions are immutable once recorded — there is no
/// edit or delete flow. Corrections are new entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: Uuid,

    /// Owning user
    pub user_id: Uuid,

    /// Optional category link; uncategorized entries carry `None`.
    #[serde(default)]
    pub category_id: Option<Uuid>,

    /// Amount of money moved (always positive; direction is `kind`)
    pub amount: f64,

    /// Income or Expense
    pub kind: TransactionKind,

    /// Optional free-text note
    #[serde(default)]
    pub description: Option<String>,

    /// Day the money moved (daily granularity)
    pub date: NaiveDate,

    /// When the row was recorded
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    pub fn new(
        user_id: Uuid,
        category_id: Option<Uuid>,
        amount: f64,
        kind: TransactionKind,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            category_id,
            amount,
            kind,
            description: None,
            date,
            created_at: Utc::now(),
        }
    }

    /// Create a transaction with a description attached.
    pub fn with_description(
        user_id: Uuid,
        category_id: Option<Uuid>,
        amount: f64,
        kind: TransactionKind,
        date: NaiveDate,
        description: impl Into<String>,
    ) -> Self {
        Self {
            description: Some(description.into()),
            ..Self::new(user_id, category_id, amount, kind, date)
        }
    }
}

/// Compact category projection embedded in transaction listings
/// (the recent-activity panel only needs the name and emoji).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub name: String,
    #[serde(default)]
    pub emoji: Option<String>,
}

/// A transaction joined with its category, as shown in recent-activity lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionWithCategory {
    #[serde(flatten)]
    pub transaction: Transaction,

    /// `None` when the transaction has no category or the category row is gone.
    #[serde(default)]
    pub category: Option<CategorySummary>,
}
