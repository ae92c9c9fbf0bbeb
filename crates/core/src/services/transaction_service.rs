use chrono::NaiveDate;
use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::transaction::{Transaction, TransactionKind, TransactionWithCategory};
use crate::store::traits::DataStore;

/// Input for [`TransactionService::record`].
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    pub category_id: Option<Uuid>,
    pub amount: f64,
    pub kind: TransactionKind,
    pub description: Option<String>,
    pub date: NaiveDate,
}

/// Records and lists transactions.
///
/// Validation mirrors the entry form: the amount must be a positive, finite
/// number; everything else is inserted as given — no dedup, no edits.
pub struct TransactionService;

impl TransactionService {
    pub fn new() -> Self {
        Self
    }

    /// Record a new transaction for a user. Returns the generated id.
    pub async fn record(
        &self,
        store: &dyn DataStore,
        user_id: Uuid,
        draft: TransactionDraft,
    ) -> Result<Uuid, CoreError> {
        if !draft.amount.is_finite() || draft.amount <= 0.0 {
            return Err(CoreError::ValidationError(
                "Transaction amount must be a positive number".into(),
            ));
        }

        let mut transaction = Transaction::new(
            user_id,
            draft.category_id,
            draft.amount,
            draft.kind,
            draft.date,
        );
        transaction.description = draft.description;

        let id = transaction.id;
        store.insert_transaction(transaction).await?;
        Ok(id)
    }

    /// The `limit` most recent transactions with their categories, newest first.
    pub async fn recent(
        &self,
        store: &dyn DataStore,
        user_id: Uuid,
        limit: usize,
    ) -> Result<Vec<TransactionWithCategory>, CoreError> {
        store.recent_transactions(user_id, limit).await
    }
}

impl Default for TransactionService {
    fn default() -> Self {
        Self::new()
    }
}
