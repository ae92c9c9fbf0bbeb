use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::category::Category;
use crate::models::goal::{FinancialGoal, GoalStatus};
use crate::models::story::Story;
use crate::models::transaction::{Transaction, TransactionKind, TransactionWithCategory};

/// Optional filters for transaction queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransactionFilter {
    pub kind: Option<TransactionKind>,
}

impl TransactionFilter {
    /// Filter matching every transaction.
    #[must_use]
    pub fn any() -> Self {
        Self::default()
    }

    /// Filter matching only transactions of the given kind.
    #[must_use]
    pub fn with_kind(kind: TransactionKind) -> Self {
        Self { kind: Some(kind) }
    }

    /// Whether a transaction passes this filter.
    #[must_use]
    pub fn matches(&self, transaction: &Transaction) -> bool {
        self.kind.map_or(true, |k| transaction.kind == k)
    }
}

/// Trait abstraction over the backing data store (SOLID: Dependency Inversion).
///
/// The hosted backend and the local ledger both implement this trait. The
/// aggregation and service layers only ever see `dyn DataStore`, so swapping
/// the backing store touches nothing else.
///
/// All reads take the owning user id explicitly — there is no ambient
/// session anywhere below this boundary.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait DataStore: Send + Sync {
    /// Human-readable name of this store (for logs/errors).
    fn name(&self) -> &str;

    // ── Dashboard reads ─────────────────────────────────────────────

    /// All transactions for a user matching `filter`, in store order.
    async fn transactions(
        &self,
        user_id: Uuid,
        filter: TransactionFilter,
    ) -> Result<Vec<Transaction>, CoreError>;

    /// The `limit` most recent transactions for a user, date descending,
    /// equal dates broken by ascending id, each joined with its category.
    async fn recent_transactions(
        &self,
        user_id: Uuid,
        limit: usize,
    ) -> Result<Vec<TransactionWithCategory>, CoreError>;

    /// Number of stories owned by a user.
    async fn count_stories(&self, user_id: Uuid) -> Result<usize, CoreError>;

    /// Number of goals owned by a user with the given status.
    async fn count_goals_with_status(
        &self,
        user_id: Uuid,
        status: GoalStatus,
    ) -> Result<usize, CoreError>;

    /// All stories for a user, `created_at` ascending.
    async fn stories_by_creation(&self, user_id: Uuid) -> Result<Vec<Story>, CoreError>;

    // ── Listings & lookups ──────────────────────────────────────────

    /// All stories for a user, newest first.
    async fn stories_newest_first(&self, user_id: Uuid) -> Result<Vec<Story>, CoreError>;

    /// A single story by id, or `None` if it does not exist.
    async fn story(&self, story_id: Uuid) -> Result<Option<Story>, CoreError>;

    /// All goals for a user, newest first.
    async fn goals_newest_first(&self, user_id: Uuid) -> Result<Vec<FinancialGoal>, CoreError>;

    /// A single goal by id, or `None` if it does not exist.
    async fn goal(&self, goal_id: Uuid) -> Result<Option<FinancialGoal>, CoreError>;

    /// All categories for a user, name ascending.
    async fn categories(&self, user_id: Uuid) -> Result<Vec<Category>, CoreError>;

    // ── Writes (unconditional inserts, per the entry forms) ─────────

    async fn insert_transaction(&self, transaction: Transaction) -> Result<(), CoreError>;

    async fn insert_category(&self, category: Category) -> Result<(), CoreError>;

    async fn insert_goal(&self, goal: FinancialGoal) -> Result<(), CoreError>;

    async fn insert_story(&self, story: Story) -> Result<(), CoreError>;

    /// Overwrite an existing goal row (progress and status updates).
    /// Fails with [`CoreError::GoalNotFound`] if the row does not exist.
    async fn update_goal(&self, goal: FinancialGoal) -> Result<(), CoreError>;
}
