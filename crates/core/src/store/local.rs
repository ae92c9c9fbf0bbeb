use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::category::Category;
use crate::models::goal::{FinancialGoal, GoalStatus};
use crate::models::ledger::Ledger;
use crate::models::story::Story;
use crate::models::transaction::{CategorySummary, Transaction, TransactionWithCategory};

use super::traits::{DataStore, TransactionFilter};

const STORE_NAME: &str = "local";

/// In-process store over a [`Ledger`] — offline use and tests.
///
/// Implements the exact same filter/sort/count semantics as the hosted
/// backend, including the recent-transactions tiebreak (date descending,
/// then ascending id).
///
/// Clones are cheap and share the same underlying ledger, so a caller can
/// hand one handle to the facade and keep another for vault saves.
#[derive(Clone, Default)]
pub struct LocalStore {
    ledger: Arc<RwLock<Ledger>>,
}

impl LocalStore {
    /// Fresh store with an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing ledger (e.g., one opened from a vault file).
    pub fn from_ledger(ledger: Ledger) -> Self {
        Self {
            ledger: Arc::new(RwLock::new(ledger)),
        }
    }

    /// Snapshot the current ledger state (for vault saves).
    #[must_use]
    pub fn snapshot(&self) -> Ledger {
        self.read().clone()
    }

    fn read(&self) -> RwLockReadGuard<'_, Ledger> {
        self.ledger.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Ledger> {
        self.ledger.write().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl DataStore for LocalStore {
    fn name(&self) -> &str {
        STORE_NAME
    }

    async fn transactions(
        &self,
        user_id: Uuid,
        filter: TransactionFilter,
    ) -> Result<Vec<Transaction>, CoreError> {
        let ledger = self.read();
        Ok(ledger
            .transactions
            .iter()
            .filter(|tx| tx.user_id == user_id && filter.matches(tx))
            .cloned()
            .collect())
    }

    async fn recent_transactions(
        &self,
        user_id: Uuid,
        limit: usize,
    ) -> Result<Vec<TransactionWithCategory>, CoreError> {
        let ledger = self.read();
        let mut rows: Vec<&Transaction> = ledger
            .transactions
            .iter()
            .filter(|tx| tx.user_id == user_id)
            .collect();
        rows.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.id.cmp(&b.id)));
        rows.truncate(limit);

        Ok(rows
            .into_iter()
            .map(|tx| TransactionWithCategory {
                transaction: tx.clone(),
                category: tx
                    .category_id
                    .and_then(|cid| ledger.categories.iter().find(|c| c.id == cid))
                    .map(|c| CategorySummary {
                        name: c.name.clone(),
                        emoji: c.emoji.clone(),
                    }),
            })
            .collect())
    }

    async fn count_stories(&self, user_id: Uuid) -> Result<usize, CoreError> {
        let ledger = self.read();
        Ok(ledger
            .stories
            .iter()
            .filter(|s| s.user_id == user_id)
            .count())
    }

    async fn count_goals_with_status(
        &self,
        user_id: Uuid,
        status: GoalStatus,
    ) -> Result<usize, CoreError> {
        let ledger = self.read();
        Ok(ledger
            .goals
            .iter()
            .filter(|g| g.user_id == user_id && g.status == status)
            .count())
    }

    async fn stories_by_creation(&self, user_id: Uuid) -> Result<Vec<Story>, CoreError> {
        let ledger = self.read();
        let mut stories: Vec<Story> = ledger
            .stories
            .iter()
            .filter(|s| s.user_id == user_id)
            .cloned()
            .collect();
        // Stable sort: equal timestamps keep insertion order.
        stories.sort_by_key(|s| s.created_at);
        Ok(stories)
    }

    async fn stories_newest_first(&self, user_id: Uuid) -> Result<Vec<Story>, CoreError> {
        let mut stories = self.stories_by_creation(user_id).await?;
        stories.reverse();
        Ok(stories)
    }

    async fn story(&self, story_id: Uuid) -> Result<Option<Story>, CoreError> {
        let ledger = self.read();
        Ok(ledger.stories.iter().find(|s| s.id == story_id).cloned())
    }

    async fn goals_newest_first(&self, user_id: Uuid) -> Result<Vec<FinancialGoal>, CoreError> {
        let ledger = self.read();
        let mut goals: Vec<FinancialGoal> = ledger
            .goals
            .iter()
            .filter(|g| g.user_id == user_id)
            .cloned()
            .collect();
        goals.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(goals)
    }

    async fn goal(&self, goal_id: Uuid) -> Result<Option<FinancialGoal>, CoreError> {
        let ledger = self.read();
        Ok(ledger.goals.iter().find(|g| g.id == goal_id).cloned())
    }

    async fn categories(&self, user_id: Uuid) -> Result<Vec<Category>, CoreError> {
        let ledger = self.read();
        let mut categories: Vec<Category> = ledger
            .categories
            .iter()
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }

    async fn insert_transaction(&self, transaction: Transaction) -> Result<(), CoreError> {
        self.write().transactions.push(transaction);
        Ok(())
    }

    async fn insert_category(&self, category: Category) -> Result<(), CoreError> {
        self.write().categories.push(category);
        Ok(())
    }

    async fn insert_goal(&self, goal: FinancialGoal) -> Result<(), CoreError> {
        self.write().goals.push(goal);
        Ok(())
    }

    async fn insert_story(&self, story: Story) -> Result<(), CoreError> {
        self.write().stories.push(story);
        Ok(())
    }

    async fn update_goal(&self, goal: FinancialGoal) -> Result<(), CoreError> {
        let mut ledger = self.write();
        match ledger.goals.iter_mut().find(|g| g.id == goal.id) {
            Some(slot) => {
                *slot = goal;
                Ok(())
            }
            None => Err(CoreError::GoalNotFound(goal.id.to_string())),
        }
    }
}
