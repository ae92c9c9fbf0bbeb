pub mod errors;
pub mod models;
pub mod services;
pub mod storage;
pub mod store;

use std::sync::Arc;

use uuid::Uuid;

use errors::CoreError;
use models::{
    category::{Category, DEFAULT_CATEGORIES},
    dashboard::Dashboard,
    goal::FinancialGoal,
    settings::Settings,
    story::Story,
    transaction::{Transaction, TransactionWithCategory},
};
use services::{
    dashboard_service::{DashboardService, RECENT_TRANSACTION_LIMIT},
    goal_service::{GoalDraft, GoalService},
    story_service::{StoryDraft, StoryService},
    transaction_service::{TransactionDraft, TransactionService},
};
use store::local::LocalStore;
use store::rest::RestDataStore;
use store::traits::{DataStore, TransactionFilter};

/// Main entry point for the Money Stories core library.
///
/// Owns a handle to the backing store plus the services that operate on it.
/// The current user is always passed in explicitly — session lifecycle lives
/// entirely with the caller, never in here.
#[must_use]
pub struct MoneyStories {
    store: Arc<dyn DataStore>,
    dashboard_service: DashboardService,
    transaction_service: TransactionService,
    story_service: StoryService,
    goal_service: GoalService,
}

impl std::fmt::Debug for MoneyStories {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MoneyStories")
            .field("store", &self.store.name())
            .finish()
    }
}

impl MoneyStories {
    /// Wrap an existing store handle.
    pub fn with_store(store: Arc<dyn DataStore>) -> Self {
        Self {
            store,
            dashboard_service: DashboardService::new(),
            transaction_service: TransactionService::new(),
            story_service: StoryService::new(),
            goal_service: GoalService::new(),
        }
    }

    /// Connect to the hosted backend configured in `settings`.
    pub fn connect(settings: &Settings) -> Result<Self, CoreError> {
        let url = settings
            .service_url
            .as_deref()
            .ok_or_else(|| CoreError::Config("service_url is not set".into()))?;
        let key = settings
            .api_key
            .as_deref()
            .ok_or_else(|| CoreError::Config("api_key is not set".into()))?;
        Ok(Self::with_store(Arc::new(RestDataStore::new(url, key))))
    }

    /// Fresh in-memory store — offline use and tests.
    pub fn in_memory() -> Self {
        Self::with_store(Arc::new(LocalStore::new()))
    }

    // ── Dashboard ───────────────────────────────────────────────────

    /// Compute the dashboard for a user, or the empty dashboard when
    /// nobody is signed in (no store calls are made in that case).
    pub async fn dashboard(&self, user_id: Option<Uuid>) -> Result<Dashboard, CoreError> {
        self.dashboard_service
            .compute(self.store.as_ref(), user_id)
            .await
    }

    // ── Transactions ────────────────────────────────────────────────

    /// Record a new transaction. Returns the generated id.
    pub async fn record_transaction(
        &self,
        user_id: Uuid,
        draft: TransactionDraft,
    ) -> Result<Uuid, CoreError> {
        self.transaction_service
            .record(self.store.as_ref(), user_id, draft)
            .await
    }

    /// The most recent transactions with their categories, newest first.
    pub async fn recent_transactions(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<TransactionWithCategory>, CoreError> {
        self.transaction_service
            .recent(self.store.as_ref(), user_id, RECENT_TRANSACTION_LIMIT)
            .await
    }

    /// All of a user's transactions matching `filter`.
    pub async fn transactions(
        &self,
        user_id: Uuid,
        filter: TransactionFilter,
    ) -> Result<Vec<Transaction>, CoreError> {
        self.store.transactions(user_id, filter).await
    }

    // ── Categories ──────────────────────────────────────────────────

    /// Create a category. Returns the generated id.
    pub async fn create_category(
        &self,
        user_id: Uuid,
        name: impl Into<String>,
        emoji: Option<String>,
    ) -> Result<Uuid, CoreError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CoreError::ValidationError(
                "Category name is required".into(),
            ));
        }

        let mut category = Category::new(user_id, name);
        category.emoji = emoji;
        let id = category.id;
        self.store.insert_category(category).await?;
        Ok(id)
    }

    /// All of a user's categories, name ascending.
    pub async fn categories(&self, user_id: Uuid) -> Result<Vec<Category>, CoreError> {
        self.store.categories(user_id).await
    }

    /// Seed the starter category set for a brand-new user.
    /// Returns the generated ids, in seed-table order.
    pub async fn seed_default_categories(&self, user_id: Uuid) -> Result<Vec<Uuid>, CoreError> {
        let mut ids = Vec::with_capacity(DEFAULT_CATEGORIES.len());
        for (name, emoji) in DEFAULT_CATEGORIES {
            let category = Category::with_emoji(user_id, *name, *emoji);
            ids.push(category.id);
            self.store.insert_category(category).await?;
        }
        Ok(ids)
    }

    // ── Stories ─────────────────────────────────────────────────────

    /// Create a story. Returns the generated id.
    pub async fn create_story(&self, user_id: Uuid, draft: StoryDraft) -> Result<Uuid, CoreError> {
        self.story_service
            .create(self.store.as_ref(), user_id, draft)
            .await
    }

    /// All of a user's stories, newest first.
    pub async fn stories(&self, user_id: Uuid) -> Result<Vec<Story>, CoreError> {
        self.story_service.list(self.store.as_ref(), user_id).await
    }

    /// A single story by id.
    pub async fn story(&self, story_id: Uuid) -> Result<Story, CoreError> {
        self.story_service.get(self.store.as_ref(), story_id).await
    }

    // ── Goals ───────────────────────────────────────────────────────

    /// Create a savings goal. Returns the generated id.
    pub async fn create_goal(&self, user_id: Uuid, draft: GoalDraft) -> Result<Uuid, CoreError> {
        self.goal_service
            .create(self.store.as_ref(), user_id, draft)
            .await
    }

    /// All of a user's goals, newest first.
    pub async fn goals(&self, user_id: Uuid) -> Result<Vec<FinancialGoal>, CoreError> {
        self.goal_service.list(self.store.as_ref(), user_id).await
    }

    /// A single goal by id.
    pub async fn goal(&self, goal_id: Uuid) -> Result<FinancialGoal, CoreError> {
        self.goal_service.get(self.store.as_ref(), goal_id).await
    }

    /// Add progress to a goal. Returns the updated goal.
    pub async fn add_goal_progress(
        &self,
        goal_id: Uuid,
        delta: f64,
    ) -> Result<FinancialGoal, CoreError> {
        self.goal_service
            .add_progress(self.store.as_ref(), goal_id, delta)
            .await
    }

    /// Mark a goal as completed. Valid only while the goal is in progress.
    pub async fn complete_goal(&self, goal_id: Uuid) -> Result<FinancialGoal, CoreError> {
        self.goal_service
            .complete(self.store.as_ref(), goal_id)
            .await
    }

    /// Mark a goal as failed. Valid only while the goal is in progress.
    pub async fn fail_goal(&self, goal_id: Uuid) -> Result<FinancialGoal, CoreError> {
        self.goal_service.fail(self.store.as_ref(), goal_id).await
    }
}
