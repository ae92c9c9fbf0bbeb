use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::goal::{FinancialGoal, GoalStatus};
use crate::store::traits::DataStore;

/// Input for [`GoalService::create`].
#[derive(Debug, Clone, PartialEq)]
pub struct GoalDraft {
    pub title: String,
    pub description: Option<String>,
    pub target_amount: f64,
    pub start_date: NaiveDate,
    pub target_date: Option<NaiveDate>,
}

/// Manages savings goals: creation, progress updates, and the explicit
/// status transitions out of `InProgress`.
///
/// Progress updates never flip the status on their own; completing or
/// failing a goal is always a separate, deliberate call.
pub struct GoalService;

impl GoalService {
    pub fn new() -> Self {
        Self
    }

    /// Create a goal for a user. Returns the generated id.
    pub async fn create(
        &self,
        store: &dyn DataStore,
        user_id: Uuid,
        draft: GoalDraft,
    ) -> Result<Uuid, CoreError> {
        if draft.title.trim().is_empty() {
            return Err(CoreError::ValidationError("Goal title is required".into()));
        }
        if !draft.target_amount.is_finite() || draft.target_amount <= 0.0 {
            return Err(CoreError::ValidationError(
                "Goal target amount must be a positive number".into(),
            ));
        }

        let mut goal =
            FinancialGoal::new(user_id, draft.title, draft.target_amount, draft.start_date);
        goal.description = draft.description;
        goal.target_date = draft.target_date;

        let id = goal.id;
        store.insert_goal(goal).await?;
        Ok(id)
    }

    /// All of a user's goals, newest first.
    pub async fn list(
        &self,
        store: &dyn DataStore,
        user_id: Uuid,
    ) -> Result<Vec<FinancialGoal>, CoreError> {
        store.goals_newest_first(user_id).await
    }

    /// A single goal by id.
    pub async fn get(
        &self,
        store: &dyn DataStore,
        goal_id: Uuid,
    ) -> Result<FinancialGoal, CoreError> {
        store
            .goal(goal_id)
            .await?
            .ok_or_else(|| CoreError::GoalNotFound(goal_id.to_string()))
    }

    /// Add progress to a goal (a negative `delta` takes progress away).
    ///
    /// The stored `current_amount` never goes below zero, and the status is
    /// left untouched even when the target is reached. Returns the updated
    /// goal.
    pub async fn add_progress(
        &self,
        store: &dyn DataStore,
        goal_id: Uuid,
        delta: f64,
    ) -> Result<FinancialGoal, CoreError> {
        if !delta.is_finite() {
            return Err(CoreError::ValidationError(
                "Progress amount must be a finite number".into(),
            ));
        }

        let mut goal = self.get(store, goal_id).await?;
        let next = goal.current_amount + delta;
        if next < 0.0 {
            return Err(CoreError::ValidationError(format!(
                "Progress update would take '{}' below zero ({next:.2})",
                goal.title
            )));
        }

        goal.current_amount = next;
        goal.updated_at = Utc::now();
        store.update_goal(goal.clone()).await?;
        Ok(goal)
    }

    /// Mark a goal as completed. Valid only from `InProgress`.
    pub async fn complete(
        &self,
        store: &dyn DataStore,
        goal_id: Uuid,
    ) -> Result<FinancialGoal, CoreError> {
        self.transition(store, goal_id, GoalStatus::Completed).await
    }

    /// Mark a goal as failed. Valid only from `InProgress`.
    pub async fn fail(
        &self,
        store: &dyn DataStore,
        goal_id: Uuid,
    ) -> Result<FinancialGoal, CoreError> {
        self.transition(store, goal_id, GoalStatus::Failed).await
    }

    async fn transition(
        &self,
        store: &dyn DataStore,
        goal_id: Uuid,
        to: GoalStatus,
    ) -> Result<FinancialGoal, CoreError> {
        let mut goal = self.get(store, goal_id).await?;
        if goal.status != GoalStatus::InProgress {
            return Err(CoreError::ValidationError(format!(
                "Goal '{}' is already {} and cannot become {to}",
                goal.title, goal.status
            )));
        }

        goal.status = to;
        goal.updated_at = Utc::now();
        store.update_goal(goal.clone()).await?;
        Ok(goal)
    }
}

impl Default for GoalService {
    fn default() -> Self {
        Self::new()
    }
}
