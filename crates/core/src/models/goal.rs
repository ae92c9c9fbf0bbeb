use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of a financial goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    /// Still being worked towards
    InProgress,
    /// Target reached
    Completed,
    /// Abandoned or missed
    Failed,
}

impl std::fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GoalStatus::InProgress => write!(f, "in_progress"),
            GoalStatus::Completed => write!(f, "completed"),
            GoalStatus::Failed => write!(f, "failed"),
        }
    }
}

/// A savings goal: a target amount tracked to completion.
///
/// Invariant: `current_amount` never goes below zero. Status only leaves
/// `InProgress` through an explicit complete/fail call — progress updates
/// never flip it on their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialGoal {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub target_amount: f64,
    pub current_amount: f64,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub target_date: Option<NaiveDate>,
    pub status: GoalStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FinancialGoal {
    /// Create a fresh goal: zero progress, `InProgress` status.
    pub fn new(
        user_id: Uuid,
        title: impl Into<String>,
        target_amount: f64,
        start_date: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            title: title.into(),
            description: None,
            target_amount,
            current_amount: 0.0,
            start_date,
            target_date: None,
            status: GoalStatus::InProgress,
            created_at: now,
            updated_at: now,
        }
    }

    /// Progress towards the target as a percentage.
    ///
    /// Returns `None` when `target_amount` is zero or negative (no meaningful
    /// ratio exists); otherwise the raw percentage clamped to `[0, 100]`.
    #[must_use]
    pub fn progress_percent(&self) -> Option<f64> {
        if self.target_amount <= 0.0 {
            return None;
        }
        Some(((self.current_amount / self.target_amount) * 100.0).clamp(0.0, 100.0))
    }

    /// `true` while the goal is still in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == GoalStatus::InProgress
    }
}
