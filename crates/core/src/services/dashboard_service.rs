use futures::try_join;
use log::debug;
use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::dashboard::{Dashboard, DashboardSummary, EmotionEntry};
use crate::models::goal::GoalStatus;
use crate::models::transaction::TransactionKind;
use crate::store::traits::{DataStore, TransactionFilter};

/// Number of transactions shown in the recent-activity panel.
pub const RECENT_TRANSACTION_LIMIT: usize = 5;

/// Builds the dashboard view-model for one user from five independent reads.
///
/// Pure fan-out/fan-in over the store: no caching, no mutation, no retry.
/// Either every read succeeds and a full summary comes back, or the first
/// failure aborts the whole computation — a partial summary is never
/// produced.
pub struct DashboardService;

impl DashboardService {
    pub fn new() -> Self {
        Self
    }

    /// Compute the dashboard for `user_id`.
    ///
    /// With nobody signed in there is nothing to ask the store: the result
    /// is an empty summary and an empty timeline, with zero store calls.
    pub async fn compute(
        &self,
        store: &dyn DataStore,
        user_id: Option<Uuid>,
    ) -> Result<Dashboard, CoreError> {
        let user_id = match user_id {
            Some(id) => id,
            None => return Ok(Dashboard::empty()),
        };

        // The five reads target disjoint queries with no ordering dependency,
        // so they run concurrently and join before the summary is folded.
        let (savings_rows, total_stories, active_goals, recent_transactions, stories) = try_join!(
            store.transactions(user_id, TransactionFilter::with_kind(TransactionKind::Expense)),
            store.count_stories(user_id),
            store.count_goals_with_status(user_id, GoalStatus::InProgress),
            store.recent_transactions(user_id, RECENT_TRANSACTION_LIMIT),
            store.stories_by_creation(user_id),
        )?;

        // The savings card sums expense-kind entries; an empty set sums to 0.
        let total_savings: f64 = savings_rows.iter().map(|tx| tx.amount).sum();

        // One timeline point per story, creation order preserved.
        let emotion_timeline: Vec<EmotionEntry> =
            stories.iter().map(EmotionEntry::from_story).collect();

        debug!(
            "dashboard for {user_id}: {total_stories} stories, {active_goals} active goals, {} timeline points",
            emotion_timeline.len()
        );

        Ok(Dashboard {
            summary: DashboardSummary {
                total_savings,
                total_stories,
                active_goals,
                recent_transactions,
            },
            emotion_timeline,
        })
    }
}

impl Default for DashboardService {
    fn default() -> Self {
        Self::new()
    }
}
