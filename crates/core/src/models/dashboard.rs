use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::emotion::Emotion;
use super::story::Story;
use super::transaction::TransactionWithCategory;

/// Aggregated view-model behind the dashboard cards,
/// computed fresh on every view load — never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Sum of expense-kind transaction amounts (the savings card)
    pub total_savings: f64,

    /// Number of stories the user has written
    pub total_stories: usize,

    /// Number of goals still in progress
    pub active_goals: usize,

    /// Up to five most recent transactions, newest first, categories joined
    pub recent_transactions: Vec<TransactionWithCategory>,
}

impl DashboardSummary {
    /// The zeroed summary shown when nobody is signed in.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            total_savings: 0.0,
            total_stories: 0,
            active_goals: 0,
            recent_transactions: Vec::new(),
        }
    }
}

/// One point on the emotional-journey timeline.
///
/// Derived, never persisted: a projection of a story's embedded emotion and
/// amount onto its creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionEntry {
    pub date: DateTime<Utc>,
    pub emotion: Option<Emotion>,
    pub amount: f64,
}

impl EmotionEntry {
    /// Project a story onto the timeline.
    #[must_use]
    pub fn from_story(story: &Story) -> Self {
        Self {
            date: story.created_at,
            emotion: story.content.emotion,
            amount: story.content.amount,
        }
    }
}

/// The full dashboard payload: summary cards plus the emotion timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub summary: DashboardSummary,
    /// All the user's stories projected onto the timeline,
    /// `created_at` ascending
    pub emotion_timeline: Vec<EmotionEntry>,
}

impl Dashboard {
    /// Empty dashboard: zeroed summary, no timeline points.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            summary: DashboardSummary::empty(),
            emotion_timeline: Vec::new(),
        }
    }
}
