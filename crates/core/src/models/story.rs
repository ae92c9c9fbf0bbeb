use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::emotion::Emotion;

/// What kind of narrative a story is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoryType {
    GoalAchieved,
    Milestone,
    SavingsStreak,
    Custom,
}

impl std::fmt::Display for StoryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoryType::GoalAchieved => write!(f, "goal_achieved"),
            StoryType::Milestone => write!(f, "milestone"),
            StoryType::SavingsStreak => write!(f, "savings_streak"),
            StoryType::Custom => write!(f, "custom"),
        }
    }
}

/// Who can see a story.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Private,
    Public,
}

/// Money direction of the event a story describes.
/// The story form offers "saving" on top of the transaction kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoryKind {
    Income,
    Expense,
    Saving,
}

/// The denormalized payload embedded in a story row.
///
/// Not a foreign key into transactions — a snapshot of the event as the user
/// told it, emotion included. The emotion is optional and tolerant of
/// unrecognized store values (see [`Emotion`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryContent {
    pub description: String,
    pub amount: f64,
    pub kind: StoryKind,
    /// Day of the underlying event (not the row creation time)
    pub date: NaiveDate,
    #[serde(default)]
    pub emotion: Option<Emotion>,
}

/// A user-authored narrative about a financial event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub content: StoryContent,
    #[serde(rename = "type")]
    pub story_type: StoryType,
    pub visibility: Visibility,
    pub created_at: DateTime<Utc>,
}

impl Story {
    pub fn new(
        user_id: Uuid,
        title: impl Into<String>,
        content: StoryContent,
        story_type: StoryType,
        visibility: Visibility,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            title: title.into(),
            content,
            story_type,
            visibility,
            created_at: Utc::now(),
        }
    }
}
