use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user-defined spending/income category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    #[serde(default)]
    pub emoji: Option<String>,
    /// Accent color as a hex string, if the user picked one.
    #[serde(default)]
    pub color: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Category {
    pub fn new(user_id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            name: name.into(),
            emoji: None,
            color: None,
            created_at: Utc::now(),
        }
    }

    /// Create a category with an emoji attached.
    pub fn with_emoji(user_id: Uuid, name: impl Into<String>, emoji: impl Into<String>) -> Self {
        Self {
            emoji: Some(emoji.into()),
            ..Self::new(user_id, name)
        }
    }
}

/// Starter categories seeded for brand-new users: (name, emoji).
pub const DEFAULT_CATEGORIES: &[(&str, &str)] = &[
    ("Groceries", "🛒"),
    ("Dining Out", "🍜"),
    ("Transport", "🚇"),
    ("Housing", "🏠"),
    ("Entertainment", "🎬"),
    ("Salary", "💼"),
    ("Savings", "🏦"),
];
