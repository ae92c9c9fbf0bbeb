use serde::{Deserialize, Serialize};

/// How the user felt about a financial event.
///
/// Stored inside a story's content payload. Rows written by older clients may
/// carry values outside the current set; those deserialize to [`Emotion::Other`]
/// so one odd row never breaks a whole query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emotion {
    /// Feeling great about this!
    Excited,
    /// Pretty good about this
    Happy,
    /// Feeling okay
    Neutral,
    /// A bit concerned
    Worried,
    /// Very stressed about this
    Stressed,
    /// Fallback for unrecognized values coming out of the store.
    #[serde(other)]
    Other,
}

impl std::fmt::Display for Emotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Emotion::Excited => write!(f, "excited"),
            Emotion::Happy => write!(f, "happy"),
            Emotion::Neutral => write!(f, "neutral"),
            Emotion::Worried => write!(f, "worried"),
            Emotion::Stressed => write!(f, "stressed"),
            Emotion::Other => write!(f, "other"),
        }
    }
}

/// Display metadata for an emotion: picker icon, accent color, caption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmotionInfo {
    pub icon: &'static str,
    /// Accent color as a hex string (e.g., "#22c55e").
    pub color: &'static str,
    pub caption: &'static str,
}

impl Emotion {
    /// The selectable emotions, in picker order.
    pub const ALL: [Emotion; 5] = [
        Emotion::Excited,
        Emotion::Happy,
        Emotion::Neutral,
        Emotion::Worried,
        Emotion::Stressed,
    ];

    /// Display metadata for this emotion.
    /// `Other` gets a neutral placeholder so rendering never fails.
    #[must_use]
    pub fn info(&self) -> EmotionInfo {
        match self {
            Emotion::Excited => EmotionInfo {
                icon: "🤩",
                color: "#22c55e",
                caption: "Feeling great about this!",
            },
            Emotion::Happy => EmotionInfo {
                icon: "😊",
                color: "#34d399",
                caption: "Pretty good about this",
            },
            Emotion::Neutral => EmotionInfo {
                icon: "😐",
                color: "#facc15",
                caption: "Feeling okay",
            },
            Emotion::Worried => EmotionInfo {
                icon: "😟",
                color: "#fb923c",
                caption: "A bit concerned",
            },
            Emotion::Stressed => EmotionInfo {
                icon: "😰",
                color: "#ef4444",
                caption: "Very stressed about this",
            },
            Emotion::Other => EmotionInfo {
                icon: "❔",
                color: "#9ca3af",
                caption: "Unrecorded feeling",
            },
        }
    }
}
