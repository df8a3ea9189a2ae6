//! Spaced-repetition review log (`anki.json`).

use super::{nullable, string_or_number};
use crate::util::dates::parse_timestamp;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Answer button pressed for a review, `1..=4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EaseButton {
    Again,
    Hard,
    Good,
    Easy,
}

impl EaseButton {
    pub const ALL: [EaseButton; 4] = [Self::Again, Self::Hard, Self::Good, Self::Easy];

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Self::Again),
            2 => Some(Self::Hard),
            3 => Some(Self::Good),
            4 => Some(Self::Easy),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Again => "Again",
            Self::Hard => "Hard",
            Self::Good => "Good",
            Self::Easy => "Easy",
        }
    }

    /// Anything but `Again` counts as recalled.
    pub fn is_success(self) -> bool {
        self != Self::Again
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnkiReview {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(deserialize_with = "string_or_number")]
    pub card_id: String,
    #[serde(deserialize_with = "nullable")]
    pub deck_name: String,
    #[serde(deserialize_with = "nullable")]
    pub note_content: String,
    #[serde(deserialize_with = "nullable")]
    pub review_date: String,
    pub ease_button: Option<i64>,
    pub interval_days: Option<f64>,
    pub previous_interval_days: Option<f64>,
    pub ease_factor: Option<f64>,
    pub time_spent_ms: Option<f64>,
    pub review_type: Option<i64>,
    #[serde(deserialize_with = "nullable")]
    pub created_date: String,
    pub metadata: Option<String>,
}

impl AnkiReview {
    pub fn ease(&self) -> Option<EaseButton> {
        self.ease_button.and_then(EaseButton::from_code)
    }

    pub fn reviewed_at(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.review_date)
    }
}
