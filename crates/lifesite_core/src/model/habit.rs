//! Daily habit check-ins.

use super::{nullable, string_or_number};
use crate::util::dates::parse_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Habit {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    /// `YYYY-MM-DD`.
    #[serde(deserialize_with = "nullable")]
    pub date: String,
    #[serde(deserialize_with = "nullable")]
    pub habit_name: String,
    #[serde(deserialize_with = "nullable")]
    pub completed: bool,
    /// Minutes spent, when tracked.
    pub duration: Option<f64>,
    #[serde(deserialize_with = "nullable")]
    pub notes: String,
}

impl Habit {
    pub fn day(&self) -> Option<NaiveDate> {
        parse_date(&self.date)
    }
}
