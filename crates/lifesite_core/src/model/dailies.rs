//! Dailies timeline points: how many daily notes were written per day.

use super::nullable;
use crate::util::dates::parse_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DailyCount {
    #[serde(deserialize_with = "nullable")]
    pub date: String,
    #[serde(deserialize_with = "nullable")]
    pub count: u32,
    #[serde(deserialize_with = "nullable")]
    pub formatted_date: String,
}

impl DailyCount {
    pub fn day(&self) -> Option<NaiveDate> {
        parse_date(&self.date)
    }

    /// `formatted_date`, or the raw date when the snapshot left it blank.
    pub fn label(&self) -> &str {
        if self.formatted_date.trim().is_empty() {
            &self.date
        } else {
            &self.formatted_date
        }
    }
}
