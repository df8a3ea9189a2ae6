//! Attended events.

use super::{nullable, string_or_number};
use crate::filter::Filterable;
use crate::util::dates::parse_timestamp;
use crate::util::json_field::parse_json_field;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Event {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub title: String,
    #[serde(deserialize_with = "nullable")]
    pub location: String,
    #[serde(deserialize_with = "nullable")]
    pub start_date: String,
    #[serde(deserialize_with = "nullable")]
    pub end_date: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(deserialize_with = "nullable")]
    pub event_type: String,
    /// JSON-encoded list.
    pub tags: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub is_public: bool,
    #[serde(deserialize_with = "nullable")]
    pub content: String,
    #[serde(deserialize_with = "nullable")]
    pub created_date: String,
    #[serde(deserialize_with = "nullable")]
    pub last_edited_date: String,
    pub metadata: Option<String>,
}

impl Event {
    pub fn tag_list(&self) -> Vec<String> {
        parse_json_field(self.tags.as_deref())
    }
}

impl Filterable for Event {
    fn tags(&self) -> Vec<String> {
        self.tag_list()
    }

    fn timestamp(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.start_date)
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.location.as_str(), self.content.as_str()]
    }

    fn sort_name(&self) -> &str {
        &self.title
    }

    fn category(&self) -> Option<&str> {
        Some(self.event_type.as_str()).filter(|kind| !kind.trim().is_empty())
    }
}
