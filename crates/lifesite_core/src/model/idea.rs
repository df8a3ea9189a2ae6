//! Project ideas.

use super::{nullable, string_or_number};
use crate::filter::Filterable;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Idea {
    /// Integer in the snapshot.
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub title: String,
    #[serde(deserialize_with = "nullable")]
    pub description: String,
}

impl Filterable for Idea {
    fn tags(&self) -> Vec<String> {
        Vec::new()
    }

    fn timestamp(&self) -> Option<NaiveDateTime> {
        None
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str()]
    }

    fn sort_name(&self) -> &str {
        &self.title
    }
}
