//! Active projects.

use super::{nullable, string_or_number};
use crate::filter::Filterable;
use crate::util::dates::parse_timestamp;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectMetadata {
    #[serde(deserialize_with = "nullable")]
    pub file_path: String,
    #[serde(deserialize_with = "nullable")]
    pub folder_name: String,
    #[serde(deserialize_with = "nullable")]
    pub file_name: String,
    #[serde(deserialize_with = "nullable")]
    pub aliases: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub title: String,
    #[serde(deserialize_with = "nullable")]
    pub description: String,
    #[serde(deserialize_with = "nullable")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub content: String,
    #[serde(deserialize_with = "nullable")]
    pub public: bool,
    #[serde(deserialize_with = "nullable")]
    pub created_date: String,
    #[serde(deserialize_with = "nullable")]
    pub last_edited_date: String,
    #[serde(deserialize_with = "nullable")]
    pub metadata: ProjectMetadata,
}

impl Filterable for Project {
    fn tags(&self) -> Vec<String> {
        self.tags.clone()
    }

    fn timestamp(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.last_edited_date)
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str(), self.content.as_str()]
    }

    fn sort_name(&self) -> &str {
        &self.title
    }
}
