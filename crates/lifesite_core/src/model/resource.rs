//! Personal resource pages: victories, failures, standards and line dancing.

use super::{nullable, string_or_number};
use crate::filter::Filterable;
use crate::util::dates::parse_timestamp;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One dated entry in `victories.json` or `failures.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Milestone {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub date: String,
    /// Free-form label such as `Spring 2023`; shown verbatim.
    #[serde(deserialize_with = "nullable")]
    pub date_display: String,
    #[serde(deserialize_with = "nullable")]
    pub description: String,
    #[serde(deserialize_with = "nullable")]
    pub created_date: String,
    #[serde(deserialize_with = "nullable")]
    pub last_edited_date: String,
}

impl Milestone {
    /// `date_display`, falling back to the raw `date`.
    pub fn display_date(&self) -> &str {
        if self.date_display.trim().is_empty() {
            &self.date
        } else {
            &self.date_display
        }
    }
}

impl Filterable for Milestone {
    fn tags(&self) -> Vec<String> {
        Vec::new()
    }

    fn timestamp(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.date)
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.description.as_str(), self.date_display.as_str()]
    }

    fn sort_name(&self) -> &str {
        &self.description
    }
}

/// The single markdown document in `standards.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Standards {
    #[serde(deserialize_with = "nullable")]
    pub title: String,
    #[serde(deserialize_with = "nullable")]
    pub content: String,
    #[serde(deserialize_with = "nullable")]
    pub created_date: String,
    #[serde(deserialize_with = "nullable")]
    pub last_edited_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dance {
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    pub artist: Option<String>,
    pub tutorial_link: Option<String>,
    pub my_video: Option<String>,
    pub notes: Option<String>,
}

impl Dance {
    /// Whether the dance has anything to show beyond its header.
    pub fn has_media(&self) -> bool {
        non_blank(self.tutorial_link.as_deref()).is_some()
            || non_blank(self.my_video.as_deref()).is_some()
    }
}

/// `line_dancing.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineDancing {
    #[serde(deserialize_with = "nullable")]
    pub dances_i_know: Vec<Dance>,
    #[serde(deserialize_with = "nullable")]
    pub dances_to_learn: Vec<Dance>,
}

pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn milestone_ids_accept_numbers() {
        let entry: Milestone = serde_json::from_value(serde_json::json!({
            "id": 4,
            "date": "2023-05-01",
            "date_display": null,
            "description": "Ran a marathon"
        }))
        .unwrap();
        assert_eq!(entry.id, "4");
        assert_eq!(entry.display_date(), "2023-05-01");
    }

    #[test]
    fn line_dancing_tolerates_null_lists() {
        let data: LineDancing = serde_json::from_value(serde_json::json!({
            "dances_i_know": [{"name": "Copperhead Road", "artist": null, "tutorial_link": " "}],
            "dances_to_learn": null
        }))
        .unwrap();
        assert_eq!(data.dances_i_know.len(), 1);
        assert!(!data.dances_i_know[0].has_media());
        assert!(data.dances_to_learn.is_empty());
    }
}
