//! Exported task-manager tasks (`tasks.json`).

use super::{nullable, string_or_number};
use crate::filter::Filterable;
use crate::util::dates::parse_timestamp;
use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

pub const STATUS_COMPLETED: &str = "completed";
pub const STATUS_PENDING: &str = "pending";
pub const STATUS_DELETED: &str = "deleted";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Task {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub uuid: String,
    #[serde(deserialize_with = "nullable")]
    pub description: String,
    #[serde(deserialize_with = "nullable")]
    pub status: String,
    #[serde(deserialize_with = "nullable")]
    pub entry: String,
    #[serde(deserialize_with = "nullable")]
    pub modified: String,
    pub due: Option<String>,
    pub end: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub priority: String,
    #[serde(deserialize_with = "nullable")]
    pub project: String,
    #[serde(deserialize_with = "nullable")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub urgency: f64,
    /// Stored as either a number or a numeric string.
    #[serde(deserialize_with = "lenient_number")]
    pub utility: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub effort: Option<f64>,
    pub next_action: Option<String>,
    pub created_date: Option<String>,
    pub completed_date: Option<String>,
    pub due_date: Option<String>,
    pub lead_time_days: Option<f64>,
}

impl Task {
    pub fn is_completed(&self) -> bool {
        self.status == STATUS_COMPLETED
    }

    pub fn is_pending(&self) -> bool {
        self.status == STATUS_PENDING
    }

    pub fn is_deleted(&self) -> bool {
        self.status == STATUS_DELETED
    }

    /// `completed_date`, falling back to `created_date`.
    pub fn activity_date(&self) -> Option<NaiveDateTime> {
        self.completed_date
            .as_deref()
            .or(self.created_date.as_deref())
            .and_then(parse_timestamp)
    }

    pub fn project_label(&self) -> &str {
        if self.project.trim().is_empty() {
            "No Project"
        } else {
            &self.project
        }
    }
}

impl Filterable for Task {
    fn tags(&self) -> Vec<String> {
        self.tags.clone()
    }

    fn timestamp(&self) -> Option<NaiveDateTime> {
        self.activity_date()
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.description.as_str(), self.project.as_str()]
    }

    fn sort_name(&self) -> &str {
        &self.description
    }

    fn category(&self) -> Option<&str> {
        Some(self.status.as_str())
    }
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<serde_json::Value>::deserialize(deserializer)? {
        Some(serde_json::Value::Number(number)) => number.as_f64(),
        Some(serde_json::Value::String(text)) => text.trim().parse().ok(),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utility_accepts_strings_and_numbers() {
        let task: Task = serde_json::from_value(serde_json::json!({
            "id": 3,
            "description": "write docs",
            "status": "pending",
            "utility": "4.5",
            "effort": 2,
            "tags": null
        }))
        .unwrap();
        assert_eq!(task.utility, Some(4.5));
        assert_eq!(task.effort, Some(2.0));
        assert!(task.tags.is_empty());
        assert_eq!(task.project_label(), "No Project");
    }

    #[test]
    fn activity_date_prefers_completion() {
        let task = Task {
            created_date: Some("2025-01-01T08:00:00".to_string()),
            completed_date: Some("2025-01-05T09:30:00".to_string()),
            ..Task::default()
        };
        assert_eq!(
            task.activity_date().map(|d| d.date().to_string()),
            Some("2025-01-05".to_string())
        );
    }
}
