//! Aggregated GitHub commit activity (`github.json`).

use super::nullable;
use crate::util::dates::parse_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatmapValue {
    /// `YYYY-MM-DD`.
    #[serde(deserialize_with = "nullable")]
    pub date: String,
    #[serde(deserialize_with = "nullable")]
    pub count: u32,
}

impl HeatmapValue {
    pub fn day(&self) -> Option<NaiveDate> {
        parse_date(&self.date)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GithubActivity {
    #[serde(deserialize_with = "nullable")]
    pub heatmap_data: Vec<HeatmapValue>,
    #[serde(deserialize_with = "nullable")]
    pub total_commits: u64,
    #[serde(deserialize_with = "nullable")]
    pub repositories: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub repository_count: usize,
    #[serde(deserialize_with = "nullable")]
    pub last_updated: String,
    /// Set when the last fetch failed; the page shows it inline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GithubActivity {
    /// Activity carrying only a failure message.
    pub fn failed(message: impl Into<String>, last_updated: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            last_updated: last_updated.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_fields_read_as_empty() {
        let activity: GithubActivity = serde_json::from_value(serde_json::json!({
            "heatmap_data": [{"date": "2025-03-01", "count": 4}],
            "total_commits": 4,
            "repositories": null,
            "last_updated": null
        }))
        .unwrap();
        assert_eq!(activity.total_commits, 4);
        assert!(activity.repositories.is_empty());
        assert_eq!(
            activity.heatmap_data[0].day().map(|d| d.to_string()),
            Some("2025-03-01".to_string())
        );
        assert!(activity.error.is_none());
    }
}
