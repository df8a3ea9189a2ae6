//! Captured thoughts.

use super::{nullable, string_or_number};
use crate::filter::Filterable;
use crate::util::dates::parse_timestamp;
use crate::util::json_field::{parse_json_field, parse_json_object};
use crate::util::text::location_string;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Tag that marks a capture for publication; never shown as a chip.
pub const PUBLIC_TAG: &str = "public";

/// One raw capture. `modalities`, `sources`, `tags` and `metadata` are
/// JSON-encoded strings in the snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thought {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub capture_id: String,
    #[serde(deserialize_with = "nullable")]
    pub timestamp: String,
    #[serde(deserialize_with = "nullable")]
    pub content: String,
    pub modalities: Option<String>,
    pub context: Option<String>,
    pub sources: Option<String>,
    pub tags: Option<String>,
    pub location_latitude: Option<f64>,
    pub location_longitude: Option<f64>,
    pub location_city: Option<String>,
    pub location_country: Option<String>,
    pub location_timezone: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub processing_status: String,
    #[serde(deserialize_with = "nullable")]
    pub created_date: String,
    #[serde(deserialize_with = "nullable")]
    pub last_edited_date: String,
    pub metadata: Option<String>,
}

impl Thought {
    pub fn tag_list(&self) -> Vec<String> {
        parse_json_field(self.tags.as_deref())
    }

    /// Tags shown on the card: everything except the publication marker.
    pub fn visible_tags(&self) -> Vec<String> {
        self.tag_list()
            .into_iter()
            .filter(|tag| !tag.eq_ignore_ascii_case(PUBLIC_TAG))
            .collect()
    }

    pub fn source_list(&self) -> Vec<String> {
        parse_json_field(self.sources.as_deref())
    }

    pub fn modality_list(&self) -> Vec<String> {
        parse_json_field(self.modalities.as_deref())
    }

    pub fn metadata_map(&self) -> BTreeMap<String, serde_json::Value> {
        parse_json_object(self.metadata.as_deref())
    }

    pub fn location(&self) -> Option<String> {
        location_string(
            self.location_city.as_deref(),
            self.location_country.as_deref(),
            self.location_latitude,
            self.location_longitude,
        )
    }

    /// Key used for element ids and detail slugs; falls back to `id`.
    pub fn anchor_key(&self) -> &str {
        if self.capture_id.trim().is_empty() {
            &self.id
        } else {
            &self.capture_id
        }
    }
}

impl Filterable for Thought {
    fn tags(&self) -> Vec<String> {
        self.tag_list()
    }

    fn timestamp(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.timestamp)
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.content.as_str()];
        if let Some(context) = self.context.as_deref() {
            fields.push(context);
        }
        fields
    }

    fn sort_name(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_encoded_fields_defensively() {
        let thought: Thought = serde_json::from_value(serde_json::json!({
            "id": 7,
            "capture_id": "cap-7",
            "timestamp": "2025-08-03T10:00:00",
            "content": "hello",
            "tags": "[\"public\",\"Rust\"]",
            "sources": "not json",
            "modalities": null,
            "processing_status": null
        }))
        .unwrap();

        assert_eq!(thought.id, "7");
        assert_eq!(thought.tag_list(), vec!["public", "Rust"]);
        assert_eq!(thought.visible_tags(), vec!["Rust"]);
        assert!(thought.source_list().is_empty());
        assert!(thought.modality_list().is_empty());
        assert_eq!(thought.processing_status, "");
    }

    #[test]
    fn anchor_key_falls_back_to_id() {
        let thought = Thought {
            id: "12".to_string(),
            ..Thought::default()
        };
        assert_eq!(thought.anchor_key(), "12");
    }
}
