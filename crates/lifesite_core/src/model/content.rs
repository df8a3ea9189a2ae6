//! Free-form content pages (`content.json`).

use super::{nullable, string_or_number};
use serde::{Deserialize, Serialize};

/// Id of the content entry holding the bucket list markdown.
pub const BUCKET_LIST_CONTENT_ID: &str = "bucket-list";
/// Entries shown on the home page, in order.
pub const HOME_CONTENT_ID: &str = "home-page";
pub const ABOUT_CONTENT_ID: &str = "about-this-site";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentEntry {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub title: String,
    #[serde(rename = "type", deserialize_with = "nullable")]
    pub kind: String,
    #[serde(deserialize_with = "nullable")]
    pub content: String,
}

/// First entry with `id`.
pub fn find_content<'a>(entries: &'a [ContentEntry], id: &str) -> Option<&'a ContentEntry> {
    entries.iter().find(|entry| entry.id == id)
}
