//! Books and book notes (`books.json`).
//!
//! A book directory groups one main entry (id prefixed `book-`) with any
//! number of note entries.

use super::{nullable, string_or_number};
use serde::{Deserialize, Serialize};

pub const MAIN_BOOK_ID_PREFIX: &str = "book-";
pub const UNKNOWN_BOOK_DIRECTORY: &str = "unknown";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookMetadata {
    pub book_title: Option<String>,
    pub author: Option<String>,
    pub rating: Option<f64>,
    pub status: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub tags: Vec<String>,
    pub book_directory: Option<String>,
    pub has_public_notes: Option<bool>,
    pub notes_count: Option<u32>,
    pub note_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Book {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub title: String,
    #[serde(deserialize_with = "nullable")]
    pub content: String,
    #[serde(deserialize_with = "nullable")]
    pub public: bool,
    #[serde(deserialize_with = "nullable")]
    pub created_date: String,
    #[serde(deserialize_with = "nullable")]
    pub last_edited_date: String,
    #[serde(deserialize_with = "nullable")]
    pub metadata: BookMetadata,
}

impl Book {
    pub fn is_main_entry(&self) -> bool {
        self.id.starts_with(MAIN_BOOK_ID_PREFIX)
    }

    pub fn directory(&self) -> &str {
        self.metadata
            .book_directory
            .as_deref()
            .filter(|dir| !dir.trim().is_empty())
            .unwrap_or(UNKNOWN_BOOK_DIRECTORY)
    }

    /// `metadata.book_title`, falling back to the entry title.
    pub fn display_title(&self) -> &str {
        self.metadata
            .book_title
            .as_deref()
            .filter(|title| !title.trim().is_empty())
            .unwrap_or(&self.title)
    }
}

/// `export_metadata.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportMetadata {
    #[serde(deserialize_with = "nullable")]
    pub last_updated: String,
}
