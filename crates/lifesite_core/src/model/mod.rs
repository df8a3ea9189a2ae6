//! Record shapes for every snapshot domain.
//!
//! # Responsibility
//! - Mirror the JSON snapshots field-for-field with lenient serde defaults.
//! - Expose decoded views of JSON-encoded sub-fields.
//!
//! # Invariants
//! - Records are read-only values; no method mutates a loaded record.
//! - `null` in a string or number field reads as the type's default.

use serde::{Deserialize, Deserializer};

pub mod anki;
pub mod blog;
pub mod book;
pub mod bucket;
pub mod community;
pub mod content;
pub mod dailies;
pub mod event;
pub mod financial;
pub mod github;
pub mod habit;
pub mod idea;
pub mod metric;
pub mod principle;
pub mod project;
pub mod resource;
pub mod task;
pub mod thought;

pub use anki::{AnkiReview, EaseButton};
pub use blog::{BlogMetadata, BlogPost};
pub use book::{Book, BookMetadata, ExportMetadata};
pub use bucket::{bucket_list_from_content, BucketList, BucketListItem};
pub use community::Community;
pub use content::{find_content, ContentEntry};
pub use dailies::DailyCount;
pub use event::Event;
pub use financial::{FinancialEntry, FinancialKind};
pub use github::{GithubActivity, HeatmapValue};
pub use habit::Habit;
pub use idea::Idea;
pub use metric::Metric;
pub use principle::Principle;
pub use project::{Project, ProjectMetadata};
pub use resource::{Dance, LineDancing, Milestone, Standards};
pub use task::Task;
pub use thought::Thought;

/// Reads `null` as `T::default()`.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts ids stored either as strings or as numbers.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(text)) => text,
        Some(serde_json::Value::Number(number)) => number.to_string(),
        Some(serde_json::Value::Bool(flag)) => flag.to_string(),
        _ => String::new(),
    })
}
