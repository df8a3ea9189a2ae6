//! Principles: a self-referencing outline.

use super::{nullable, string_or_number};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Principle {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub title: String,
    #[serde(deserialize_with = "nullable")]
    pub content: String,
    #[serde(deserialize_with = "nullable")]
    pub level: u32,
    /// Blank or missing means top-level.
    #[serde(deserialize_with = "optional_id")]
    pub parent_id: Option<String>,
}

impl Principle {
    pub fn parent(&self) -> Option<&str> {
        self.parent_id.as_deref().filter(|id| !id.trim().is_empty())
    }
}

fn optional_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let id = super::string_or_number(deserializer)?;
    Ok(Some(id).filter(|id| !id.trim().is_empty()))
}
