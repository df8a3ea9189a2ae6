//! Blog posts (`blog.json`).

use super::{nullable, string_or_number};
use crate::filter::Filterable;
use crate::util::dates::parse_timestamp;
use crate::util::json_field::parse_json_object;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogPost {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub title: String,
    #[serde(deserialize_with = "nullable")]
    pub content: String,
    #[serde(rename = "type", deserialize_with = "nullable")]
    pub kind: String,
    #[serde(deserialize_with = "nullable")]
    pub created_date: String,
    #[serde(deserialize_with = "nullable")]
    pub last_edited_date: String,
    /// JSON-encoded [`BlogMetadata`].
    pub metadata: Option<String>,
}

/// Decoded post metadata. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogMetadata {
    pub status: Option<String>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub excerpt: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub tags: Vec<String>,
}

impl BlogPost {
    pub fn metadata(&self) -> BlogMetadata {
        parse_json_object(self.metadata.as_deref())
    }

    pub fn is_draft(&self) -> bool {
        self.metadata()
            .status
            .is_some_and(|status| status.trim().eq_ignore_ascii_case("draft"))
    }

    pub fn seo_title(&self) -> String {
        self.metadata()
            .seo_title
            .filter(|title| !title.trim().is_empty())
            .unwrap_or_else(|| self.title.clone())
    }

    /// SEO description, then excerpt, then the first 150 characters.
    pub fn seo_description(&self) -> String {
        let metadata = self.metadata();
        metadata
            .seo_description
            .or(metadata.excerpt)
            .filter(|text| !text.trim().is_empty())
            .unwrap_or_else(|| self.content.chars().take(150).collect())
    }
}

impl Filterable for BlogPost {
    fn tags(&self) -> Vec<String> {
        self.metadata().tags
    }

    fn timestamp(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.last_edited_date).or_else(|| parse_timestamp(&self.created_date))
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.content.as_str()]
    }

    fn sort_name(&self) -> &str {
        &self.title
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_metadata_means_published() {
        let post = BlogPost {
            title: "Hello".to_string(),
            content: "body".to_string(),
            metadata: Some("{oops".to_string()),
            ..BlogPost::default()
        };
        assert!(!post.is_draft());
        assert_eq!(post.seo_title(), "Hello");
        assert_eq!(post.seo_description(), "body");
    }

    #[test]
    fn seo_fields_prefer_metadata() {
        let post = BlogPost {
            title: "Hello".to_string(),
            metadata: Some(r#"{"status":"Draft","seo_title":"Hi","excerpt":"short"}"#.to_string()),
            ..BlogPost::default()
        };
        assert!(post.is_draft());
        assert_eq!(post.seo_title(), "Hi");
        assert_eq!(post.seo_description(), "short");
    }
}
