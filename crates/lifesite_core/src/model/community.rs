//! Communities and personal affiliation ratings.

use super::{nullable, string_or_number};
use crate::util::json_field::parse_json_field;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Community {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub community_name: String,
    #[serde(deserialize_with = "nullable")]
    pub description: String,
    /// 0..=10, `None` when unrated.
    pub personal_affiliation: Option<f64>,
    #[serde(deserialize_with = "nullable")]
    pub created_date: String,
    pub metadata: Option<String>,
    pub related_notes: Option<String>,
    pub blog_posts: Option<String>,
    pub media_links: Option<String>,
    pub website_sections: Option<String>,
    pub projects: Option<String>,
    pub events_attended: Option<String>,
    pub contribution_level: Option<String>,
}

impl Community {
    /// Decoded link lists as `(label, entries)`, skipping empty ones.
    pub fn linked_lists(&self) -> Vec<(&'static str, Vec<String>)> {
        [
            ("Related notes", self.related_notes.as_deref()),
            ("Blog posts", self.blog_posts.as_deref()),
            ("Media", self.media_links.as_deref()),
            ("Website sections", self.website_sections.as_deref()),
            ("Projects", self.projects.as_deref()),
            ("Events attended", self.events_attended.as_deref()),
        ]
        .into_iter()
        .map(|(label, raw)| (label, parse_json_field(raw)))
        .filter(|(_, entries)| !entries.is_empty())
        .collect()
    }

    pub fn affiliation_percent(&self) -> Option<f64> {
        self.personal_affiliation
            .map(|score| (score.clamp(0.0, 10.0) / 10.0) * 100.0)
    }
}

/// Highest affiliation first, unrated last, ties by name.
pub fn sort_communities(communities: &mut [&Community]) {
    communities.sort_by(|a, b| {
        let by_score = match (a.personal_affiliation, b.personal_affiliation) {
            (Some(left), Some(right)) => right.partial_cmp(&left).unwrap_or(Ordering::Equal),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        by_score.then_with(|| a.community_name.cmp(&b.community_name))
    });
}
