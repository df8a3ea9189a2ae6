//! Bucket list items, parsed out of the `bucket-list` content page.
//!
//! The page is markdown: an intro, a `## Bucket List` heading, then items
//! separated by `---`. Each item has a `**description**` line followed by
//! `key: value` lines (`status`, `motivation`, `type`, `completed`,
//! `completed_on`, `media`).

use super::content::{find_content, ContentEntry, BUCKET_LIST_CONTENT_ID};
use crate::filter::Filterable;
use crate::util::dates::parse_timestamp;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

const ITEMS_HEADING: &str = "## Bucket List";
const TITLE_HEADING: &str = "# Bucket List";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BucketListItem {
    pub description: String,
    pub status: String,
    pub motivation: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// `"yes"` when done.
    pub completed: String,
    pub completed_on: String,
    pub media: Vec<String>,
}

impl BucketListItem {
    pub fn is_completed(&self) -> bool {
        self.completed.trim().eq_ignore_ascii_case("yes")
    }

    /// Rank used after completed items: lower shows first.
    fn status_rank(&self) -> u8 {
        match self.status.trim().to_lowercase().as_str() {
            "in progress" => 1,
            "planned" => 2,
            "not yet" => 3,
            "don't want it anymore" => 4,
            _ => 5,
        }
    }
}

impl Filterable for BucketListItem {
    fn tags(&self) -> Vec<String> {
        let mut tags = Vec::new();
        if !self.kind.trim().is_empty() {
            tags.push(self.kind.clone());
        }
        if !self.status.trim().is_empty() {
            tags.push(self.status.clone());
        }
        tags
    }

    fn timestamp(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.completed_on)
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.description.as_str(), self.motivation.as_str()]
    }

    fn sort_name(&self) -> &str {
        &self.description
    }
}

/// Intro text and items of the bucket list page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BucketList {
    pub intro: String,
    pub items: Vec<BucketListItem>,
}

/// Finds the bucket list entry in `content.json` and parses it.
///
/// Missing entry or missing items heading yields an empty list.
pub fn bucket_list_from_content(entries: &[ContentEntry]) -> BucketList {
    let Some(entry) = find_content(entries, BUCKET_LIST_CONTENT_ID) else {
        return BucketList::default();
    };
    let Some((head, body)) = entry.content.split_once(ITEMS_HEADING) else {
        return BucketList::default();
    };
    let mut items = parse_bucket_items(body.trim());
    sort_bucket_items(&mut items);
    BucketList {
        intro: head.replace(TITLE_HEADING, "").trim().to_string(),
        items,
    }
}

/// Parses `---`-separated item sections. Sections without a bold
/// description line are skipped.
pub fn parse_bucket_items(body: &str) -> Vec<BucketListItem> {
    body.split("---")
        .map(str::trim)
        .filter(|section| !section.is_empty())
        .filter_map(parse_section)
        .collect()
}

fn parse_section(section: &str) -> Option<BucketListItem> {
    let lines: Vec<&str> = section.lines().map(str::trim).collect();
    let description = lines
        .iter()
        .find(|line| line.len() > 4 && line.starts_with("**") && line.ends_with("**"))
        .map(|line| line.replace("**", ""))?;

    let mut item = BucketListItem {
        description,
        ..BucketListItem::default()
    };

    for line in &lines {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim();
        if key.trim().is_empty() || value.is_empty() {
            continue;
        }
        let key = key.trim().to_lowercase().replace(' ', "_");
        let unquoted = value.replace('"', "");
        match key.as_str() {
            "status" => item.status = unquoted,
            "motivation" => item.motivation = unquoted,
            "type" => item.kind = unquoted,
            "completed" => item.completed = unquoted,
            "completed_on" => item.completed_on = unquoted,
            "media" => item.media = parse_media(value),
            _ => {}
        }
    }
    Some(item)
}

/// `media: ['a', 'b']` uses single quotes in the source notes.
fn parse_media(value: &str) -> Vec<String> {
    serde_json::from_str::<Vec<String>>(&value.replace('\'', "\"")).unwrap_or_default()
}

/// Completed first (latest completion first), then by status rank.
pub fn sort_bucket_items(items: &mut [BucketListItem]) {
    items.sort_by(|a, b| match (a.is_completed(), b.is_completed()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (true, true) => {
            let left = parse_timestamp(&a.completed_on);
            let right = parse_timestamp(&b.completed_on);
            right.cmp(&left)
        }
        (false, false) => a.status_rank().cmp(&b.status_rank()),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = "# Bucket List\nThings I want to do.\n## Bucket List\n\
**Run a marathon**\nstatus: completed\ntype: achievement\ncompleted: yes\ncompleted_on: 2024-10-01\n\
---\n**See the aurora**\nstatus: planned\ntype: experience\nmotivation: \"Because it glows\"\nmedia: ['https://example.com/a']\n\
---\n**Learn the cello**\nstatus: in progress\ntype: experience\n\
---\nno description here\nstatus: planned\n";

    fn page() -> Vec<ContentEntry> {
        vec![ContentEntry {
            id: BUCKET_LIST_CONTENT_ID.to_string(),
            title: "Bucket List".to_string(),
            kind: "page".to_string(),
            content: PAGE.to_string(),
        }]
    }

    #[test]
    fn parses_intro_and_items() {
        let list = bucket_list_from_content(&page());
        assert_eq!(list.intro, "Things I want to do.");
        assert_eq!(list.items.len(), 3);
        let aurora = list.items.iter().find(|i| i.description == "See the aurora").unwrap();
        assert_eq!(aurora.motivation, "Because it glows");
        assert_eq!(aurora.media, vec!["https://example.com/a"]);
    }

    #[test]
    fn completed_first_then_status_order() {
        let list = bucket_list_from_content(&page());
        let order: Vec<_> = list.items.iter().map(|i| i.description.as_str()).collect();
        assert_eq!(order, vec!["Run a marathon", "Learn the cello", "See the aurora"]);
    }

    #[test]
    fn missing_entry_is_empty() {
        assert_eq!(bucket_list_from_content(&[]), BucketList::default());
    }
}
