//! Filter predicates over domain records.

use crate::util::dates::end_of_day;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::collections::BTreeSet;

/// Accessors the filter engine needs from a record.
pub trait Filterable {
    /// Tags as stored on the record. Case is normalized by the filter.
    fn tags(&self) -> Vec<String>;
    /// Instant used for date windows and chronological ordering.
    fn timestamp(&self) -> Option<NaiveDateTime>;
    /// Text fields searched by the free-text query.
    fn search_fields(&self) -> Vec<&str>;
    /// Secondary ordering key.
    fn sort_name(&self) -> &str;
    /// Single-valued facet such as an event type.
    fn category(&self) -> Option<&str> {
        None
    }
}

/// Inclusive date window. Either bound may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn is_active(&self) -> bool {
        self.start.is_some() || self.end.is_some()
    }

    /// Whether `instant` falls inside the window. The end bound covers the
    /// whole end day.
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        if let Some(start) = self.start {
            if instant < start.and_time(NaiveTime::MIN) {
                return false;
            }
        }
        if let Some(end) = self.end {
            if instant > end_of_day(end) {
                return false;
            }
        }
        true
    }
}

/// Active predicates for one renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    /// Lowercased, trimmed selected tags.
    tags: BTreeSet<String>,
    pub date_range: DateRange,
    /// Free-text query; blank means inactive.
    pub query: String,
    /// Category facet; `None` or `"all"` means inactive.
    pub category: Option<String>,
}

impl RecordFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tag(mut self, tag: &str) -> Self {
        self.select_tag(tag);
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for tag in tags {
            self.select_tag(tag.as_ref());
        }
        self
    }

    pub fn with_date_range(mut self, range: DateRange) -> Self {
        self.date_range = range;
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Adds a tag to the selection. Blank tags are ignored.
    pub fn select_tag(&mut self, tag: &str) {
        if let Some(normalized) = normalize_tag(tag) {
            self.tags.insert(normalized);
        }
    }

    /// Flips a tag in or out of the selection, like a tag button.
    pub fn toggle_tag(&mut self, tag: &str) {
        if let Some(normalized) = normalize_tag(tag) {
            if !self.tags.remove(&normalized) {
                self.tags.insert(normalized);
            }
        }
    }

    pub fn is_tag_selected(&self, tag: &str) -> bool {
        normalize_tag(tag).is_some_and(|normalized| self.tags.contains(&normalized))
    }

    fn active_query(&self) -> Option<String> {
        let trimmed = self.query.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
    }

    fn active_category(&self) -> Option<&str> {
        self.category
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty() && !value.eq_ignore_ascii_case("all"))
    }

    /// True when no predicate is active.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
            && !self.date_range.is_active()
            && self.active_query().is_none()
            && self.active_category().is_none()
    }

    /// Whether one record passes every active predicate.
    pub fn matches<T: Filterable>(&self, record: &T) -> bool {
        self.matches_with_query(record, self.active_query().as_deref())
    }

    fn matches_with_query<T: Filterable>(&self, record: &T, query: Option<&str>) -> bool {
        if !self.tags.is_empty() {
            let any_selected = record
                .tags()
                .iter()
                .filter_map(|tag| normalize_tag(tag))
                .any(|tag| self.tags.contains(&tag));
            if !any_selected {
                return false;
            }
        }

        if self.date_range.is_active() {
            match record.timestamp() {
                Some(instant) if self.date_range.contains(instant) => {}
                _ => return false,
            }
        }

        if let Some(query) = query {
            let found = record
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(query));
            if !found {
                return false;
            }
        }

        if let Some(category) = self.active_category() {
            let same = record
                .category()
                .is_some_and(|value| value.trim().eq_ignore_ascii_case(category));
            if !same {
                return false;
            }
        }

        true
    }

    /// Returns the matching records in input order.
    pub fn apply<'a, T: Filterable>(&self, records: &'a [T]) -> Vec<&'a T> {
        if self.is_empty() {
            return records.iter().collect();
        }
        let query = self.active_query();
        records
            .iter()
            .filter(|record| self.matches_with_query(*record, query.as_deref()))
            .collect()
    }
}

fn normalize_tag(tag: &str) -> Option<String> {
    let trimmed = tag.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Note {
        name: &'static str,
        tags: &'static [&'static str],
        at: Option<NaiveDateTime>,
    }

    impl Filterable for Note {
        fn tags(&self) -> Vec<String> {
            self.tags.iter().map(|tag| tag.to_string()).collect()
        }
        fn timestamp(&self) -> Option<NaiveDateTime> {
            self.at
        }
        fn search_fields(&self) -> Vec<&str> {
            vec![self.name]
        }
        fn sort_name(&self) -> &str {
            self.name
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn toggle_tag_adds_then_removes() {
        let mut filter = RecordFilter::new();
        filter.toggle_tag(" Rust ");
        assert!(filter.is_tag_selected("rust"));
        filter.toggle_tag("RUST");
        assert!(filter.is_empty());
    }

    #[test]
    fn blank_query_and_all_category_are_inactive() {
        let filter = RecordFilter::new().with_query("   ").with_category("All");
        assert!(filter.is_empty());
    }

    #[test]
    fn date_range_end_covers_whole_day() {
        let range = DateRange::new(Some(day(2025, 1, 1)), Some(day(2025, 1, 31)));
        assert!(range.contains(day(2025, 1, 31).and_hms_opt(23, 59, 59).unwrap()));
        assert!(range.contains(day(2025, 1, 1).and_hms_opt(0, 0, 0).unwrap()));
        assert!(!range.contains(day(2025, 2, 1).and_hms_opt(0, 0, 0).unwrap()));
        assert!(!range.contains(day(2024, 12, 31).and_hms_opt(23, 59, 59).unwrap()));
    }

    #[test]
    fn undated_records_fail_active_date_window() {
        let notes = [
            Note {
                name: "dated",
                tags: &[],
                at: day(2025, 3, 3).and_hms_opt(9, 0, 0),
            },
            Note {
                name: "undated",
                tags: &[],
                at: None,
            },
        ];
        let since = DateRange::new(Some(day(2025, 3, 1)), None);
        let filter = RecordFilter::new().with_date_range(since);
        let names: Vec<_> = filter.apply(&notes).iter().map(|n| n.name).collect();
        assert_eq!(names, vec!["dated"]);
    }
}
