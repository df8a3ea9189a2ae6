//! Orderings and grouping helpers.

use super::query::Filterable;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Newest first. Undated records go last; ties break on `sort_name` ascending.
pub fn sort_by_timestamp_desc<T: Filterable>(records: &mut [&T]) {
    records.sort_by(|a, b| match (a.timestamp(), b.timestamp()) {
        (Some(left), Some(right)) => right
            .cmp(&left)
            .then_with(|| a.sort_name().cmp(b.sort_name())),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.sort_name().cmp(b.sort_name()),
    });
}

/// Oldest first. Undated records go last; ties break on `sort_name`.
pub fn sort_by_timestamp_asc<T: Filterable>(records: &mut [&T]) {
    records.sort_by(|a, b| match (a.timestamp(), b.timestamp()) {
        (Some(left), Some(right)) => left
            .cmp(&right)
            .then_with(|| a.sort_name().cmp(b.sort_name())),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.sort_name().cmp(b.sort_name()),
    });
}

/// Tag frequency, most used first, then alphabetical.
pub fn tag_counts<'a, T, I>(records: I) -> Vec<(String, usize)>
where
    T: Filterable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for record in records {
        for tag in record.tags() {
            let normalized = tag.trim().to_lowercase();
            if !normalized.is_empty() {
                *counts.entry(normalized).or_insert(0) += 1;
            }
        }
    }
    let mut ordered: Vec<(String, usize)> = counts.into_iter().collect();
    ordered.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ordered
}

/// Groups records by a derived key, keeping input order inside each group.
pub fn group_by<'a, T, K, F>(
    records: impl IntoIterator<Item = &'a T>,
    key: F,
) -> BTreeMap<K, Vec<&'a T>>
where
    T: 'a,
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut groups: BTreeMap<K, Vec<&'a T>> = BTreeMap::new();
    for record in records {
        groups.entry(key(record)).or_default().push(record);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    struct Entry {
        name: &'static str,
        at: Option<NaiveDateTime>,
        tags: Vec<String>,
    }

    impl Filterable for Entry {
        fn tags(&self) -> Vec<String> {
            self.tags.clone()
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

    fn at(d: u32) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(2025, 5, d).and_then(|date| date.and_hms_opt(8, 0, 0))
    }

    fn entry(name: &'static str, at: Option<NaiveDateTime>) -> Entry {
        Entry {
            name,
            at,
            tags: vec![],
        }
    }

    #[test]
    fn desc_breaks_ties_by_name_and_sinks_undated() {
        let entries = vec![
            entry("b", at(2)),
            entry("z", None),
            entry("a", at(2)),
            entry("c", at(9)),
        ];
        let mut refs: Vec<&Entry> = entries.iter().collect();
        sort_by_timestamp_desc(&mut refs);
        let names: Vec<_> = refs.iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["c", "a", "b", "z"]);
    }

    #[test]
    fn asc_keeps_undated_last() {
        let entries = vec![
            entry("late", at(9)),
            entry("undated", None),
            entry("early", at(1)),
        ];
        let mut refs: Vec<&Entry> = entries.iter().collect();
        sort_by_timestamp_asc(&mut refs);
        let names: Vec<_> = refs.iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["early", "late", "undated"]);
    }

    #[test]
    fn group_by_keeps_input_order_within_groups() {
        let entries = vec![entry("b1", None), entry("a1", None), entry("b2", None)];
        let groups = group_by(&entries, |e| e.name.chars().next());
        let b: Vec<_> = groups[&Some('b')].iter().map(|e| e.name).collect();
        assert_eq!(b, vec!["b1", "b2"]);
    }

    #[test]
    fn tag_counts_order_by_frequency_then_name() {
        let entries = vec![
            Entry {
                tags: vec!["Rust".into(), "cli".into()],
                ..entry("1", None)
            },
            Entry {
                tags: vec!["rust".into(), "web".into()],
                ..entry("2", None)
            },
        ];
        let counts = tag_counts(&entries);
        assert_eq!(
            counts,
            vec![
                ("rust".to_string(), 2),
                ("cli".to_string(), 1),
                ("web".to_string(), 1)
            ]
        );
    }
}
