use crate::model::DailyCount;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CumulativePoint {
    pub date: String,
    pub label: String,
    pub count: u32,
    pub cumulative: u64,
}

/// Running totals in date order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CumulativeSeries {
    pub points: Vec<CumulativePoint>,
    pub total: u64,
}

impl CumulativeSeries {
    pub fn first_label(&self) -> Option<&str> {
        self.points.first().map(|point| point.label.as_str())
    }

    pub fn last_label(&self) -> Option<&str> {
        self.points.last().map(|point| point.label.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Sorts by date and accumulates counts. Entries whose date does not parse
/// get no point but still count toward `total`.
pub fn cumulative_series(entries: &[DailyCount]) -> CumulativeSeries {
    let total: u64 = entries.iter().map(|entry| u64::from(entry.count)).sum();
    let mut dated: Vec<_> = entries
        .iter()
        .filter_map(|entry| entry.day().map(|day| (day, entry)))
        .collect();
    dated.sort_by_key(|(day, _)| *day);

    let mut running = 0u64;
    let points = dated
        .into_iter()
        .map(|(_, entry)| {
            running += u64::from(entry.count);
            CumulativePoint {
                date: entry.date.clone(),
                label: entry.label().to_string(),
                count: entry.count,
                cumulative: running,
            }
        })
        .collect();

    CumulativeSeries { points, total }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(date: &str, count: u32) -> DailyCount {
        DailyCount {
            date: date.to_string(),
            count,
            formatted_date: String::new(),
        }
    }

    #[test]
    fn accumulates_in_date_order() {
        let series = cumulative_series(&[
            entry("2025-01-03", 2),
            entry("2025-01-01", 1),
            entry("garbage", 9),
            entry("2025-01-02", 0),
        ]);
        let totals: Vec<u64> = series.points.iter().map(|p| p.cumulative).collect();
        assert_eq!(totals, vec![1, 1, 3]);
        assert_eq!(series.total, 12);
        assert_eq!(series.first_label(), Some("2025-01-01"));
        assert_eq!(series.last_label(), Some("2025-01-03"));
    }

    #[test]
    fn undated_entries_still_count_toward_total() {
        let series = cumulative_series(&[entry("not a date", 4), entry("", 2)]);
        assert!(series.is_empty());
        assert_eq!(series.total, 6);
    }
}
