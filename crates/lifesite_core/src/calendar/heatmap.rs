use crate::render::html::escape_html;
use chrono::{Datelike, Duration, NaiveDate};
use std::fmt::Write;

pub const WEEKS: usize = 52;
pub const DAYS_PER_WEEK: usize = 7;

/// Color step of one heatmap cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Intensity {
    Empty,
    Low,
    Medium,
    High,
    Max,
}

impl Intensity {
    /// 0 → empty, 1–2 → low, 3–5 → medium, 6–8 → high, 9+ → max.
    pub fn from_count(count: u32) -> Self {
        match count {
            0 => Self::Empty,
            1..=2 => Self::Low,
            3..=5 => Self::Medium,
            6..=8 => Self::High,
            _ => Self::Max,
        }
    }

    pub fn level(self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
            Self::Max => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeatmapCell {
    pub date: NaiveDate,
    pub count: u32,
    /// After `today`; rendered as not-yet.
    pub future: bool,
}

impl HeatmapCell {
    pub fn intensity(&self) -> Intensity {
        Intensity::from_count(self.count)
    }

    pub fn css_class(&self) -> String {
        if self.future {
            "heat-future".to_string()
        } else {
            format!("heat-{}", self.intensity().level())
        }
    }
}

/// Aggregates over in-window cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatmapSummary {
    pub total: u64,
    pub active_days: usize,
    /// `total / active_days`, 0 with no active day.
    pub average: f64,
    /// Inputs that fell outside the window.
    pub dropped: usize,
}

/// 52 Sunday-started weeks; the last column contains `today`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeatmapGrid {
    start: NaiveDate,
    today: NaiveDate,
    weeks: Vec<[HeatmapCell; DAYS_PER_WEEK]>,
    dropped: usize,
}

impl HeatmapGrid {
    pub fn new(today: NaiveDate) -> Self {
        let offset = today.weekday().num_days_from_sunday() as i64;
        let start = today - Duration::days(offset + ((WEEKS as i64 - 1) * DAYS_PER_WEEK as i64));

        let weeks = (0..WEEKS)
            .map(|week| {
                std::array::from_fn(|day| {
                    let date = start + Duration::days((week * DAYS_PER_WEEK + day) as i64);
                    HeatmapCell {
                        date,
                        count: 0,
                        future: date > today,
                    }
                })
            })
            .collect();

        Self {
            start,
            today,
            weeks,
            dropped: 0,
        }
    }

    /// Builds a grid and adds every `(date, count)` pair.
    pub fn from_counts<I>(today: NaiveDate, counts: I) -> Self
    where
        I: IntoIterator<Item = (NaiveDate, u32)>,
    {
        let mut grid = Self::new(today);
        for (date, count) in counts {
            grid.add(date, count);
        }
        grid
    }

    /// Adds `count` to the cell for `date`. Dates before the first column or
    /// after `today` are dropped; returns whether the count landed.
    pub fn add(&mut self, date: NaiveDate, count: u32) -> bool {
        match self.position(date) {
            Some((week, day)) if date <= self.today => {
                let cell = &mut self.weeks[week][day];
                cell.count = cell.count.saturating_add(count);
                true
            }
            _ => {
                self.dropped += 1;
                false
            }
        }
    }

    /// `(week, day)` of `date`, or `None` outside the grid.
    pub fn position(&self, date: NaiveDate) -> Option<(usize, usize)> {
        let offset = (date - self.start).num_days();
        if offset < 0 {
            return None;
        }
        let offset = offset as usize;
        let week = offset / DAYS_PER_WEEK;
        (week < WEEKS).then_some((week, offset % DAYS_PER_WEEK))
    }

    pub fn cell(&self, week: usize, day: usize) -> Option<&HeatmapCell> {
        self.weeks.get(week).and_then(|column| column.get(day))
    }

    pub fn weeks(&self) -> &[[HeatmapCell; DAYS_PER_WEEK]] {
        &self.weeks
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn summary(&self) -> HeatmapSummary {
        let cells = self.weeks.iter().flatten().filter(|cell| !cell.future);
        let (total, active_days) = cells.fold((0u64, 0usize), |(total, active), cell| {
            (total + u64::from(cell.count), active + usize::from(cell.count > 0))
        });
        let average = if active_days == 0 {
            0.0
        } else {
            total as f64 / active_days as f64
        };
        HeatmapSummary {
            total,
            active_days,
            average,
            dropped: self.dropped,
        }
    }

    /// Weekday rows by week columns. `unit` labels the count in tooltips.
    pub fn to_html(&self, unit: &str) -> String {
        const WEEKDAY_LABELS: [&str; DAYS_PER_WEEK] =
            ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

        let mut html = String::from("<table class=\"heatmap\"><tbody>");
        for (day, label) in WEEKDAY_LABELS.iter().enumerate() {
            let _ = write!(html, "<tr><th class=\"heatmap-label\">{label}</th>");
            for column in &self.weeks {
                let cell = &column[day];
                let _ = write!(
                    html,
                    "<td class=\"{}\" data-date=\"{}\" data-count=\"{}\" title=\"{}: {} {}\"></td>",
                    cell.css_class(),
                    cell.date,
                    cell.count,
                    cell.date.format("%b %-d, %Y"),
                    cell.count,
                    escape_html(unit)
                );
            }
            html.push_str("</tr>");
        }
        html.push_str("</tbody></table>");
        html
    }
}
