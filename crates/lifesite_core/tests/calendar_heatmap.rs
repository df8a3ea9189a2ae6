use chrono::{Datelike, Duration, NaiveDate, Weekday};
use lifesite_core::calendar::{cumulative_series, HeatmapGrid, Intensity, DAYS_PER_WEEK, WEEKS};
use lifesite_core::model::DailyCount;

fn today() -> NaiveDate {
    // A Wednesday.
    NaiveDate::from_ymd_opt(2024, 3, 13).unwrap()
}

#[test]
fn grid_spans_52_sunday_started_weeks_ending_with_today() {
    let grid = HeatmapGrid::new(today());
    assert_eq!(grid.weeks().len(), WEEKS);
    assert_eq!(grid.start().weekday(), Weekday::Sun);

    let (week, day) = grid.position(today()).unwrap();
    assert_eq!(week, WEEKS - 1);
    assert_eq!(day, 3);

    let last = grid.cell(WEEKS - 1, DAYS_PER_WEEK - 1).unwrap();
    assert!(last.future);
    assert_eq!(last.css_class(), "heat-future");
}

#[test]
fn bucketing_never_leaves_the_grid() {
    let grid = HeatmapGrid::new(today());
    let mut date = today() - Duration::days(500);
    while date <= today() + Duration::days(30) {
        if let Some((week, day)) = grid.position(date) {
            assert!(week < WEEKS);
            assert!(day < DAYS_PER_WEEK);
            assert_eq!(grid.cell(week, day).unwrap().date, date);
        }
        date += Duration::days(1);
    }
}

#[test]
fn out_of_window_counts_are_dropped() {
    let grid = HeatmapGrid::from_counts(
        today(),
        [
            (today(), 4),
            (today() - Duration::days(1), 1),
            (today() - Duration::days(1), 2),
            (today() + Duration::days(1), 9),
            (today() - Duration::days(400), 5),
        ],
    );
    let summary = grid.summary();
    assert_eq!(summary.total, 7);
    assert_eq!(summary.active_days, 2);
    assert_eq!(summary.dropped, 2);
    assert!((summary.average - 3.5).abs() < f64::EPSILON);
}

#[test]
fn intensity_thresholds() {
    assert_eq!(Intensity::from_count(0).level(), 0);
    assert_eq!(Intensity::from_count(2).level(), 1);
    assert_eq!(Intensity::from_count(3).level(), 2);
    assert_eq!(Intensity::from_count(8).level(), 3);
    assert_eq!(Intensity::from_count(9).level(), 4);
}

#[test]
fn html_has_a_cell_per_day() {
    let html = HeatmapGrid::new(today()).to_html("commits");
    assert_eq!(html.matches("<td ").count(), WEEKS * DAYS_PER_WEEK);
    assert!(html.contains("data-date=\"2024-03-13\""));
}

#[test]
fn cumulative_series_sorts_and_accumulates() {
    let entries: Vec<DailyCount> = serde_json::from_value(serde_json::json!([
        {"date": "2024-01-03", "count": 2},
        {"date": "garbage", "count": 5},
        {"date": "2024-01-01", "count": 1}
    ]))
    .unwrap();
    let series = cumulative_series(&entries);
    assert_eq!(series.total, 8);
    let running: Vec<u64> = series.points.iter().map(|p| p.cumulative).collect();
    assert_eq!(running, vec![1, 3]);
}
