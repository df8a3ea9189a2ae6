use super::html::{empty_state, escape_html, progress_bar, stat_tile};
use super::{percent, RenderContext};
use crate::calendar::HeatmapGrid;
use crate::filter::{group_by, ViewState};
use crate::model::Habit;
use crate::util::dates::format_weekday_date;
use chrono::{Duration, NaiveDate};
use std::collections::{BTreeMap, BTreeSet, HashMap};

const RECENT_ENTRIES: usize = 35;
const RECENT_DAYS: usize = 7;
const GRID_DAYS: i64 = 30;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HabitStats {
    pub total: usize,
    pub completed: usize,
    pub completion_rate: f64,
    pub current_streak: usize,
}

/// Per-habit totals, keyed by habit name.
pub fn habit_stats(habits: &[Habit]) -> BTreeMap<String, HabitStats> {
    group_by(habits, |habit| habit.habit_name.clone())
        .into_iter()
        .map(|(name, entries)| {
            let completed = entries.iter().filter(|habit| habit.completed).count();
            let stats = HabitStats {
                total: entries.len(),
                completed,
                completion_rate: percent(completed, entries.len()),
                current_streak: current_streak(&entries),
            };
            (name, stats)
        })
        .collect()
}

/// Completed entries counted back from the latest entry until the first miss.
pub fn current_streak(entries: &[&Habit]) -> usize {
    let mut ordered: Vec<&Habit> = entries.to_vec();
    ordered.sort_by(|a, b| b.date.cmp(&a.date));
    ordered.iter().take_while(|habit| habit.completed).count()
}

pub fn render_habits(habits: &[Habit], _view: &ViewState, ctx: &RenderContext) -> String {
    if habits.is_empty() {
        return empty_state("No habits tracked yet.");
    }

    let mut html = String::from("<div class=\"space-y-6\">");

    html.push_str("<div class=\"grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4\">");
    for (name, stats) in habit_stats(habits) {
        html.push_str(&format!(
            "<div class=\"card p-4\"><h3 class=\"font-semibold mb-2\">{}</h3><div class=\"flex justify-between text-sm\"><span>Completion Rate</span><span class=\"font-medium\">{:.1}%</span></div>{}<div class=\"flex justify-between text-xs text-subtext0\"><span>{}/{} completed</span><span>Streak: {}</span></div></div>",
            escape_html(&name),
            stats.completion_rate,
            progress_bar(stats.completion_rate, "bg-blue"),
            stats.completed,
            stats.total,
            stats.current_streak
        ));
    }
    html.push_str("</div>");

    html.push_str(&recent_activity(habits));
    html.push_str(&habit_grid(habits, ctx.today));

    let grid = HeatmapGrid::from_counts(
        ctx.today,
        habits
            .iter()
            .filter(|habit| habit.completed)
            .filter_map(|habit| habit.day().map(|day| (day, 1))),
    );
    let summary = grid.summary();
    html.push_str(
        "<div class=\"card p-6\"><h3 class=\"text-lg font-semibold mb-4\">Completions</h3><div class=\"grid grid-cols-3 gap-4 mb-4\">",
    );
    html.push_str(&stat_tile("Completions", &summary.total.to_string()));
    html.push_str(&stat_tile("Active days", &summary.active_days.to_string()));
    html.push_str(&stat_tile("Per active day", &format!("{:.1}", summary.average)));
    html.push_str("</div><div class=\"overflow-x-auto\">");
    html.push_str(&grid.to_html("completions"));
    html.push_str("</div></div></div>");
    html
}

/// Latest entries grouped by date, newest dates first.
fn recent_activity(habits: &[Habit]) -> String {
    let mut latest: Vec<&Habit> = habits.iter().collect();
    latest.sort_by(|a, b| b.date.cmp(&a.date));
    latest.truncate(RECENT_ENTRIES);
    let by_date = group_by(latest.iter().copied(), |habit| habit.date.clone());

    let mut html = String::from(
        "<div class=\"card p-6\"><h3 class=\"text-lg font-semibold mb-4\">Recent Activity</h3><div class=\"space-y-4\">",
    );
    for (date, entries) in by_date.iter().rev().take(RECENT_DAYS) {
        html.push_str(&format!(
            "<div class=\"border-b border-surface1 pb-3\"><h4 class=\"font-medium mb-2\">{}</h4><div class=\"grid grid-cols-2 md:grid-cols-4 gap-2\">",
            escape_html(&format_weekday_date(date))
        ));
        for habit in entries {
            let class = if habit.completed {
                "bg-green/20 text-green"
            } else {
                "bg-red/20 text-red"
            };
            html.push_str(&format!(
                "<div class=\"p-2 rounded text-xs {class}\">{}",
                escape_html(&habit.habit_name)
            ));
            if let Some(minutes) = habit.duration.filter(|minutes| *minutes > 0.0) {
                html.push_str(&format!(
                    "<div class=\"text-xs text-subtext0 mt-1\">{minutes} min</div>"
                ));
            }
            html.push_str("</div>");
        }
        html.push_str("</div></div>");
    }
    html.push_str("</div></div>");
    html
}

/// Habits by the trailing 30 days: completed, failed or not tracked.
fn habit_grid(habits: &[Habit], today: NaiveDate) -> String {
    let names: BTreeSet<&str> = habits.iter().map(|habit| habit.habit_name.as_str()).collect();
    let dates: Vec<NaiveDate> = (0..GRID_DAYS)
        .rev()
        .map(|offset| today - Duration::days(offset))
        .collect();
    let status: HashMap<(&str, NaiveDate), bool> = habits
        .iter()
        .filter_map(|habit| {
            habit
                .day()
                .map(|day| ((habit.habit_name.as_str(), day), habit.completed))
        })
        .collect();

    let mut html = String::from(
        "<div class=\"card p-6 overflow-x-auto\"><table class=\"habit-grid min-w-full\"><thead><tr><th>Habit</th>",
    );
    for date in &dates {
        html.push_str(&format!(
            "<th class=\"text-xs\">{}<br>{}</th>",
            date.format("%b"),
            date.format("%-d")
        ));
    }
    html.push_str("</tr></thead><tbody>");
    for name in names {
        html.push_str(&format!("<tr><td class=\"font-medium\">{}</td>", escape_html(name)));
        for date in &dates {
            let (class, label) = match status.get(&(name, *date)) {
                Some(true) => ("bg-green", "Completed"),
                Some(false) => ("bg-red", "Failed"),
                None => ("bg-surface1", "Not Tracked"),
            };
            html.push_str(&format!(
                "<td><div class=\"w-5 h-5 rounded-sm {class}\" title=\"{}: {label}\"></div></td>",
                date.format("%a, %b %-d")
            ));
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody></table></div>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    fn habit(name: &str, date: &str, completed: bool) -> Habit {
        Habit {
            id: format!("{name}-{date}"),
            date: date.to_string(),
            habit_name: name.to_string(),
            completed,
            ..Habit::default()
        }
    }

    #[test]
    fn stats_and_streak() {
        let habits = vec![
            habit("read", "2025-08-01", true),
            habit("read", "2025-08-02", false),
            habit("read", "2025-08-03", true),
            habit("read", "2025-08-04", true),
            habit("run", "2025-08-04", false),
        ];
        let stats = habit_stats(&habits);
        let read = stats["read"];
        assert_eq!(read.total, 4);
        assert_eq!(read.completed, 3);
        assert!((read.completion_rate - 75.0).abs() < 1e-9);
        assert_eq!(read.current_streak, 2);
        assert_eq!(stats["run"].current_streak, 0);
    }

    #[test]
    fn grid_marks_tracked_days() {
        let habits = vec![habit("read", "2025-08-05", true), habit("read", "2025-08-04", false)];
        let ctx = RenderContext::new(NaiveDate::from_ymd_opt(2025, 8, 6).unwrap());
        let html = render_habits(&habits, &ViewState::default(), &ctx);
        assert!(html.contains("title=\"Tue, Aug 5: Completed\""));
        assert!(html.contains("title=\"Mon, Aug 4: Failed\""));
        assert!(html.contains("title=\"Wed, Aug 6: Not Tracked\""));
    }
}
