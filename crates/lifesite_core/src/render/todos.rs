use super::html::{element_id, empty_state, escape_html, progress_bar, stat_tile};
use super::{percent, RenderContext};
use crate::filter::ViewState;
use crate::model::Task;
use crate::util::dates::parse_timestamp;
use crate::util::text::truncate_text;
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use std::collections::BTreeMap;

/// Trailing window used when the view does not set one.
pub const DEFAULT_DAYS_WINDOW: u32 = 30;
pub const DAYS_WINDOW_CHOICES: [u32; 7] = [7, 14, 30, 60, 90, 180, 365];

const TIMELINE_DAYS: usize = 90;
const TOP_PROJECTS: usize = 10;
const TOP_TAGS: usize = 15;
const TOP_PENDING: usize = 10;
const LEAD_TIME_TASKS: usize = 100;
const FLOW_WEEKS: usize = 12;
const LEAD_TIME_LABEL_CHARS: usize = 50;
const MATRIX_LABEL_CHARS: usize = 40;
const NO_PRIORITY: &str = "None";
const PRIORITY_ORDER: [&str; 4] = ["H", "M", "L", NO_PRIORITY];
const WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];
/// Negative urgencies fall outside every band.
const URGENCY_BUCKETS: [(f64, f64, &str); 5] = [
    (0.0, 1.0, "Very Low"),
    (1.0, 5.0, "Low"),
    (5.0, 10.0, "Medium"),
    (10.0, 15.0, "High"),
    (15.0, f64::INFINITY, "Very High"),
];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectProgress {
    pub project: String,
    pub completed: usize,
    pub pending: usize,
}

impl ProjectProgress {
    pub fn total(&self) -> usize {
        self.completed + self.pending
    }
}

/// Creation-to-completion time of one completed task.
#[derive(Debug, Clone, PartialEq)]
pub struct LeadTime {
    pub created: NaiveDateTime,
    pub days: f64,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriorityBreakdown {
    pub priority: String,
    pub total: usize,
    pub completed: usize,
}

impl PriorityBreakdown {
    pub fn pending(&self) -> usize {
        self.total - self.completed
    }

    pub fn completion_rate(&self) -> f64 {
        percent(self.completed, self.total)
    }
}

/// One pending task placed on the utility/effort matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct UtilityEffort {
    pub effort: f64,
    pub utility: f64,
    pub urgency: f64,
    pub description: String,
}

/// Tasks added and completed in one Sunday-started week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyFlow {
    pub week_start: NaiveDate,
    pub added: usize,
    pub completed: usize,
}

impl WeeklyFlow {
    /// Positive when the week reduced the backlog.
    pub fn net_change(&self) -> i64 {
        self.completed as i64 - self.added as i64
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoSummary<'a> {
    pub days_window: u32,
    /// Tasks whose activity date falls inside the window.
    pub in_window: Vec<&'a Task>,
    pub completed: usize,
    pub pending: usize,
    pub deleted: usize,
    pub completion_rate: f64,
    /// `(YYYY-MM-DD, completions)` for the latest days with completions.
    pub timeline: Vec<(String, usize)>,
    /// Across all tasks, largest first.
    pub projects: Vec<ProjectProgress>,
    pub tags: Vec<(String, usize)>,
    /// Pending tasks in the window per urgency band.
    pub urgency: Vec<(&'static str, usize)>,
    pub top_pending: Vec<&'a Task>,
    /// Completed tasks in the window, oldest creation first, latest 100.
    pub lead_times: Vec<LeadTime>,
    /// Across all tasks; `H`, `M`, `L`, `None`, then unknown levels.
    pub priorities: Vec<PriorityBreakdown>,
    /// Across all tasks, in first-seen order.
    pub statuses: Vec<(String, usize)>,
    /// Pending tasks in the window with both utility and effort.
    pub utility_effort: Vec<UtilityEffort>,
    /// Completions in the window per weekday, Sunday first.
    pub weekly_rhythm: [(&'static str, usize); 7],
    /// Across all tasks, the latest 12 weeks with activity.
    pub task_flow: Vec<WeeklyFlow>,
}

pub fn todo_summary<'a>(
    tasks: &'a [Task],
    days_window: u32,
    ctx: &RenderContext,
) -> TodoSummary<'a> {
    let cutoff = (ctx.today - Duration::days(i64::from(days_window))).and_time(NaiveTime::MIN);
    let in_window: Vec<&Task> = tasks
        .iter()
        .filter(|task| task.activity_date().is_some_and(|date| date >= cutoff))
        .collect();

    let completed: Vec<&Task> = in_window
        .iter()
        .copied()
        .filter(|t| t.is_completed())
        .collect();
    let pending: Vec<&Task> = in_window
        .iter()
        .copied()
        .filter(|t| t.is_pending())
        .collect();
    let deleted = in_window.iter().filter(|t| t.is_deleted()).count();

    let mut per_day: BTreeMap<String, usize> = BTreeMap::new();
    for task in &completed {
        if let Some(day) = task.completed_date.as_deref().and_then(|d| d.get(..10)) {
            *per_day.entry(day.to_string()).or_insert(0) += 1;
        }
    }
    let skip = per_day.len().saturating_sub(TIMELINE_DAYS);
    let timeline = per_day.into_iter().skip(skip).collect();

    let mut by_project: BTreeMap<&str, ProjectProgress> = BTreeMap::new();
    for task in tasks {
        let entry = by_project
            .entry(task.project_label())
            .or_insert_with(|| ProjectProgress {
                project: task.project_label().to_string(),
                ..ProjectProgress::default()
            });
        if task.is_completed() {
            entry.completed += 1;
        } else if task.is_pending() {
            entry.pending += 1;
        }
    }
    let mut projects: Vec<ProjectProgress> = by_project
        .into_values()
        .filter(|progress| progress.total() > 0)
        .collect();
    projects.sort_by(|a, b| b.total().cmp(&a.total()));
    projects.truncate(TOP_PROJECTS);

    let mut tag_totals: BTreeMap<&str, usize> = BTreeMap::new();
    for tag in tasks.iter().flat_map(|task| task.tags.iter()) {
        *tag_totals.entry(tag.as_str()).or_insert(0) += 1;
    }
    let mut tags: Vec<(String, usize)> = tag_totals
        .into_iter()
        .map(|(tag, count)| (tag.to_string(), count))
        .collect();
    tags.sort_by(|a, b| b.1.cmp(&a.1));
    tags.truncate(TOP_TAGS);

    let urgency = URGENCY_BUCKETS
        .iter()
        .map(|(min, max, label)| {
            let count = pending
                .iter()
                .filter(|task| task.urgency >= *min && task.urgency < *max)
                .count();
            (*label, count)
        })
        .collect();

    let mut top_pending = pending.clone();
    top_pending.sort_by(|a, b| b.urgency.total_cmp(&a.urgency));
    top_pending.truncate(TOP_PENDING);

    let lead_times = lead_times(&completed);
    let utility_effort = pending
        .iter()
        .filter_map(|task| {
            Some(UtilityEffort {
                effort: task.effort?,
                utility: task.utility?,
                urgency: task.urgency,
                description: truncate_text(&task.description, MATRIX_LABEL_CHARS),
            })
        })
        .collect();

    let mut weekly_rhythm: [(&'static str, usize); 7] = WEEKDAYS.map(|day| (day, 0));
    for date in completed
        .iter()
        .filter_map(|task| task.completed_date.as_deref().and_then(parse_timestamp))
    {
        weekly_rhythm[date.weekday().num_days_from_sunday() as usize].1 += 1;
    }

    TodoSummary {
        days_window,
        completion_rate: percent(completed.len(), in_window.len()),
        completed: completed.len(),
        pending: pending.len(),
        deleted,
        in_window,
        timeline,
        projects,
        tags,
        urgency,
        top_pending,
        lead_times,
        priorities: priority_breakdown(tasks),
        statuses: status_distribution(tasks),
        utility_effort,
        weekly_rhythm,
        task_flow: task_flow(tasks),
    }
}

fn lead_times(completed: &[&Task]) -> Vec<LeadTime> {
    let mut times: Vec<LeadTime> = completed
        .iter()
        .filter_map(|task| {
            Some(LeadTime {
                created: task.created_date.as_deref().and_then(parse_timestamp)?,
                days: task.lead_time_days?,
                description: truncate_text(&task.description, LEAD_TIME_LABEL_CHARS),
            })
        })
        .collect();
    times.sort_by_key(|time| time.created);
    let skip = times.len().saturating_sub(LEAD_TIME_TASKS);
    times.split_off(skip)
}

fn priority_breakdown(tasks: &[Task]) -> Vec<PriorityBreakdown> {
    let mut levels: Vec<PriorityBreakdown> = PRIORITY_ORDER
        .iter()
        .map(|priority| PriorityBreakdown {
            priority: priority.to_string(),
            ..PriorityBreakdown::default()
        })
        .collect();
    for task in tasks {
        let priority = match task.priority.trim() {
            "" => NO_PRIORITY,
            other => other,
        };
        let index = match levels.iter().position(|level| level.priority == priority) {
            Some(index) => index,
            None => {
                levels.push(PriorityBreakdown {
                    priority: priority.to_string(),
                    ..PriorityBreakdown::default()
                });
                levels.len() - 1
            }
        };
        levels[index].total += 1;
        if task.is_completed() {
            levels[index].completed += 1;
        }
    }
    levels.retain(|level| level.total > 0);
    levels
}

fn status_distribution(tasks: &[Task]) -> Vec<(String, usize)> {
    let mut statuses: Vec<(String, usize)> = Vec::new();
    for task in tasks {
        match statuses.iter_mut().find(|(status, _)| *status == task.status) {
            Some((_, count)) => *count += 1,
            None => statuses.push((task.status.clone(), 1)),
        }
    }
    statuses
}

fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_sunday()))
}

fn task_flow(tasks: &[Task]) -> Vec<WeeklyFlow> {
    let mut weeks: BTreeMap<NaiveDate, (usize, usize)> = BTreeMap::new();
    for task in tasks {
        if let Some(created) = task.created_date.as_deref().and_then(parse_timestamp) {
            weeks.entry(week_start(created.date())).or_default().0 += 1;
        }
        if !task.is_completed() {
            continue;
        }
        if let Some(done) = task.completed_date.as_deref().and_then(parse_timestamp) {
            weeks.entry(week_start(done.date())).or_default().1 += 1;
        }
    }
    let skip = weeks.len().saturating_sub(FLOW_WEEKS);
    weeks
        .into_iter()
        .skip(skip)
        .map(|(week_start, (added, completed))| WeeklyFlow {
            week_start,
            added,
            completed,
        })
        .collect()
}

pub fn render_todos(tasks: &[Task], view: &ViewState, ctx: &RenderContext) -> String {
    let days = view.days_window.unwrap_or(DEFAULT_DAYS_WINDOW);
    let summary = todo_summary(tasks, days, ctx);

    let mut html = String::from("<div class=\"space-y-8\">");

    html.push_str(
        "<div class=\"card p-4\"><span class=\"text-sm font-medium\">Show tasks from the last:</span><div class=\"flex gap-2 flex-wrap\">",
    );
    for choice in DAYS_WINDOW_CHOICES {
        let active = if choice == days {
            " bg-accent text-white"
        } else {
            " border-2"
        };
        html.push_str(&format!(
            "<span class=\"px-4 py-2 rounded-full{active}\" data-days=\"{choice}\">{choice} days</span>"
        ));
    }
    html.push_str("</div></div>");

    html.push_str("<div class=\"grid grid-cols-1 md:grid-cols-4 gap-4\">");
    html.push_str(&stat_tile(
        &format!("Total Tasks (Last {days} Days)"),
        &summary.in_window.len().to_string(),
    ));
    html.push_str(&stat_tile("Pending", &summary.pending.to_string()));
    html.push_str(&stat_tile("Completed", &summary.completed.to_string()));
    html.push_str(&stat_tile(
        "Completion Rate",
        &format!("{:.0}%", summary.completion_rate.round()),
    ));
    html.push_str("</div>");

    if tasks.is_empty() {
        html.push_str(&empty_state("No tasks exported yet."));
        html.push_str("</div>");
        return html;
    }

    html.push_str(
        "<div class=\"card p-6\"><h3 class=\"text-lg font-semibold mb-4\">Completion Timeline</h3><ul class=\"timeline text-sm\">",
    );
    for (day, count) in &summary.timeline {
        html.push_str(&format!(
            "<li data-date=\"{0}\"><span>{0}</span> <span class=\"font-medium\">{count}</span></li>",
            escape_html(day)
        ));
    }
    html.push_str("</ul></div>");

    html.push_str(
        "<div class=\"card p-6\"><h3 class=\"text-lg font-semibold mb-4\">Project Progress</h3><div class=\"space-y-3\">",
    );
    for project in &summary.projects {
        let rate = percent(project.completed, project.total());
        html.push_str(&format!(
            "<div><div class=\"flex justify-between text-sm\"><span>{}</span><span>{}/{} ({rate:.0}%)</span></div>{}</div>",
            escape_html(&project.project),
            project.completed,
            project.total(),
            progress_bar(rate, "bg-green")
        ));
    }
    html.push_str("</div></div>");

    html.push_str(
        "<div class=\"card p-6\"><h3 class=\"text-lg font-semibold mb-4\">Tag Usage</h3><div class=\"flex flex-wrap gap-2\">",
    );
    for (tag, count) in &summary.tags {
        html.push_str(&format!(
            "<span class=\"px-2 py-1 text-xs bg-surface1 rounded\">#{} <span class=\"text-subtext0\">{count}</span></span>",
            escape_html(tag)
        ));
    }
    html.push_str("</div></div>");

    html.push_str(
        "<div class=\"card p-6\"><h3 class=\"text-lg font-semibold mb-4\">Pending by Urgency</h3><dl class=\"grid grid-cols-5 gap-2 text-sm\">",
    );
    for (label, count) in &summary.urgency {
        html.push_str(&format!(
            "<div><dt>{label}</dt><dd class=\"font-medium\">{count}</dd></div>"
        ));
    }
    html.push_str("</dl></div>");

    if !summary.lead_times.is_empty() {
        html.push_str(&section_open(
            "Task Lead Time",
            "How long tasks take from creation to completion",
        ));
        html.push_str("<ul class=\"lead-times text-sm\">");
        for time in &summary.lead_times {
            html.push_str(&format!(
                "<li data-created=\"{}\" data-days=\"{:.1}\"><span>{}</span> <span class=\"font-medium\">{:.1} days</span></li>",
                time.created.format("%Y-%m-%d"),
                time.days,
                escape_html(&time.description),
                time.days
            ));
        }
        html.push_str("</ul></div>");
    }

    if !summary.priorities.is_empty() {
        html.push_str(&section_open(
            "Priority Breakdown",
            "Tasks by priority level and how many get done",
        ));
        html.push_str(
            "<table class=\"w-full text-sm\"><thead><tr><th>Priority</th><th>Total</th><th>Completed</th><th>Pending</th><th>Completion Rate</th></tr></thead><tbody>",
        );
        for level in &summary.priorities {
            html.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{:.0}%</td></tr>",
                escape_html(&level.priority),
                level.total,
                level.completed,
                level.pending(),
                level.completion_rate().round()
            ));
        }
        html.push_str("</tbody></table></div>");
    }

    html.push_str(&section_open("Status Distribution", "Every exported task by status"));
    html.push_str("<dl class=\"flex flex-wrap gap-4 text-sm\">");
    for (status, count) in &summary.statuses {
        html.push_str(&format!(
            "<div><dt>{}</dt><dd class=\"font-medium\">{count}</dd></div>",
            escape_html(status)
        ));
    }
    html.push_str("</dl></div>");

    if !summary.utility_effort.is_empty() {
        html.push_str(&section_open(
            "Utility vs Effort Matrix",
            "High-value, low-effort tasks sit top-left",
        ));
        html.push_str(
            "<table class=\"w-full text-sm\"><thead><tr><th>Task</th><th>Utility</th><th>Effort</th><th>Urgency</th></tr></thead><tbody>",
        );
        for point in &summary.utility_effort {
            html.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{:.1}</td></tr>",
                escape_html(&point.description),
                point.utility,
                point.effort,
                point.urgency
            ));
        }
        html.push_str("</tbody></table></div>");
    }

    html.push_str(&section_open("Weekly Completion Rhythm", "Completions per weekday"));
    html.push_str("<dl class=\"grid grid-cols-7 gap-2 text-sm\">");
    for (day, count) in &summary.weekly_rhythm {
        html.push_str(&format!(
            "<div><dt>{day}</dt><dd class=\"font-medium\">{count}</dd></div>"
        ));
    }
    html.push_str("</dl></div>");

    html.push_str(&section_open(
        "Task Flow Efficiency (Last 12 Weeks)",
        "Tasks added vs. completed",
    ));
    html.push_str(
        "<table class=\"w-full text-sm\"><thead><tr><th>Week</th><th>Added</th><th>Completed</th><th>Net Change</th></tr></thead><tbody>",
    );
    for week in &summary.task_flow {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{:+}</td></tr>",
            week.week_start.format("%Y-%m-%d"),
            week.added,
            week.completed,
            week.net_change()
        ));
    }
    html.push_str("</tbody></table></div>");

    html.push_str(
        "<div class=\"card p-6\"><h3 class=\"text-lg font-semibold mb-4\">Top Pending</h3><ol class=\"space-y-2 text-sm\">",
    );
    for task in &summary.top_pending {
        html.push_str(&format!(
            "<li id=\"{}\"><span class=\"font-medium\">{}</span> <span class=\"text-subtext0\">{} · urgency {:.1}</span></li>",
            escape_html(&element_id("task", &task.id)),
            escape_html(&task.description),
            escape_html(task.project_label()),
            task.urgency
        ));
    }
    html.push_str("</ol></div></div>");
    html
}

fn section_open(title: &str, caption: &str) -> String {
    format!(
        "<div class=\"card p-6\"><h3 class=\"text-lg font-semibold mb-4\">{title}</h3><p class=\"text-sm text-subtext0 mb-4\">{caption}</p>"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn task(id: &str, status: &str, created: &str, completed: Option<&str>, urgency: f64) -> Task {
        Task {
            id: id.to_string(),
            description: format!("task {id}"),
            status: status.to_string(),
            created_date: Some(created.to_string()),
            completed_date: completed.map(str::to_string),
            urgency,
            project: if id == "1" { "site".to_string() } else { String::new() },
            tags: vec!["home".to_string()],
            ..Task::default()
        }
    }

    #[test]
    fn window_counts_and_buckets() {
        let ctx = RenderContext::new(NaiveDate::from_ymd_opt(2025, 8, 31).unwrap());
        let tasks = vec![
            task("1", "completed", "2025-08-01T09:00:00", Some("2025-08-20T10:00:00"), 0.0),
            task("2", "pending", "2025-08-25T09:00:00", None, 12.0),
            task("3", "pending", "2025-08-26T09:00:00", None, 0.5),
            task("4", "deleted", "2025-08-27T09:00:00", None, 0.0),
            task("5", "pending", "2024-01-01T09:00:00", None, 20.0),
        ];
        let summary = todo_summary(&tasks, 30, &ctx);
        assert_eq!(summary.in_window.len(), 4);
        assert_eq!(summary.completed, 1);
        assert_eq!(summary.pending, 2);
        assert_eq!(summary.deleted, 1);
        assert!((summary.completion_rate - 25.0).abs() < 1e-9);
        assert_eq!(summary.timeline, vec![("2025-08-20".to_string(), 1)]);
        assert_eq!(summary.urgency[0], ("Very Low", 1));
        assert_eq!(summary.urgency[3], ("High", 1));
        assert_eq!(summary.top_pending[0].id, "2");
        // Project progress spans every task, not just the window.
        assert_eq!(summary.projects[0].project, "No Project");
        assert_eq!(summary.projects[0].pending, 3);
        assert_eq!(summary.tags, vec![("home".to_string(), 5)]);
    }

    #[test]
    fn negative_urgency_falls_outside_every_band() {
        let ctx = RenderContext::new(NaiveDate::from_ymd_opt(2025, 8, 31).unwrap());
        let tasks = vec![
            task("1", "pending", "2025-08-25T09:00:00", None, -2.0),
            task("2", "pending", "2025-08-25T09:00:00", None, 0.0),
        ];
        let summary = todo_summary(&tasks, 30, &ctx);
        let banded: usize = summary.urgency.iter().map(|(_, count)| count).sum();
        assert_eq!(summary.urgency[0], ("Very Low", 1));
        assert_eq!(banded, 1);
    }

    #[test]
    fn lead_times_keep_completed_tasks_by_creation() {
        let ctx = RenderContext::new(NaiveDate::from_ymd_opt(2025, 8, 31).unwrap());
        let mut late = task(
            "1",
            "completed",
            "2025-08-20T09:00:00",
            Some("2025-08-22T09:00:00"),
            1.0,
        );
        late.lead_time_days = Some(2.0);
        let mut early = task(
            "2",
            "completed",
            "2025-08-10T09:00:00",
            Some("2025-08-21T09:00:00"),
            1.0,
        );
        early.lead_time_days = Some(11.0);
        let unmeasured = task(
            "3",
            "completed",
            "2025-08-11T09:00:00",
            Some("2025-08-21T09:00:00"),
            1.0,
        );
        let tasks = vec![late, early, unmeasured];

        let summary = todo_summary(&tasks, 30, &ctx);
        let days: Vec<f64> = summary.lead_times.iter().map(|time| time.days).collect();
        assert_eq!(days, vec![11.0, 2.0]);
        assert_eq!(summary.lead_times[0].description, "task 2");
    }

    #[test]
    fn priorities_and_statuses_span_all_tasks() {
        let ctx = RenderContext::new(NaiveDate::from_ymd_opt(2025, 8, 31).unwrap());
        let mut high = task(
            "1",
            "completed",
            "2020-01-01T09:00:00",
            Some("2020-01-02T09:00:00"),
            1.0,
        );
        high.priority = "H".to_string();
        let mut high_open = task("2", "pending", "2025-08-25T09:00:00", None, 1.0);
        high_open.priority = "H".to_string();
        let unset = task("3", "pending", "2025-08-25T09:00:00", None, 1.0);
        let tasks = vec![high, high_open, unset];

        let summary = todo_summary(&tasks, 30, &ctx);
        let levels: Vec<(&str, usize, usize)> = summary
            .priorities
            .iter()
            .map(|level| (level.priority.as_str(), level.total, level.completed))
            .collect();
        assert_eq!(levels, vec![("H", 2, 1), ("None", 1, 0)]);
        assert!((summary.priorities[0].completion_rate() - 50.0).abs() < 1e-9);
        assert_eq!(
            summary.statuses,
            vec![("completed".to_string(), 1), ("pending".to_string(), 2)]
        );
    }

    #[test]
    fn matrix_holds_pending_tasks_with_both_scores() {
        let ctx = RenderContext::new(NaiveDate::from_ymd_opt(2025, 8, 31).unwrap());
        let mut scored = task("1", "pending", "2025-08-25T09:00:00", None, 3.0);
        scored.utility = Some(8.0);
        scored.effort = Some(2.0);
        let mut half = task("2", "pending", "2025-08-25T09:00:00", None, 3.0);
        half.utility = Some(5.0);
        let mut done = task(
            "3",
            "completed",
            "2025-08-25T09:00:00",
            Some("2025-08-26T09:00:00"),
            3.0,
        );
        done.utility = Some(5.0);
        done.effort = Some(5.0);
        let tasks = vec![scored, half, done];

        let summary = todo_summary(&tasks, 30, &ctx);
        assert_eq!(summary.utility_effort.len(), 1);
        assert_eq!(summary.utility_effort[0].utility, 8.0);
        assert_eq!(summary.utility_effort[0].effort, 2.0);
    }

    #[test]
    fn rhythm_counts_completions_from_sunday() {
        let ctx = RenderContext::new(NaiveDate::from_ymd_opt(2025, 8, 31).unwrap());
        let tasks = vec![
            // 2025-08-24 is a Sunday, 2025-08-27 a Wednesday.
            task("1", "completed", "2025-08-20T09:00:00", Some("2025-08-24T09:00:00"), 1.0),
            task("2", "completed", "2025-08-20T09:00:00", Some("2025-08-27T09:00:00"), 1.0),
            task("3", "completed", "2025-08-20T09:00:00", Some("2025-08-27T18:00:00"), 1.0),
        ];
        let summary = todo_summary(&tasks, 30, &ctx);
        assert_eq!(summary.weekly_rhythm[0], ("Sunday", 1));
        assert_eq!(summary.weekly_rhythm[3], ("Wednesday", 2));
        assert_eq!(summary.weekly_rhythm[6], ("Saturday", 0));
    }

    #[test]
    fn task_flow_groups_by_sunday_week() {
        let ctx = RenderContext::new(NaiveDate::from_ymd_opt(2025, 8, 31).unwrap());
        let tasks = vec![
            task("1", "completed", "2025-08-18T09:00:00", Some("2025-08-26T09:00:00"), 1.0),
            task("2", "pending", "2025-08-19T09:00:00", None, 1.0),
            task("3", "pending", "2025-08-30T09:00:00", None, 1.0),
        ];
        let summary = todo_summary(&tasks, 30, &ctx);
        let sunday = |day| NaiveDate::from_ymd_opt(2025, 8, day).unwrap();
        assert_eq!(
            summary.task_flow,
            vec![
                WeeklyFlow {
                    week_start: sunday(17),
                    added: 2,
                    completed: 0,
                },
                WeeklyFlow {
                    week_start: sunday(24),
                    added: 1,
                    completed: 1,
                },
            ]
        );
        assert_eq!(summary.task_flow[0].net_change(), -2);
        assert_eq!(summary.task_flow[1].net_change(), 0);
    }

    #[test]
    fn task_flow_keeps_latest_twelve_weeks() {
        let ctx = RenderContext::new(NaiveDate::from_ymd_opt(2025, 8, 31).unwrap());
        let start = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        let tasks: Vec<Task> = (0..20)
            .map(|week| {
                let created = start + Duration::weeks(week);
                let created = format!("{created}T09:00:00");
                task(&week.to_string(), "pending", &created, None, 1.0)
            })
            .collect();
        let summary = todo_summary(&tasks, 30, &ctx);
        assert_eq!(summary.task_flow.len(), 12);
        assert_eq!(summary.task_flow[0].week_start, start + Duration::weeks(8));
    }

    #[test]
    fn page_shows_every_analysis_heading() {
        let ctx = RenderContext::new(NaiveDate::from_ymd_opt(2025, 8, 31).unwrap());
        let tasks = vec![task("1", "pending", "2025-08-25T09:00:00", None, 1.0)];
        let html = render_todos(&tasks, &ViewState::default(), &ctx);
        for heading in [
            "Priority Breakdown",
            "Status Distribution",
            "Weekly Completion Rhythm",
            "Task Flow Efficiency (Last 12 Weeks)",
        ] {
            assert!(html.contains(heading), "missing {heading}");
        }
    }
}
