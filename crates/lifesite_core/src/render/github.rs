use super::html::{escape_html, stat_tile};
use super::RenderContext;
use crate::calendar::HeatmapGrid;
use crate::filter::ViewState;
use crate::model::GithubActivity;
use crate::util::dates::format_date;

pub fn render_github(activity: &GithubActivity, _view: &ViewState, ctx: &RenderContext) -> String {
    let updated = if activity.last_updated.trim().is_empty() {
        "never".to_string()
    } else {
        format_date(&activity.last_updated)
    };

    if let Some(error) = activity.error.as_deref() {
        return format!(
            "<div class=\"card p-6\"><h3 class=\"text-lg font-semibold mb-4\">GitHub Activity</h3><div class=\"text-red text-sm\">Error loading commits: {}</div><p class=\"text-subtext1 text-xs mt-2\">Last updated: {}</p></div>",
            escape_html(error),
            escape_html(&updated)
        );
    }

    let grid = HeatmapGrid::from_counts(
        ctx.today,
        activity
            .heatmap_data
            .iter()
            .filter_map(|value| value.day().map(|day| (day, value.count))),
    );
    let summary = grid.summary();
    let repositories = activity.repository_count.max(activity.repositories.len());

    let mut html = String::from(
        "<div class=\"space-y-6\"><div class=\"card p-6\"><h3 class=\"text-lg font-semibold mb-4\">GitHub Activity</h3>",
    );
    html.push_str(&format!(
        "<p class=\"text-subtext1 text-sm\">{} commits in the last year across {} repositories</p><p class=\"text-subtext0 text-xs mt-1\">Last updated: {}</p>",
        activity.total_commits,
        repositories,
        escape_html(&updated)
    ));
    html.push_str("<div class=\"grid grid-cols-3 gap-4 my-4\">");
    html.push_str(&stat_tile("Active days", &summary.active_days.to_string()));
    html.push_str(&stat_tile("Commits per active day", &format!("{:.1}", summary.average)));
    html.push_str(&stat_tile("Repositories", &repositories.to_string()));
    html.push_str("</div><div class=\"overflow-x-auto\">");
    html.push_str(&grid.to_html("commits"));
    html.push_str("</div></div></div>");
    html
}
