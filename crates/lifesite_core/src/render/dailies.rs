use super::html::{empty_state, escape_html};
use super::RenderContext;
use crate::calendar::{cumulative_series, CumulativeSeries, HeatmapGrid};
use crate::filter::ViewState;
use crate::model::DailyCount;
use std::fmt::Write;

const EMPTY_MESSAGE: &str =
    "No dailies data available. Start writing daily notes to see your timeline!";

pub fn render_dailies(entries: &[DailyCount], _view: &ViewState, ctx: &RenderContext) -> String {
    let series = cumulative_series(entries);
    let mut html = String::from(
        "<div class=\"card p-6 mb-6\"><h3 class=\"text-lg font-semibold mb-4\">Daily Writing Timeline</h3>",
    );
    if series.is_empty() {
        html.push_str(&empty_state(EMPTY_MESSAGE));
        html.push_str("</div>");
        return html;
    }

    html.push_str(&format!(
        "<p class=\"text-subtext1 text-sm\"><span class=\"font-medium text-text\">{}</span> dailies written",
        series.total
    ));
    if series.points.len() > 1 {
        if let (Some(first), Some(last)) = (series.first_label(), series.last_label()) {
            html.push_str(&format!(
                " from {} - {}",
                escape_html(first),
                escape_html(last)
            ));
        }
    }
    html.push_str("</p>");
    html.push_str(&sparkline(&series));

    let grid = HeatmapGrid::from_counts(
        ctx.today,
        entries
            .iter()
            .filter_map(|entry| entry.day().map(|day| (day, entry.count))),
    );
    html.push_str("<div class=\"overflow-x-auto mt-6\">");
    html.push_str(&grid.to_html("dailies"));
    html.push_str("</div></div>");
    html
}

/// Cumulative line as an inline SVG polyline.
fn sparkline(series: &CumulativeSeries) -> String {
    const WIDTH: f64 = 600.0;
    const HEIGHT: f64 = 160.0;

    let last_index = series.points.len().saturating_sub(1).max(1) as f64;
    let peak = series.points.last().map_or(0, |point| point.cumulative);
    let max = peak.max(1) as f64;
    let mut points = String::new();
    for (index, point) in series.points.iter().enumerate() {
        let x = index as f64 / last_index * WIDTH;
        let y = HEIGHT - point.cumulative as f64 / max * HEIGHT;
        let _ = write!(points, "{x:.1},{y:.1} ");
    }
    format!(
        "<svg class=\"timeline\" viewBox=\"0 0 {WIDTH} {HEIGHT}\" preserveAspectRatio=\"none\" role=\"img\" aria-label=\"Total dailies\"><polyline fill=\"none\" stroke=\"currentColor\" stroke-width=\"2\" points=\"{}\"/></svg>",
        points.trim_end()
    )
}
