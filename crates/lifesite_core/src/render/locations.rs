use super::html::{element_id, empty_state, escape_html, stat_tile};
use super::{open_record, RenderContext};
use crate::filter::{sort_by_timestamp_asc, Filterable, ViewState};
use crate::model::Thought;
use crate::page::routes::Route;
use crate::util::dates::format_timestamp;
use crate::util::slug::capture_slug;
use crate::util::text::truncate_text;
use chrono::NaiveDateTime;

const PREVIEW_CHARS: usize = 120;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationSummary<'a> {
    /// Thoughts with both coordinates, oldest first.
    pub located: Vec<&'a Thought>,
    /// Located thoughts that pass the view filter.
    pub displayed: Vec<&'a Thought>,
    pub all_thoughts: usize,
    /// Mean of the located coordinates as `(lat, lon)`.
    pub center: Option<(f64, f64)>,
    /// Earliest and latest located capture.
    pub span: Option<(NaiveDateTime, NaiveDateTime)>,
}

fn coordinates(thought: &Thought) -> Option<(f64, f64)> {
    match (thought.location_latitude, thought.location_longitude) {
        (Some(lat), Some(lon)) if lat.is_finite() && lon.is_finite() => Some((lat, lon)),
        _ => None,
    }
}

pub fn location_summary<'a>(thoughts: &'a [Thought], view: &ViewState) -> LocationSummary<'a> {
    let mut located: Vec<&Thought> = thoughts
        .iter()
        .filter(|thought| coordinates(thought).is_some())
        .collect();
    sort_by_timestamp_asc(&mut located);

    let center = (!located.is_empty()).then(|| {
        let (lat_sum, lon_sum) = located
            .iter()
            .filter_map(|thought| coordinates(thought))
            .fold((0.0, 0.0), |(lat, lon), (t_lat, t_lon)| (lat + t_lat, lon + t_lon));
        let count = located.len() as f64;
        (lat_sum / count, lon_sum / count)
    });

    let mut stamps = located.iter().filter_map(|thought| thought.timestamp());
    let span = stamps.next().map(|first| {
        stamps.fold((first, first), |(low, high), stamp| {
            (low.min(stamp), high.max(stamp))
        })
    });

    let displayed = located
        .iter()
        .copied()
        .filter(|thought| view.filter.matches(*thought))
        .collect();

    LocationSummary {
        located,
        displayed,
        all_thoughts: thoughts.len(),
        center,
        span,
    }
}

/// Static stand-in for the interactive map: each located capture carries
/// its coordinates as data attributes for a client-side map layer.
pub fn render_thought_locations(
    thoughts: &[Thought],
    view: &ViewState,
    _ctx: &RenderContext,
) -> String {
    let summary = location_summary(thoughts, view);
    if summary.located.is_empty() {
        return empty_state("No thoughts with location data found.");
    }

    let mut html = String::from("<div class=\"space-y-6\">");
    html.push_str(
        "<div class=\"card p-6\"><h3 class=\"text-lg font-semibold mb-4\">Thought Locations Overview</h3><div class=\"grid grid-cols-1 md:grid-cols-3 gap-4\">",
    );
    html.push_str(&stat_tile("Thoughts Displayed", &summary.displayed.len().to_string()));
    html.push_str(&stat_tile("Total with Location", &summary.located.len().to_string()));
    html.push_str(&stat_tile("All Thoughts", &summary.all_thoughts.to_string()));
    html.push_str("</div></div>");

    if let Some((from, to)) = summary.span {
        html.push_str(&format!(
            "<div class=\"card p-6 flex justify-between text-sm text-subtext1\"><span>From: {}</span><span>To: {}</span></div>",
            from.format("%-m/%-d/%Y"),
            to.format("%-m/%-d/%Y")
        ));
    }

    let (lat, lon) = summary.center.unwrap_or_default();
    html.push_str(&format!(
        "<ol id=\"thought-map\" class=\"space-y-3\" data-center-lat=\"{lat:.4}\" data-center-lon=\"{lon:.4}\">"
    ));
    for thought in &summary.displayed {
        let Some((lat, lon)) = coordinates(thought) else {
            continue;
        };
        let id = element_id("location", thought.anchor_key());
        let place = thought
            .location()
            .unwrap_or_else(|| format!("{lat:.4}, {lon:.4}"));
        html.push_str(&open_record("li", &id, "card p-4 map-marker", view));
        html.push_str(&format!(
            "<span class=\"hidden\" data-lat=\"{lat}\" data-lon=\"{lon}\"></span>\
             <div class=\"text-sm font-semibold\">{}</div>\
             <div class=\"text-xs text-subtext0\">{}</div>\
             <p class=\"text-subtext1\">{}</p>\
             <a class=\"text-blue underline text-sm\" href=\"{}\">View thought</a></li>",
            escape_html(&place),
            escape_html(&format_timestamp(&thought.timestamp)),
            escape_html(&truncate_text(&thought.content, PREVIEW_CHARS)),
            Route::Thought(capture_slug(thought.anchor_key())).href()
        ));
    }
    html.push_str("</ol></div>");
    html
}
