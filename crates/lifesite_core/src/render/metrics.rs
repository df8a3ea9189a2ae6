use super::html::{element_id, empty_state, escape_html, progress_bar};
use super::{open_record, RenderContext};
use crate::filter::ViewState;
use crate::model::metric::{format_number, SLEEP_SERIES_NAME};
use crate::model::Metric;
use crate::util::dates::{format_date, format_weekday_date};
use std::collections::BTreeMap;

const SLEEP_ENTRIES: usize = 7;
const HEALTH_GOALS: [(&str, &str); 4] = [
    ("Sleep Target", "7.5-8.5 hours nightly"),
    ("Daily Steps", "10,000+ steps"),
    ("Weekly Exercise", "5 sessions"),
    ("HRV Target", "Above 40ms"),
];

/// Latest reading per metric name, ordered by name.
pub fn latest_metrics(metrics: &[Metric]) -> Vec<&Metric> {
    let mut latest: BTreeMap<&str, &Metric> = BTreeMap::new();
    for metric in metrics {
        let newer = latest
            .get(metric.metric_name.as_str())
            .map_or(true, |current| metric.date > current.date);
        if newer {
            latest.insert(metric.metric_name.as_str(), metric);
        }
    }
    latest.into_values().collect()
}

/// Newest sleep readings, newest first.
pub fn sleep_entries(metrics: &[Metric]) -> Vec<&Metric> {
    let mut sleep: Vec<&Metric> = metrics
        .iter()
        .filter(|metric| metric.metric_name == SLEEP_SERIES_NAME)
        .collect();
    sleep.sort_by(|a, b| b.date.cmp(&a.date));
    sleep.truncate(SLEEP_ENTRIES);
    sleep
}

pub fn render_metrics(metrics: &[Metric], view: &ViewState, _ctx: &RenderContext) -> String {
    if metrics.is_empty() {
        return empty_state("No metrics recorded yet.");
    }
    let mut html = String::from(
        "<div class=\"space-y-6\"><div class=\"grid grid-cols-1 md:grid-cols-3 gap-4\">",
    );
    for metric in latest_metrics(metrics) {
        let id = element_id("metric", &metric.metric_name);
        html.push_str(&open_record("div", &id, "card p-4", view));
        html.push_str(&format!(
            "<div class=\"flex items-center justify-between\"><h3 class=\"text-sm font-medium\">{}</h3><span class=\"px-2 py-1 text-xs rounded-full {}\">{}</span></div><p class=\"text-2xl font-bold mt-2\">{}</p><p class=\"text-xs text-subtext0 mt-1\">Last updated: {}</p></div>",
            escape_html(&metric.metric_name),
            metric.color_class(),
            escape_html(&metric.metric_type),
            escape_html(&metric.display_value()),
            escape_html(&format_date(&metric.date))
        ));
    }
    html.push_str("</div>");

    let sleep = sleep_entries(metrics);
    if !sleep.is_empty() {
        html.push_str(
            "<div class=\"card p-6\"><h3 class=\"text-lg font-semibold mb-4\">Sleep Trends (Last 7 Days)</h3><div class=\"space-y-3\">",
        );
        for entry in &sleep {
            let color = if entry.value >= 8.0 {
                "bg-green"
            } else if entry.value >= 7.0 {
                "bg-yellow"
            } else {
                "bg-red"
            };
            html.push_str(&format!(
                "<div class=\"flex items-center justify-between py-2\"><span class=\"text-sm\">{}</span><span class=\"text-sm font-medium\">{} hours</span><div class=\"w-20\">{}</div></div>",
                escape_html(&format_weekday_date(&entry.date)),
                format_number(entry.value),
                progress_bar(entry.value / 10.0 * 100.0, color)
            ));
        }
        let average = sleep.iter().map(|entry| entry.value).sum::<f64>() / sleep.len() as f64;
        html.push_str(&format!(
            "</div><div class=\"mt-4 text-sm text-subtext0\">Average: {average:.1} hours</div></div>"
        ));
    }

    html.push_str(
        "<div class=\"card p-6\"><h3 class=\"text-lg font-semibold mb-4\">Health Goals</h3><div class=\"space-y-4\">",
    );
    for (goal, target) in HEALTH_GOALS {
        html.push_str(&format!(
            "<div class=\"flex items-center justify-between\"><span class=\"text-sm font-medium\">{goal}</span><span class=\"text-sm text-subtext0\">{target}</span></div>"
        ));
    }
    html.push_str("</div></div></div>");
    html
}
