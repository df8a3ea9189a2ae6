use super::html::{element_id, empty_state, escape_html, tag_chip};
use super::{open_record, RenderContext};
use crate::filter::{sort_by_timestamp_desc, ViewState};
use crate::model::Event;
use crate::util::dates::format_long_date;
use crate::util::markdown::format_markdown;
use std::collections::BTreeSet;

/// Distinct non-blank event types, sorted.
pub fn event_types(events: &[Event]) -> Vec<String> {
    events
        .iter()
        .map(|event| event.event_type.trim())
        .filter(|kind| !kind.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub fn render_events(events: &[Event], view: &ViewState, _ctx: &RenderContext) -> String {
    if events.is_empty() {
        return empty_state("No travel events found.");
    }

    let mut visible = view.filter.apply(events);
    sort_by_timestamp_desc(&mut visible);

    let mut html = String::from("<div class=\"space-y-6\">");
    html.push_str("<div class=\"flex flex-wrap gap-2\" aria-label=\"Event types\">");
    let selected = view.filter.category.as_deref().unwrap_or("all");
    for kind in std::iter::once("all".to_string()).chain(event_types(events)) {
        let active = if kind.eq_ignore_ascii_case(selected) {
            " bg-blue text-base"
        } else {
            " bg-surface1 text-text"
        };
        html.push_str(&format!(
            "<span class=\"px-3 py-1 rounded-full text-sm{active}\" data-event-type=\"{0}\">{0}</span>",
            escape_html(&kind)
        ));
    }
    html.push_str("</div>");

    html.push_str(&format!(
        "<p class=\"text-sm text-subtext1\">Showing {} of {} events</p>",
        visible.len(),
        events.len()
    ));

    if visible.is_empty() {
        html.push_str(&empty_state("No events match the current filters."));
    }
    for event in visible {
        let id = element_id("event", &event.id);
        html.push_str(&open_record("article", &id, "card p-6", view));
        html.push_str(&format!(
            "<div class=\"flex justify-between items-start\"><h3 class=\"text-xl font-semibold\">{}</h3><span class=\"px-2 py-1 text-xs rounded-full {}\">{}</span></div>",
            escape_html(&event.title),
            event_type_color(&event.event_type),
            escape_html(&event.event_type)
        ));
        html.push_str(&format!(
            "<p class=\"text-sm text-subtext1\">{} · {}</p>",
            escape_html(&date_range(&event.start_date, &event.end_date)),
            escape_html(&event.location)
        ));
        let tags = event.tag_list();
        if !tags.is_empty() {
            html.push_str("<div class=\"flex flex-wrap gap-2 mt-2\">");
            for tag in &tags {
                html.push_str(&tag_chip(tag));
            }
            html.push_str("</div>");
        }
        if !event.content.trim().is_empty() {
            html.push_str(&format!(
                "<div class=\"prose max-w-none mt-3\">{}</div>",
                format_markdown(&event.content)
            ));
        }
        html.push_str("</article>");
    }
    html.push_str("</div>");
    html
}

fn date_range(start: &str, end: &str) -> String {
    if start == end || end.trim().is_empty() {
        format_long_date(start)
    } else {
        format!("{} - {}", format_long_date(start), format_long_date(end))
    }
}

fn event_type_color(kind: &str) -> &'static str {
    match kind.trim().to_lowercase().as_str() {
        "conference" => "bg-blue text-white",
        "business" => "bg-green text-white",
        "personal" => "bg-purple text-white",
        "vacation" => "bg-yellow text-black",
        "work" => "bg-red text-white",
        "education" => "bg-teal text-white",
        _ => "bg-surface1 text-text",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::RecordFilter;
    use chrono::NaiveDate;

    fn event(id: &str, kind: &str, start: &str) -> Event {
        Event {
            id: id.to_string(),
            title: format!("Event {id}"),
            event_type: kind.to_string(),
            start_date: start.to_string(),
            end_date: start.to_string(),
            ..Event::default()
        }
    }

    #[test]
    fn type_filter_and_order() {
        let events = vec![
            event("1", "conference", "2024-03-01"),
            event("2", "vacation", "2024-06-01"),
            event("3", "conference", "2025-01-10"),
        ];
        let view = ViewState::with_filter(RecordFilter::new().with_category("Conference"));
        let ctx = RenderContext::new(NaiveDate::from_ymd_opt(2025, 8, 1).unwrap());
        let html = render_events(&events, &view, &ctx);
        assert!(html.contains("Showing 2 of 3 events"));
        assert!(html.find("id=\"event-3\"").unwrap() < html.find("id=\"event-1\"").unwrap());
        assert!(!html.contains("id=\"event-2\""));
        assert_eq!(event_types(&events), vec!["conference", "vacation"]);
    }

    #[test]
    fn single_day_range_is_one_date() {
        assert_eq!(date_range("2024-03-01", "2024-03-01"), "March 1, 2024");
        assert_eq!(
            date_range("2024-03-01", "2024-03-03"),
            "March 1, 2024 - March 3, 2024"
        );
    }
}
