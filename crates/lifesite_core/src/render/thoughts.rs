use super::html::{empty_state, escape_html, stat_tile, tag_chip};
use super::{open_record, RenderContext};
use crate::filter::{sort_by_timestamp_desc, tag_counts, ViewState};
use crate::model::thought::PUBLIC_TAG;
use crate::model::Thought;
use crate::page::routes::Route;
use crate::util::dates::format_timestamp;
use crate::util::slug::capture_slug;
use crate::util::text::{format_source_display, is_valid_url};
use std::collections::BTreeMap;

const EMPTY_MESSAGE: &str =
    "No thoughts found. Add some captured thoughts to the raw_capture directory to get started!";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThoughtStats {
    pub total: usize,
    pub modalities: BTreeMap<String, usize>,
    pub sources: BTreeMap<String, usize>,
}

pub fn thought_stats(thoughts: &[Thought]) -> ThoughtStats {
    let mut stats = ThoughtStats {
        total: thoughts.len(),
        ..ThoughtStats::default()
    };
    for thought in thoughts {
        for modality in thought.modality_list() {
            *stats.modalities.entry(modality).or_insert(0) += 1;
        }
        for source in thought.source_list() {
            *stats.sources.entry(source).or_insert(0) += 1;
        }
    }
    stats
}

pub fn render_thoughts(thoughts: &[Thought], view: &ViewState, _ctx: &RenderContext) -> String {
    let mut visible = view.filter.apply(thoughts);
    sort_by_timestamp_desc(&mut visible);

    let stats = thought_stats(thoughts);
    let mut html = String::from("<div class=\"space-y-6\">");

    html.push_str("<div class=\"grid grid-cols-1 md:grid-cols-3 gap-4\">");
    html.push_str(&stat_tile("Thoughts", &stats.total.to_string()));
    html.push_str(&stat_tile("Modalities", &stats.modalities.len().to_string()));
    html.push_str(&stat_tile("Sources", &stats.sources.len().to_string()));
    html.push_str("</div>");

    html.push_str(&tag_bar(thoughts, view));

    if visible.is_empty() {
        html.push_str(&empty_state(EMPTY_MESSAGE));
    } else {
        html.push_str("<div class=\"space-y-4\">");
        for thought in visible {
            html.push_str(&thought_card(thought, view));
        }
        html.push_str("</div>");
    }

    html.push_str("</div>");
    html
}

/// Full page body for one thought.
pub fn render_thought_detail(thought: &Thought, _ctx: &RenderContext) -> String {
    let view = ViewState::focused(thought_element_id(thought));
    format!(
        "<div class=\"space-y-6\"><p><a class=\"text-blue underline\" href=\"{}\">All thoughts</a></p>{}</div>",
        Route::Thoughts.href(),
        thought_card(thought, &view)
    )
}

fn thought_element_id(thought: &Thought) -> String {
    super::html::element_id("thought", thought.anchor_key())
}

fn tag_bar(thoughts: &[Thought], view: &ViewState) -> String {
    let counts = tag_counts(thoughts);
    let mut chips = String::new();
    for (tag, count) in counts.iter().filter(|(tag, _)| tag != PUBLIC_TAG) {
        let selected = if view.filter.is_tag_selected(tag) {
            " bg-blue text-base"
        } else {
            " bg-surface1 text-subtext1"
        };
        chips.push_str(&format!(
            "<a class=\"px-2 py-1 text-xs rounded{selected}\" href=\"{}\">#{} <span class=\"text-subtext0\">{count}</span></a>",
            Route::ThoughtTag(tag.clone()).href(),
            escape_html(tag)
        ));
    }
    if chips.is_empty() {
        return String::new();
    }
    format!("<nav class=\"flex flex-wrap gap-2\" aria-label=\"Tags\">{chips}</nav>")
}

fn thought_card(thought: &Thought, view: &ViewState) -> String {
    let id = thought_element_id(thought);
    let mut html = open_record("article", &id, "card p-6", view);

    html.push_str("<div class=\"mb-4 flex items-center justify-between text-sm text-subtext0\">");
    html.push_str(&format!(
        "<a href=\"{}\">{}</a>",
        Route::Thought(capture_slug(thought.anchor_key())).href(),
        escape_html(&format_timestamp(&thought.timestamp))
    ));
    if let Some(location) = thought.location() {
        html.push_str(&format!(
            "<span class=\"location\">📍 {}</span>",
            escape_html(&location)
        ));
    }
    html.push_str("</div>");

    let mut sources = thought.source_list();
    if !sources.is_empty() {
        sources.sort();
        let links: Vec<String> = sources.iter().map(String::as_str).map(source_link).collect();
        html.push_str(&format!(
            "<div class=\"text-sm text-subtext0\">Sources: {}</div>",
            links.join(", ")
        ));
    }

    html.push_str(&format!(
        "<div class=\"prose max-w-none\"><p class=\"text-text leading-relaxed\">{}</p></div>",
        escape_html(&thought.content)
    ));

    let tags = thought.visible_tags();
    if !tags.is_empty() {
        html.push_str("<div class=\"mt-4 pt-4 border-t border-surface1 flex flex-wrap gap-2\">");
        for tag in &tags {
            html.push_str(&tag_chip(tag));
        }
        html.push_str("</div>");
    }

    html.push_str("</article>");
    html
}

fn source_link(source: &str) -> String {
    if is_valid_url(source) {
        format!(
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" class=\"text-blue underline\">{}</a>",
            escape_html(source),
            escape_html(&format_source_display(source))
        )
    } else {
        escape_html(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::RecordFilter;
    use chrono::NaiveDate;

    fn ctx() -> RenderContext {
        RenderContext::new(NaiveDate::from_ymd_opt(2025, 8, 6).unwrap())
    }

    fn thought(id: &str, ts: &str, tags: &str) -> Thought {
        Thought {
            id: id.to_string(),
            capture_id: format!("cap-{id}"),
            timestamp: ts.to_string(),
            content: format!("content <{id}>"),
            tags: Some(tags.to_string()),
            ..Thought::default()
        }
    }

    #[test]
    fn newest_first_and_escaped() {
        let thoughts = vec![
            thought("1", "2025-01-01T00:00:00", r#"["a"]"#),
            thought("2", "2025-02-01T00:00:00", r#"["b","public"]"#),
        ];
        let html = render_thoughts(&thoughts, &ViewState::default(), &ctx());
        let first = html.find("thought-cap-2").unwrap();
        let second = html.find("thought-cap-1").unwrap();
        assert!(first < second);
        assert!(html.contains("content &lt;2&gt;"));
        assert!(!html.contains("#public"));
    }

    #[test]
    fn filtered_out_everything_shows_empty_state() {
        let thoughts = vec![thought("1", "2025-01-01", r#"["a"]"#)];
        let view = ViewState::with_filter(RecordFilter::new().with_tag("zzz"));
        let html = render_thoughts(&thoughts, &view, &ctx());
        assert!(html.contains("No thoughts found"));
    }

    #[test]
    fn stats_count_modalities_and_sources() {
        let mut t = thought("1", "2025-01-01", "[]");
        t.modalities = Some(r#"["text","voice"]"#.to_string());
        t.sources = Some(r#"["https://example.com"]"#.to_string());
        let stats = thought_stats(&[t.clone(), t]);
        assert_eq!(stats.total, 2);
        assert_eq!(stats.modalities.get("voice"), Some(&2));
        assert_eq!(stats.sources.len(), 1);
    }
}
