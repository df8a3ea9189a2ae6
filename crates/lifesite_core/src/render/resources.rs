use super::html::{element_id, empty_state, escape_html};
use super::{open_record, RenderContext};
use crate::filter::ViewState;
use crate::model::resource::non_blank;
use crate::model::{Dance, LineDancing, Milestone, Standards};
use crate::util::dates::format_long_date;
use crate::util::markdown::format_markdown;
use crate::util::text::{is_valid_url, youtube_embed_url};

/// Which milestone log a timeline renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MilestoneKind {
    Victory,
    Failure,
}

impl MilestoneKind {
    fn id_prefix(self) -> &'static str {
        match self {
            Self::Victory => "victory",
            Self::Failure => "failure",
        }
    }

    fn empty_message(self) -> &'static str {
        match self {
            Self::Victory => "No victories recorded yet.",
            Self::Failure => "No failures recorded yet.",
        }
    }

    fn dot_class(self) -> &'static str {
        match self {
            Self::Victory => "bg-accent-2",
            Self::Failure => "bg-accent",
        }
    }
}

/// Vertical timeline of victories or failures, in snapshot order.
pub fn render_milestones(
    entries: &[Milestone],
    kind: MilestoneKind,
    view: &ViewState,
    _ctx: &RenderContext,
) -> String {
    let visible = view.filter.apply(entries);
    let mut html = String::from("<div class=\"frosted-card\">");
    if visible.is_empty() {
        html.push_str(&empty_state(kind.empty_message()));
        html.push_str("</div>");
        return html;
    }

    html.push_str("<ul class=\"timeline space-y-6\">");
    for entry in &visible {
        let id = element_id(kind.id_prefix(), &entry.id);
        html.push_str(&open_record("li", &id, "flex items-start gap-6", view));
        html.push_str(&format!(
            "<span class=\"timeline-dot {}\" aria-hidden=\"true\"></span>\
             <div class=\"flex-1 pb-6\"><span class=\"font-semibold text-sm\">{}</span>\
             <p class=\"leading-relaxed\">{}</p></div></li>",
            kind.dot_class(),
            escape_html(entry.display_date()),
            escape_html(&entry.description)
        ));
    }
    html.push_str("</ul></div>");

    if let Some(first) = entries.first() {
        html.push_str(&last_updated(&first.last_edited_date));
    }
    html
}

pub fn render_standards(standards: &Standards, _view: &ViewState, _ctx: &RenderContext) -> String {
    if standards.content.trim().is_empty() {
        return empty_state("No standards written yet.");
    }
    let mut html = format!(
        "<div class=\"frosted-card\"><div id=\"standards\" class=\"prose prose-lg max-w-none\">{}</div></div>",
        format_markdown(&standards.content)
    );
    html.push_str(&last_updated(&standards.last_edited_date));
    html
}

/// Dances I know and dances to learn. Dances with media expand to show
/// their tutorial and video.
pub fn render_line_dancing(data: &LineDancing, view: &ViewState, _ctx: &RenderContext) -> String {
    let mut html = String::from("<div class=\"space-y-12\">");
    html.push_str(&dance_list(&data.dances_i_know, "Dances I Know", "known", view));
    html.push_str(&dance_list(
        &data.dances_to_learn,
        "Dances I Want to Learn",
        "to-learn",
        view,
    ));
    html.push_str("</div>");
    html
}

fn dance_list(dances: &[Dance], title: &str, prefix: &str, view: &ViewState) -> String {
    let mut html = format!(
        "<section class=\"space-y-4\"><h2 class=\"text-2xl font-bold text-accent mb-4\">{}</h2>",
        escape_html(title)
    );
    if dances.is_empty() {
        html.push_str("<p class=\"text-muted\">No dances yet.</p></section>");
        return html;
    }

    html.push_str("<div class=\"space-y-2\">");
    for (index, dance) in dances.iter().enumerate() {
        // Names repeat across lists and occasionally within one.
        let id = element_id(&format!("dance-{prefix}-{index}"), &dance.name);
        let header = dance_header(dance);
        if !dance.has_media() {
            html.push_str(&open_record("div", &id, "frosted-card dance", view));
            html.push_str(&format!("<div class=\"px-6 py-4\">{header}</div></div>"));
            continue;
        }

        let open = if view.is_expanded(&id) { " open" } else { "" };
        let focused = if view.is_focused(&id) {
            " hash-highlighted"
        } else {
            ""
        };
        html.push_str(&format!(
            "<details id=\"{}\" class=\"frosted-card dance{focused}\"{open}>\
             <summary class=\"px-6 py-4 cursor-pointer\">{header}</summary>\
             <div class=\"px-6 pb-6 space-y-4\">",
            escape_html(&id)
        ));
        if let Some(link) = non_blank(dance.tutorial_link.as_deref()) {
            html.push_str(
                "<div class=\"pt-4\"><h4 class=\"text-sm font-medium text-accent mb-2\">Tutorial</h4>",
            );
            html.push_str(&external_link(link));
            if let Some(embed) = youtube_embed_url(link) {
                html.push_str(&video_embed(&embed));
            }
            html.push_str("</div>");
        }
        if let Some(video) = non_blank(dance.my_video.as_deref()) {
            html.push_str("<div><h4 class=\"text-sm font-medium text-accent mb-2\">My Video</h4>");
            match youtube_embed_url(video) {
                Some(embed) => html.push_str(&video_embed(&embed)),
                None => html.push_str(&external_link(video)),
            }
            html.push_str("</div>");
        }
        if let Some(notes) = non_blank(dance.notes.as_deref()) {
            html.push_str(&format!(
                "<p class=\"text-sm text-subtext1\">{}</p>",
                escape_html(notes)
            ));
        }
        html.push_str("</div></details>");
    }
    html.push_str("</div></section>");
    html
}

fn dance_header(dance: &Dance) -> String {
    let artist = non_blank(dance.artist.as_deref())
        .map(|artist| {
            format!(
                " <span class=\"text-sm text-muted\">by {}</span>",
                escape_html(artist)
            )
        })
        .unwrap_or_default();
    format!(
        "<h3 class=\"text-lg font-semibold inline\">{}</h3>{artist}",
        escape_html(&dance.name)
    )
}

fn external_link(link: &str) -> String {
    if !is_valid_url(link) {
        return format!("<span class=\"text-sm break-all\">{}</span>", escape_html(link));
    }
    format!(
        "<a href=\"{0}\" target=\"_blank\" rel=\"noopener noreferrer\" class=\"underline break-all text-sm\">{0}</a>",
        escape_html(link.trim())
    )
}

fn video_embed(src: &str) -> String {
    format!(
        "<div class=\"mt-3 aspect-video rounded-lg overflow-hidden\"><iframe src=\"{}\" class=\"w-full h-full\" \
         allow=\"accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture\" \
         allowfullscreen></iframe></div>",
        escape_html(src)
    )
}

fn last_updated(raw: &str) -> String {
    if raw.trim().is_empty() {
        return String::new();
    }
    format!(
        "<p class=\"mt-6 text-sm text-muted text-center\">Last updated: {}</p>",
        escape_html(&format_long_date(raw))
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::ExpansionState;
    use chrono::NaiveDate;

    fn ctx() -> RenderContext {
        RenderContext::new(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
    }

    fn milestone(id: &str, display: &str, description: &str) -> Milestone {
        Milestone {
            id: id.to_string(),
            date_display: display.to_string(),
            description: description.to_string(),
            last_edited_date: "2025-02-03T10:00:00".to_string(),
            ..Milestone::default()
        }
    }

    #[test]
    fn milestones_keep_snapshot_order_and_footer() {
        let entries = vec![
            milestone("2", "Summer 2024", "Shipped v1"),
            milestone("1", "Spring 2023", "First talk"),
        ];
        let view = ViewState::default();
        let html = render_milestones(&entries, MilestoneKind::Victory, &view, &ctx());
        let shipped = html.find("victory-2").unwrap();
        let talk = html.find("victory-1").unwrap();
        assert!(shipped < talk);
        assert!(html.contains("Summer 2024"));
        assert!(html.contains("Last updated: February 3, 2025"));
    }

    #[test]
    fn empty_failures_show_message() {
        let html = render_milestones(&[], MilestoneKind::Failure, &ViewState::default(), &ctx());
        assert!(html.contains("No failures recorded yet."));
        assert!(!html.contains("Last updated"));
    }

    #[test]
    fn dances_with_media_expand_and_embed() {
        let data = LineDancing {
            dances_i_know: vec![
                Dance {
                    name: "Copperhead Road".to_string(),
                    artist: Some("Steve Earle".to_string()),
                    tutorial_link: Some("https://www.youtube.com/watch?v=abc123".to_string()),
                    ..Dance::default()
                },
                Dance {
                    name: "Cowboy Cha Cha".to_string(),
                    ..Dance::default()
                },
            ],
            dances_to_learn: Vec::new(),
        };
        let mut expanded = ExpansionState::new();
        expanded.open("dance-known-0-copperhead-road");
        let view = ViewState {
            expanded,
            ..ViewState::default()
        };
        let html = render_line_dancing(&data, &view, &ctx());
        assert!(html.contains(
            "<details id=\"dance-known-0-copperhead-road\" class=\"frosted-card dance\" open>"
        ));
        assert!(html.contains("https://www.youtube.com/embed/abc123"));
        assert!(html.contains("by Steve Earle"));
        assert!(html.contains("<div id=\"dance-known-1-cowboy-cha-cha\""));
        assert!(html.contains("No dances yet."));
    }

    #[test]
    fn blank_standards_render_empty_state() {
        let html = render_standards(&Standards::default(), &ViewState::default(), &ctx());
        assert!(html.contains("No standards written yet."));
    }
}
