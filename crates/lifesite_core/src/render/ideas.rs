use super::html::{element_id, empty_state, escape_html};
use super::{open_record, RenderContext};
use crate::filter::ViewState;
use crate::model::Idea;

pub fn render_ideas(ideas: &[Idea], view: &ViewState, _ctx: &RenderContext) -> String {
    let visible = view.filter.apply(ideas);

    let mut html = String::from("<div class=\"space-y-4\">");
    if !view.filter.query.trim().is_empty() {
        html.push_str(&format!(
            "<p class=\"text-sm text-subtext1\">Search: <strong>{}</strong></p>",
            escape_html(view.filter.query.trim())
        ));
    }

    if ideas.is_empty() {
        html.push_str(&empty_state("No project ideas yet."));
    } else if visible.is_empty() {
        html.push_str(&empty_state(&format!(
            "No ideas found matching \"{}\"",
            view.filter.query.trim()
        )));
    } else {
        html.push_str("<div class=\"space-y-3\">");
        for idea in visible {
            let id = element_id("idea", &idea.id);
            html.push_str(&open_record("div", &id, "card p-4 flex items-start", view));
            html.push_str(&format!(
                "<span class=\"idea-number\">{}</span><div class=\"flex-1\"><h3 class=\"text-lg font-semibold\">{}</h3><p class=\"text-subtext1\">{}</p></div></div>",
                escape_html(&idea.id),
                escape_html(&idea.title),
                escape_html(&idea.description)
            ));
        }
        html.push_str("</div>");
    }
    html.push_str("</div>");
    html
}
