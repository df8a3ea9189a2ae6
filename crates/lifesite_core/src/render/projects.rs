use super::html::{element_id, empty_state, escape_html, tag_chip};
use super::{open_record, RenderContext};
use crate::filter::ViewState;
use crate::model::Project;
use crate::util::markdown::format_markdown;

pub fn render_projects(projects: &[Project], view: &ViewState, _ctx: &RenderContext) -> String {
    let mut visible = view.filter.apply(projects);
    visible.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()));

    if visible.is_empty() {
        return empty_state("No active projects found");
    }

    let mut html = String::from("<div class=\"space-y-4\">");
    for project in visible {
        let id = element_id("project", &project.id);
        html.push_str(&open_record("div", &id, "card p-6", view));
        html.push_str(&format!(
            "<h3 class=\"text-xl font-semibold mb-2\">{}</h3>",
            escape_html(&project.title)
        ));
        if !project.description.trim().is_empty() {
            html.push_str(&format!(
                "<p class=\"text-subtext1 mb-3\">{}</p>",
                escape_html(&project.description)
            ));
        }
        if !project.tags.is_empty() {
            html.push_str("<div class=\"flex flex-wrap gap-2 mb-3\">");
            for tag in &project.tags {
                html.push_str(&tag_chip(tag));
            }
            html.push_str("</div>");
        }
        if !project.content.trim().is_empty() {
            let open = if view.is_expanded(&project.id) || view.is_expanded(&id) {
                " open"
            } else {
                ""
            };
            html.push_str(&format!(
                "<details{open}><summary class=\"text-sm text-blue cursor-pointer\">Details</summary><div class=\"prose max-w-none mt-3\">{}</div></details>",
                format_markdown(&project.content)
            ));
        }
        html.push_str("</div>");
    }
    html.push_str("</div>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn sorted_by_title() {
        let projects = vec![
            Project {
                id: "2".to_string(),
                title: "zeta".to_string(),
                ..Project::default()
            },
            Project {
                id: "1".to_string(),
                title: "Alpha".to_string(),
                content: "# Plan".to_string(),
                ..Project::default()
            },
        ];
        let ctx = RenderContext::new(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        let html = render_projects(&projects, &ViewState::focused("project-1"), &ctx);
        assert!(html.find("Alpha").unwrap() < html.find("zeta").unwrap());
        assert!(html.contains("<details open>"));
        assert!(html.contains("hash-highlighted"));
    }
}
