use super::html::{element_id, empty_state, escape_html, progress_bar};
use super::{open_record, RenderContext};
use crate::filter::ViewState;
use crate::model::community::sort_communities;
use crate::model::Community;

pub fn render_communities(
    communities: &[Community],
    view: &ViewState,
    _ctx: &RenderContext,
) -> String {
    if communities.is_empty() {
        return empty_state("No communities yet.");
    }
    let mut ordered: Vec<&Community> = communities.iter().collect();
    sort_communities(&mut ordered);

    let mut html = String::from("<div class=\"grid grid-cols-1 md:grid-cols-2 gap-4\">");
    for community in ordered {
        let id = element_id("community", &community.id);
        html.push_str(&open_record("div", &id, "card p-6", view));
        let score = community
            .personal_affiliation
            .map(|score| format!("{score}/10"))
            .unwrap_or_else(|| "Not rated".to_string());
        html.push_str(&format!(
            "<div class=\"flex justify-between items-center\"><h3 class=\"text-lg font-semibold\">{}</h3><span class=\"text-sm text-subtext1\">{}</span></div>",
            escape_html(&community.community_name),
            escape_html(&score)
        ));
        if let Some(percent) = community.affiliation_percent() {
            html.push_str(&progress_bar(percent, "bg-blue"));
        }
        if let Some(level) = community
            .contribution_level
            .as_deref()
            .filter(|level| !level.trim().is_empty())
        {
            html.push_str(&format!(
                "<div class=\"flex justify-between text-sm mt-2\"><span>Contribution Level</span><span class=\"text-green font-medium\">{}</span></div>",
                escape_html(level)
            ));
        }
        if !community.description.trim().is_empty() {
            html.push_str(&format!(
                "<p class=\"text-subtext1 mt-3\">{}</p>",
                escape_html(&community.description)
            ));
        }
        for (label, entries) in community.linked_lists() {
            html.push_str(&format!(
                "<div class=\"mt-3\"><h4 class=\"text-sm font-medium\">{}</h4><ul class=\"text-sm text-subtext1\">",
                escape_html(label)
            ));
            for entry in entries {
                html.push_str(&format!("<li>{}</li>", escape_html(&entry)));
            }
            html.push_str("</ul></div>");
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

    fn community(id: &str, name: &str, score: Option<f64>) -> Community {
        Community {
            id: id.to_string(),
            community_name: name.to_string(),
            personal_affiliation: score,
            ..Community::default()
        }
    }

    #[test]
    fn rated_first_by_score_then_name() {
        let communities = vec![
            community("1", "Unrated", None),
            community("2", "Beta", Some(7.0)),
            community("3", "Alpha", Some(7.0)),
            community("4", "Top", Some(9.0)),
        ];
        let ctx = RenderContext::new(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        let html = render_communities(&communities, &ViewState::default(), &ctx);
        let positions: Vec<usize> = ["Top", "Alpha", "Beta", "Unrated"]
            .iter()
            .map(|name| html.find(name).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn malformed_lists_are_ignored() {
        let mut item = community("1", "Rustaceans", Some(5.0));
        item.related_notes = Some("[broken".to_string());
        item.projects = Some(r#"["lifesite"]"#.to_string());
        let ctx = RenderContext::new(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        let html = render_communities(&[item], &ViewState::default(), &ctx);
        assert!(html.contains("<li>lifesite</li>"));
        assert!(!html.contains("Related notes"));
    }
}
