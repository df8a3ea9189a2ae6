use super::html::{element_id, empty_state, escape_html};
use super::{open_record, RenderContext};
use crate::filter::ViewState;
use crate::model::BucketList;
use crate::util::dates::format_date;
use crate::util::markdown::format_markdown;
use crate::util::text::format_url_display;

const MEDIA_LABEL_CHARS: usize = 48;
const BADGE_BASE: &str = "px-2.5 py-1 text-xs font-semibold rounded-full capitalize";

pub fn render_bucket_list(list: &BucketList, view: &ViewState, _ctx: &RenderContext) -> String {
    let mut html = String::from("<div class=\"space-y-6\">");
    if !list.intro.is_empty() {
        html.push_str(&format!(
            "<div class=\"prose max-w-none\">{}</div>",
            format_markdown(&list.intro)
        ));
    }

    let visible = view.filter.apply(&list.items);
    if visible.is_empty() {
        html.push_str(&empty_state("Nothing on the bucket list yet."));
    }
    for item in visible {
        let id = element_id("bucket", &item.description);
        html.push_str(&open_record("div", &id, "card p-6", view));
        html.push_str(&format!(
            "<div class=\"flex justify-between items-center mb-3\"><span class=\"text-sm font-medium capitalize\">{} {}</span><span class=\"{BADGE_BASE} {}\">{}</span></div>",
            type_icon(&item.kind),
            escape_html(&item.kind),
            status_badge_class(&item.status),
            escape_html(&item.status)
        ));
        html.push_str(&format!(
            "<h3 class=\"text-xl font-bold mb-3\">{}</h3>",
            escape_html(&item.description)
        ));
        if !item.motivation.is_empty() {
            html.push_str(&format!(
                "<blockquote class=\"border-l-4 pl-4 py-2 my-4\"><p class=\"italic\">{}</p></blockquote>",
                escape_html(&item.motivation)
            ));
        }
        if item.is_completed() && !item.completed_on.is_empty() {
            html.push_str(&format!(
                "<p class=\"text-sm font-semibold\">Completed on: {}</p>",
                escape_html(&format_date(&item.completed_on))
            ));
        }
        if !item.media.is_empty() {
            html.push_str("<ul class=\"list-disc list-inside mt-4\">");
            for link in &item.media {
                html.push_str(&format!(
                    "<li><a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a></li>",
                    escape_html(link),
                    escape_html(&format_url_display(link, MEDIA_LABEL_CHARS))
                ));
            }
            html.push_str("</ul>");
        }
        html.push_str("</div>");
    }
    html.push_str("</div>");
    html
}

fn type_icon(kind: &str) -> &'static str {
    if kind.trim().eq_ignore_ascii_case("achievement") {
        "<span class=\"icon icon-achievement\" aria-hidden=\"true\">⚡</span>"
    } else {
        "<span class=\"icon icon-experience\" aria-hidden=\"true\">👤</span>"
    }
}

fn status_badge_class(status: &str) -> &'static str {
    match status.trim().to_lowercase().as_str() {
        "completed" => "text-primary-dark bg-primary/20",
        "in progress" => "text-blue-800 bg-blue-100",
        "planned" => "text-yellow-800 bg-yellow-100",
        "don't want it anymore" => "text-red-800 bg-red-100",
        _ => "text-gray-800 bg-gray-100",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BucketListItem;
    use chrono::NaiveDate;

    #[test]
    fn renders_badges_and_media() {
        let list = BucketList {
            intro: "Things to do.".to_string(),
            items: vec![BucketListItem {
                description: "See the aurora".to_string(),
                status: "planned".to_string(),
                kind: "experience".to_string(),
                media: vec!["https://example.com/a?b=1&c=2".to_string()],
                ..BucketListItem::default()
            }],
        };
        let ctx = RenderContext::new(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        let html = render_bucket_list(&list, &ViewState::default(), &ctx);
        assert!(html.contains("id=\"bucket-see-the-aurora\""));
        assert!(html.contains("text-yellow-800 bg-yellow-100"));
        assert!(html.contains("b=1&amp;c=2"));
        assert!(html.contains("<p class=\"mb-4\">Things to do.</p>"));
    }
}
