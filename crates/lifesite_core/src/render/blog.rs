use super::html::{element_id, empty_state, escape_html, stat_tile, tag_chip};
use super::{open_record, RenderContext};
use crate::filter::{sort_by_timestamp_desc, ViewState};
use crate::model::BlogPost;
use crate::page::routes::Route;
use crate::util::dates::format_date;
use crate::util::markdown::format_markdown;
use crate::util::status::status_color;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlogStats {
    pub total: usize,
    pub drafts: usize,
    pub published: usize,
}

pub fn blog_stats(posts: &[BlogPost]) -> BlogStats {
    let drafts = posts.iter().filter(|post| post.is_draft()).count();
    BlogStats {
        total: posts.len(),
        drafts,
        published: posts.len() - drafts,
    }
}

pub fn render_blog(posts: &[BlogPost], view: &ViewState, _ctx: &RenderContext) -> String {
    let stats = blog_stats(posts);
    let mut html = String::from("<div class=\"space-y-6\">");
    html.push_str("<div class=\"grid grid-cols-3 gap-4\">");
    html.push_str(&stat_tile("Total Posts", &stats.total.to_string()));
    html.push_str(&stat_tile("Published", &stats.published.to_string()));
    html.push_str(&stat_tile("Drafts", &stats.drafts.to_string()));
    html.push_str("</div>");

    let mut visible = view.filter.apply(posts);
    sort_by_timestamp_desc(&mut visible);

    if visible.is_empty() {
        html.push_str(&empty_state("No blog posts yet."));
    }
    for post in visible {
        let metadata = post.metadata();
        let id = element_id("post", &post.id);
        html.push_str(&open_record("article", &id, "card p-6", view));
        html.push_str(&format!(
            "<div class=\"flex justify-between items-start\"><h3 class=\"text-xl font-semibold\"><a href=\"{}\">{}</a></h3>",
            Route::BlogPost(post.id.clone()).href(),
            escape_html(&post.title)
        ));
        if let Some(status) = metadata.status.as_deref() {
            html.push_str(&format!(
                "<span class=\"px-2 py-1 text-xs rounded-full {}\">{}</span>",
                status_color(Some(status)),
                escape_html(status)
            ));
        }
        html.push_str("</div>");
        html.push_str(&format!(
            "<p class=\"text-sm text-subtext0\">Updated {}</p>",
            escape_html(&format_date(&post.last_edited_date))
        ));
        if let Some(excerpt) = metadata.excerpt.as_deref().filter(|e| !e.trim().is_empty()) {
            html.push_str(&format!(
                "<p class=\"italic mt-2\">{}</p>",
                escape_html(excerpt)
            ));
        }
        if !metadata.tags.is_empty() {
            html.push_str("<div class=\"flex flex-wrap gap-2 mt-2\">");
            for tag in &metadata.tags {
                html.push_str(&tag_chip(tag));
            }
            html.push_str("</div>");
        }
        html.push_str("</article>");
    }
    html.push_str("</div>");
    html
}

/// Body of a single post page.
pub fn render_blog_post(post: &BlogPost, _ctx: &RenderContext) -> String {
    let mut html = format!(
        "<article id=\"{}\" class=\"prose prose-lg max-w-none\"><p class=\"text-sm text-subtext0\">",
        escape_html(&element_id("post", &post.id))
    );
    if !post.created_date.trim().is_empty() {
        html.push_str(&format!(
            "Published {}",
            escape_html(&format_date(&post.created_date))
        ));
    }
    if !post.last_edited_date.trim().is_empty() && post.last_edited_date != post.created_date {
        html.push_str(&format!(
            " · Updated {}",
            escape_html(&format_date(&post.last_edited_date))
        ));
    }
    html.push_str("</p>");
    html.push_str(&format_markdown(&post.content));
    html.push_str(&format!(
        "<p class=\"mt-8\"><a class=\"text-blue underline\" href=\"{}\">All posts</a></p></article>",
        Route::Blog.href()
    ));
    html
}
