//! Minimal markdown-to-HTML used for blog posts and long-form notes.
//!
//! Supports `#`/`##`/`###` headings, `- ` list items, `**bold**`, `*em*`
//! and `[label](url)` links. Input is HTML-escaped before any markup is added.

use crate::render::html::escape_html;
use once_cell::sync::Lazy;
use regex::Regex;

static BOLD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("valid bold regex"));
static EM_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.+?)\*").expect("valid em regex"));
static LINK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[([^\]]+)\]\((https?://[^)\s]+)\)").expect("valid link regex")
});

/// Converts markdown text to an HTML fragment.
pub fn format_markdown(text: &str) -> String {
    let mut html = String::new();
    let mut paragraph: Vec<String> = Vec::new();
    let mut list: Vec<String> = Vec::new();

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            flush_paragraph(&mut html, &mut paragraph);
            flush_list(&mut html, &mut list);
            continue;
        }

        if let Some((level, title)) = heading(trimmed) {
            flush_paragraph(&mut html, &mut paragraph);
            flush_list(&mut html, &mut list);
            let class = match level {
                1 => "text-3xl font-bold mb-4",
                2 => "text-2xl font-semibold mb-3 mt-6",
                _ => "text-xl font-medium mb-2 mt-4",
            };
            html.push_str(&format!(
                "<h{level} class=\"{class}\">{}</h{level}>\n",
                inline(title)
            ));
        } else if let Some(item) = trimmed.strip_prefix("- ") {
            flush_paragraph(&mut html, &mut paragraph);
            list.push(inline(item));
        } else {
            flush_list(&mut html, &mut list);
            paragraph.push(inline(trimmed));
        }
    }

    flush_paragraph(&mut html, &mut paragraph);
    flush_list(&mut html, &mut list);
    html
}

fn heading(line: &str) -> Option<(u8, &str)> {
    if let Some(rest) = line.strip_prefix("### ") {
        Some((3, rest))
    } else if let Some(rest) = line.strip_prefix("## ") {
        Some((2, rest))
    } else {
        line.strip_prefix("# ").map(|rest| (1, rest))
    }
}

/// Links are matched first; emphasis applies only to labels and plain text
/// so URLs never receive markup.
fn inline(text: &str) -> String {
    let escaped = escape_html(text);
    let mut out = String::with_capacity(escaped.len());
    let mut last = 0;
    for caps in LINK_RE.captures_iter(&escaped) {
        let (Some(whole), Some(label), Some(url)) = (caps.get(0), caps.get(1), caps.get(2)) else {
            continue;
        };
        out.push_str(&emphasis(&escaped[last..whole.start()]));
        out.push_str(&format!(
            "<a href=\"{}\" class=\"underline\">{}</a>",
            url.as_str(),
            emphasis(label.as_str())
        ));
        last = whole.end();
    }
    out.push_str(&emphasis(&escaped[last..]));
    out
}

fn emphasis(text: &str) -> String {
    let bold = BOLD_RE.replace_all(text, "<strong class=\"font-semibold\">$1</strong>");
    EM_RE
        .replace_all(&bold, "<em class=\"italic\">$1</em>")
        .into_owned()
}

fn flush_paragraph(html: &mut String, paragraph: &mut Vec<String>) {
    if paragraph.is_empty() {
        return;
    }
    html.push_str("<p class=\"mb-4\">");
    html.push_str(&paragraph.join(" "));
    html.push_str("</p>\n");
    paragraph.clear();
}

fn flush_list(html: &mut String, list: &mut Vec<String>) {
    if list.is_empty() {
        return;
    }
    html.push_str("<ul class=\"list-disc\">");
    for item in list.drain(..) {
        html.push_str("<li class=\"ml-4\">");
        html.push_str(&item);
        html.push_str("</li>");
    }
    html.push_str("</ul>\n");
}
