use super::html::{element_id, empty_state, escape_html};
use super::{open_record, plural, RenderContext};
use crate::filter::ViewState;
use crate::model::{Book, ExportMetadata};
use crate::util::dates::format_date;
use crate::util::markdown::format_markdown;
use crate::util::text::star_rating;

const PREVIEW_LINES: usize = 3;
const PREVIEW_CHARS: usize = 300;

/// Entries of one book directory.
#[derive(Debug, Clone, PartialEq)]
pub struct BookGroup<'a> {
    pub directory: &'a str,
    /// The `book-` entry, or the first entry when none carries the prefix.
    pub main: &'a Book,
    pub notes: Vec<&'a Book>,
}

impl<'a> BookGroup<'a> {
    pub fn public_notes(&self) -> impl Iterator<Item = &'a Book> + '_ {
        self.notes.iter().copied().filter(|note| note.public)
    }
}

/// Groups by directory in order of first appearance.
pub fn book_groups(books: &[Book]) -> Vec<BookGroup<'_>> {
    let mut directories: Vec<(&str, Vec<&Book>)> = Vec::new();
    for book in books {
        let directory = book.directory();
        match directories.iter_mut().find(|(dir, _)| *dir == directory) {
            Some((_, entries)) => entries.push(book),
            None => directories.push((directory, vec![book])),
        }
    }

    directories
        .into_iter()
        .filter_map(|(directory, entries)| {
            let main = entries
                .iter()
                .copied()
                .find(|book| book.is_main_entry())
                .or_else(|| entries.first().copied())?;
            let notes = entries.into_iter().filter(|book| !book.is_main_entry()).collect();
            Some(BookGroup {
                directory,
                main,
                notes,
            })
        })
        .collect()
}

pub fn render_books(
    books: &[Book],
    export: &ExportMetadata,
    view: &ViewState,
    _ctx: &RenderContext,
) -> String {
    let mut html = String::from("<div class=\"space-y-6\">");
    if !export.last_updated.trim().is_empty() {
        html.push_str(&format!(
            "<div class=\"text-xs text-subtext0\">Last updated: {}</div>",
            escape_html(&format_date(&export.last_updated))
        ));
    }

    let groups = book_groups(books);
    if groups.is_empty() {
        html.push_str(&empty_state("No books yet."));
    }
    for group in &groups {
        html.push_str(&render_group(group, view));
    }
    html.push_str("</div>");
    html
}

fn render_group(group: &BookGroup<'_>, view: &ViewState) -> String {
    let metadata = &group.main.metadata;
    let id = element_id("book", group.directory);
    let mut html = open_record("div", &id, "card p-6", view);

    html.push_str("<div class=\"flex items-start justify-between mb-4\"><div>");
    html.push_str(&format!(
        "<h3 class=\"text-lg font-semibold\">{}</h3>",
        escape_html(group.main.display_title())
    ));
    if let Some(author) = metadata.author.as_deref().filter(|a| !a.trim().is_empty()) {
        html.push_str(&format!(
            "<p class=\"text-sm text-subtext1 mt-1\">by {}</p>",
            escape_html(author)
        ));
    }
    html.push_str("</div><div class=\"flex items-center space-x-3\">");
    if metadata.rating.is_some_and(|rating| rating > 0.0) {
        let stars = star_rating(metadata.rating);
        html.push_str(&format!(
            "<span class=\"stars text-yellow\" aria-label=\"{} out of 5\">{}<span class=\"text-surface2\">{}</span></span>",
            stars.filled,
            "★".repeat(usize::from(stars.filled)),
            "★".repeat(usize::from(stars.empty))
        ));
    }
    if let Some(status) = metadata.status.as_deref().filter(|s| !s.trim().is_empty()) {
        html.push_str(&format!(
            "<span class=\"px-2 py-1 text-xs rounded-full {}\">{}</span>",
            book_status_color(status),
            escape_html(status)
        ));
    }
    html.push_str("</div></div>");

    let public: Vec<&Book> = group.public_notes().collect();
    let mut counts = plural(group.notes.len(), "note");
    if !public.is_empty() {
        counts.push_str(&format!(" • {} public", public.len()));
    }
    html.push_str(&format!(
        "<p class=\"text-sm text-subtext1 mb-4\">{}</p>",
        escape_html(&counts)
    ));

    for note in public {
        html.push_str(&render_note(note, view));
    }
    html.push_str("</div>");
    html
}

fn render_note(note: &Book, view: &ViewState) -> String {
    let id = element_id("note", &note.id);
    let mut html = open_record("div", &id, "border-l-2 border-blue pl-4", view);
    if needs_preview(&note.content) && !view.is_expanded(&note.id) && !view.is_expanded(&id) {
        html.push_str(&format!(
            "<details><summary class=\"note-preview\"><div class=\"prose prose-sm\">{}</div><span class=\"text-xs text-blue underline\">Read more</span></summary><div class=\"prose prose-sm\">{}</div></details>",
            format_markdown(&preview(&note.content)),
            format_markdown(&note.content)
        ));
    } else {
        html.push_str(&format!(
            "<div class=\"prose prose-sm\">{}</div>",
            format_markdown(&note.content)
        ));
    }
    html.push_str("</div>");
    html
}

fn needs_preview(content: &str) -> bool {
    content.lines().count() > PREVIEW_LINES || content.chars().count() > PREVIEW_CHARS
}

fn preview(content: &str) -> String {
    content.lines().take(PREVIEW_LINES).collect::<Vec<_>>().join("\n")
}

fn book_status_color(status: &str) -> &'static str {
    match status.trim().to_lowercase().as_str() {
        "completed" => "bg-green/20 text-green",
        "reading" => "bg-blue/20 text-blue",
        "to-read" => "bg-yellow/20 text-yellow",
        _ => "bg-surface1 text-subtext1",
    }
}
