//! Record-to-markup renderers, one per data domain.
//!
//! # Responsibility
//! - Apply the active [`ViewState`] to a record slice.
//! - Compute each page's derived stats and emit its HTML body fragment.
//!
//! # Invariants
//! - Every text field is escaped via [`html::escape_html`] before output.
//! - Every rendered record carries a stable `id` for hash deep-links.
//! - Renderers are pure: output depends only on records, view and context.
//!
//! # See also
//! - `page::site` for page chrome and file output.

use crate::filter::ViewState;
use chrono::NaiveDate;

pub mod html;

mod anki;
mod blog;
mod books;
mod bucket;
mod communities;
mod dailies;
mod events;
mod financial;
mod github;
mod habits;
mod ideas;
mod locations;
mod metrics;
mod principles;
mod projects;
mod resources;
mod thoughts;
mod todos;

pub use anki::{anki_stats, recent_reviews, render_anki, AnkiStats};
pub use blog::{blog_stats, render_blog, render_blog_post, BlogStats};
pub use books::{book_groups, render_books, BookGroup};
pub use bucket::render_bucket_list;
pub use communities::render_communities;
pub use dailies::render_dailies;
pub use events::{event_types, render_events};
pub use financial::{financial_summary, render_financial, CategoryShare, FinancialSummary};
pub use github::render_github;
pub use habits::{current_streak, habit_stats, render_habits, HabitStats};
pub use ideas::render_ideas;
pub use locations::{location_summary, render_thought_locations, LocationSummary};
pub use metrics::{latest_metrics, render_metrics, sleep_entries};
pub use principles::render_principles;
pub use projects::render_projects;
pub use resources::{render_line_dancing, render_milestones, render_standards, MilestoneKind};
pub use thoughts::{render_thought_detail, render_thoughts, thought_stats, ThoughtStats};
pub use todos::{render_todos, todo_summary, TodoSummary, DEFAULT_DAYS_WINDOW};

/// Inputs shared by every renderer besides records and view state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderContext {
    /// Anchor for heatmaps and trailing day windows.
    pub today: NaiveDate,
}

impl RenderContext {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }
}

/// Opening tag for a linkable record element.
///
/// Focused records get `hash-highlighted` so a fragment link renders
/// highlighted even without the page script.
pub(crate) fn open_record(tag: &str, id: &str, classes: &str, view: &ViewState) -> String {
    let highlight = if view.is_focused(id) {
        " hash-highlighted"
    } else {
        ""
    };
    format!(
        "<{tag} id=\"{}\" class=\"{classes}{highlight}\">",
        html::escape_html(id)
    )
}

/// `1 note` / `3 notes`.
pub(crate) fn plural(count: usize, singular: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {singular}s")
    }
}

/// Percentage with a zero denominator mapped to 0.
pub(crate) fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 * 100.0 / whole as f64
    }
}
