use super::html::{element_id, empty_state, escape_html, progress_bar, stat_tile};
use super::{open_record, percent, RenderContext};
use crate::filter::ViewState;
use crate::model::{AnkiReview, EaseButton};
use crate::util::dates::format_date;
use std::collections::{BTreeMap, BTreeSet};

const RECENT_REVIEWS: usize = 10;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnkiStats {
    pub total_reviews: usize,
    /// Whole seconds per review, averaged over every review.
    pub avg_seconds: u64,
    /// Reviews answered Hard, Good or Easy, as a rounded percentage.
    pub success_rate: u64,
    pub deck_count: usize,
    /// Only buttons that were pressed at least once.
    pub ease_counts: BTreeMap<EaseButton, usize>,
}

pub fn anki_stats(reviews: &[AnkiReview]) -> AnkiStats {
    let total_reviews = reviews.len();
    let spent_ms: f64 = reviews
        .iter()
        .filter_map(|review| review.time_spent_ms)
        .filter(|ms| ms.is_finite() && *ms > 0.0)
        .sum();
    let avg_seconds = if total_reviews == 0 {
        0
    } else {
        (spent_ms / total_reviews as f64 / 1000.0).round() as u64
    };

    let mut ease_counts: BTreeMap<EaseButton, usize> = BTreeMap::new();
    for button in reviews.iter().filter_map(AnkiReview::ease) {
        *ease_counts.entry(button).or_insert(0) += 1;
    }
    let successes: usize = ease_counts
        .iter()
        .filter(|(button, _)| button.is_success())
        .map(|(_, count)| *count)
        .sum();

    let decks: BTreeSet<&str> = reviews.iter().map(|review| review.deck_name.as_str()).collect();

    AnkiStats {
        total_reviews,
        avg_seconds,
        success_rate: percent(successes, total_reviews).round() as u64,
        deck_count: decks.len(),
        ease_counts,
    }
}

/// Newest reviews first; unparseable review dates sort last.
pub fn recent_reviews(reviews: &[AnkiReview], limit: usize) -> Vec<&AnkiReview> {
    let mut ordered: Vec<&AnkiReview> = reviews.iter().collect();
    ordered.sort_by(|a, b| b.reviewed_at().cmp(&a.reviewed_at()));
    ordered.truncate(limit);
    ordered
}

pub fn render_anki(reviews: &[AnkiReview], view: &ViewState, _ctx: &RenderContext) -> String {
    if reviews.is_empty() {
        return empty_state("No Anki reviews yet.");
    }
    let stats = anki_stats(reviews);

    let mut html = String::from("<div class=\"space-y-6\">");
    html.push_str(
        "<div class=\"card p-6\"><h3 class=\"text-lg font-semibold mb-4\">Anki Learning Overview</h3><div class=\"grid grid-cols-2 md:grid-cols-4 gap-4 text-center\">",
    );
    html.push_str(&stat_tile("Total Reviews", &stats.total_reviews.to_string()));
    html.push_str(&stat_tile("Success Rate", &format!("{}%", stats.success_rate)));
    html.push_str(&stat_tile("Avg Time/Card", &format!("{}s", stats.avg_seconds)));
    html.push_str(&stat_tile("Active Decks", &stats.deck_count.to_string()));
    html.push_str("</div></div>");

    html.push_str("<div class=\"grid grid-cols-1 md:grid-cols-2 gap-6\">");
    html.push_str(
        "<div class=\"card p-6\"><h3 class=\"text-lg font-semibold mb-4\">Answer Button Distribution</h3><div class=\"space-y-2\">",
    );
    for (button, count) in &stats.ease_counts {
        html.push_str(&format!(
            "<div class=\"flex items-center justify-between\"><span class=\"text-sm font-medium\">{}</span><div class=\"w-24\">{}</div><span class=\"text-sm text-muted\">{count}</span></div>",
            button.label(),
            progress_bar(percent(*count, stats.total_reviews), ease_class(*button))
        ));
    }
    html.push_str("</div></div>");

    html.push_str(
        "<div class=\"card p-6\"><h3 class=\"text-lg font-semibold mb-4\">Recent Reviews</h3><div class=\"space-y-3\">",
    );
    for review in recent_reviews(reviews, RECENT_REVIEWS) {
        let id = element_id("review", &review.id);
        let content = if review.note_content.trim().is_empty() {
            "Card content"
        } else {
            review.note_content.as_str()
        };
        let spent = review
            .time_spent_ms
            .filter(|ms| ms.is_finite() && *ms > 0.0)
            .map(|ms| format!(" • {}s", (ms / 1000.0).round() as u64))
            .unwrap_or_default();
        html.push_str(&open_record("div", &id, "border-l-4 pl-3", view));
        html.push_str(&format!(
            "<div class=\"text-sm font-medium truncate\">{}</div><div class=\"text-xs text-muted\">{} • {}{spent}</div></div>",
            escape_html(content),
            escape_html(&review.deck_name),
            escape_html(&format_date(&review.review_date))
        ));
    }
    html.push_str("</div></div></div></div>");
    html
}

fn ease_class(button: EaseButton) -> &'static str {
    match button {
        EaseButton::Again => "bg-red",
        EaseButton::Hard => "bg-yellow",
        EaseButton::Good => "bg-green",
        EaseButton::Easy => "bg-blue",
    }
}
