//! Text shaping for card layouts.

use url::Url;

/// Cuts `text` to `max_chars` characters and appends `...` when shortened.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let head: String = text.chars().take(max_chars).collect();
    format!("{}...", head.trim_end())
}

/// Whether `source` parses as an absolute URL.
pub fn is_valid_url(source: &str) -> bool {
    Url::parse(source.trim()).is_ok()
}

/// `domain/path?query#hash` without `www.`, shortened to `max_len`.
///
/// Non-URLs are truncated as plain text.
pub fn format_url_display(raw: &str, max_len: usize) -> String {
    let Some((domain, rest)) = split_display_url(raw) else {
        return truncate_text(raw, max_len);
    };
    let full = format!("{domain}{rest}");
    if full.chars().count() <= max_len {
        return full;
    }
    let remaining = max_len.saturating_sub(domain.chars().count());
    format!("{domain}{}", truncate_text(&rest, remaining))
}

/// Source link label: the domain plus at most 24 characters of path.
pub fn format_source_display(source: &str) -> String {
    const MAX_PATH_CHARS: usize = 24;
    match split_display_url(source) {
        Some((domain, rest)) if rest.chars().count() <= MAX_PATH_CHARS => format!("{domain}{rest}"),
        Some((domain, rest)) => {
            let head: String = rest.chars().take(MAX_PATH_CHARS).collect();
            format!("{domain}{head}...")
        }
        None => source.to_string(),
    }
}

fn split_display_url(raw: &str) -> Option<(String, String)> {
    let parsed = Url::parse(raw.trim()).ok()?;
    let host = parsed.host_str()?;
    let domain = host.strip_prefix("www.").unwrap_or(host).to_string();
    let mut rest = parsed.path().to_string();
    if let Some(query) = parsed.query() {
        rest.push('?');
        rest.push_str(query);
    }
    if let Some(fragment) = parsed.fragment() {
        rest.push('#');
        rest.push_str(fragment);
    }
    Some((domain, rest))
}

/// Embeddable player URL for YouTube watch and short links.
pub fn youtube_embed_url(raw: &str) -> Option<String> {
    let parsed = Url::parse(raw.trim()).ok()?;
    let host = parsed.host_str()?.trim_start_matches("www.").trim_start_matches("m.");
    let video_id = match host {
        "youtube.com" if parsed.path() == "/watch" => parsed
            .query_pairs()
            .find(|(key, _)| key == "v")
            .map(|(_, value)| value.into_owned()),
        "youtube.com" => parsed
            .path()
            .strip_prefix("/embed/")
            .map(str::to_string),
        "youtu.be" => parsed
            .path_segments()
            .and_then(|mut segments| segments.next())
            .map(str::to_string),
        _ => None,
    }?;
    let valid = !video_id.is_empty()
        && video_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    valid.then(|| format!("https://www.youtube.com/embed/{video_id}"))
}

/// `City, Country` when both are known, else `lat, lon` to four places.
pub fn location_string(
    city: Option<&str>,
    country: Option<&str>,
    latitude: Option<f64>,
    longitude: Option<f64>,
) -> Option<String> {
    fn non_blank(value: Option<&str>) -> Option<&str> {
        value.filter(|text| !text.trim().is_empty())
    }
    if let (Some(city), Some(country)) = (non_blank(city), non_blank(country)) {
        return Some(format!("{city}, {country}"));
    }
    match (latitude, longitude) {
        // Zero coordinates are treated as missing.
        (Some(lat), Some(lon)) if lat != 0.0 && lon != 0.0 => Some(format!("{lat:.4}, {lon:.4}")),
        _ => None,
    }
}

/// Filled/empty star counts for a 0..=5 rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarRating {
    pub filled: u8,
    pub empty: u8,
}

pub fn star_rating(rating: Option<f64>) -> StarRating {
    let clamped = rating.unwrap_or(0.0).clamp(0.0, 5.0);
    let filled = clamped.floor() as u8;
    StarRating {
        filled,
        empty: 5 - filled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("héllo wörld", 6), "héllo...");
    }

    #[test]
    fn source_display_strips_www_and_shortens_paths() {
        assert_eq!(format_source_display("https://www.example.com/a"), "example.com/a");
        assert_eq!(
            format_source_display("https://example.com/a/very/long/path/that/keeps/going"),
            "example.com/a/very/long/path/that/k..."
        );
        assert_eq!(format_source_display("conversation"), "conversation");
    }

    #[test]
    fn url_display_keeps_domain_when_truncating() {
        let display = format_url_display("https://www.example.com/articles/2025/some-title", 25);
        assert!(display.starts_with("example.com/"));
        assert!(display.ends_with("..."));
    }

    #[test]
    fn location_prefers_city_then_coordinates() {
        assert_eq!(
            location_string(Some("Lisbon"), Some("Portugal"), Some(38.7), Some(-9.1)).as_deref(),
            Some("Lisbon, Portugal")
        );
        assert_eq!(
            location_string(None, Some("Portugal"), Some(38.72226), Some(-9.13934)).as_deref(),
            Some("38.7223, -9.1393")
        );
        assert_eq!(location_string(None, None, None, None), None);
    }

    #[test]
    fn stars_are_clamped() {
        let stars = |rating: Option<f64>| {
            let StarRating { filled, empty } = star_rating(rating);
            (filled, empty)
        };
        assert_eq!(stars(Some(3.7)), (3, 2));
        assert_eq!(stars(Some(9.0)), (5, 0));
        assert_eq!(stars(None), (0, 5));
    }

    #[test]
    fn youtube_links_become_embeds() {
        assert_eq!(
            youtube_embed_url("https://www.youtube.com/watch?v=abc_12-3&t=40").as_deref(),
            Some("https://www.youtube.com/embed/abc_12-3")
        );
        assert_eq!(
            youtube_embed_url("https://youtu.be/xyz789?si=share").as_deref(),
            Some("https://www.youtube.com/embed/xyz789")
        );
        assert_eq!(youtube_embed_url("https://vimeo.com/12345"), None);
        assert_eq!(youtube_embed_url("https://youtube.com/watch?v=\"onload"), None);
    }
}
