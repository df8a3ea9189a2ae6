//! HTML fragments shared by renderers.

/// Escapes text for element bodies and double-quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Makes a stable element id usable as a URL fragment.
///
/// ASCII alphanumerics, `-` and `_` are kept; every other run of characters
/// collapses into one `-`.
pub fn element_id(prefix: &str, raw: &str) -> String {
    let mut id = String::with_capacity(prefix.len() + raw.len() + 1);
    id.push_str(prefix);
    id.push('-');
    let mut pending_dash = false;
    for c in raw.trim().chars() {
        if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
            if pending_dash {
                id.push('-');
                pending_dash = false;
            }
            id.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    id
}

/// `#tag` chip.
pub fn tag_chip(tag: &str) -> String {
    format!(
        "<span class=\"px-2 py-1 text-xs bg-surface1 text-subtext1 rounded\">#{}</span>",
        escape_html(tag)
    )
}

/// Card shown when a renderer has nothing to display.
pub fn empty_state(message: &str) -> String {
    format!(
        "<div class=\"card p-6 text-center\"><p class=\"text-subtext0\">{}</p></div>",
        escape_html(message)
    )
}

/// Horizontal progress bar for a 0..=100 percentage.
pub fn progress_bar(percent: f64, fill_class: &str) -> String {
    let clamped = if percent.is_finite() {
        percent.clamp(0.0, 100.0)
    } else {
        0.0
    };
    format!(
        "<div class=\"w-full bg-surface1 rounded-full h-2\"><div class=\"{fill_class} h-2 rounded-full\" style=\"width: {clamped:.1}%\"></div></div>"
    )
}

/// Small labelled number used in stat rows.
pub fn stat_tile(label: &str, value: &str) -> String {
    format!(
        "<div class=\"card p-4\"><div class=\"text-3xl font-bold text-text\">{}</div><div class=\"text-sm text-subtext1\">{}</div></div>",
        escape_html(value),
        escape_html(label)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_all_special_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn element_ids_collapse_unsafe_runs() {
        assert_eq!(element_id("thought", "Capture 12 / 2025"), "thought-capture-12-2025");
        assert_eq!(element_id("p", "abc"), "p-abc");
    }

    #[test]
    fn progress_bar_clamps_and_ignores_nan() {
        assert!(progress_bar(140.0, "bg-blue").contains("width: 100.0%"));
        assert!(progress_bar(f64::NAN, "bg-blue").contains("width: 0.0%"));
    }
}
