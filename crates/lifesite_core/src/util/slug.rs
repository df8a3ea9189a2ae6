//! Reversible URL slugs for capture identifiers.
//!
//! Capture ids are opaque (they may contain `/`, spaces or colons), so the
//! thought detail route uses URL-safe base64 without padding.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

/// Encodes a capture id into a path-safe slug.
pub fn capture_slug(capture_id: &str) -> String {
    URL_SAFE_NO_PAD.encode(capture_id.as_bytes())
}

/// Decodes a slug produced by [`capture_slug`].
///
/// Trailing `=` padding is tolerated. A blank slug decodes to the blank
/// id, so every slug round-trips. Returns `None` for input that is not
/// base64 or does not decode to UTF-8.
pub fn parse_capture_slug(slug: &str) -> Option<String> {
    let unpadded = slug.trim().trim_end_matches('=');
    let bytes = URL_SAFE_NO_PAD.decode(unpadded).ok()?;
    String::from_utf8(bytes).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_is_path_safe() {
        let slug = capture_slug("capture/2025-08-03 10:00:00?>>");
        assert!(slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
        assert_eq!(
            parse_capture_slug(&slug).as_deref(),
            Some("capture/2025-08-03 10:00:00?>>")
        );
    }

    #[test]
    fn padded_slugs_are_accepted() {
        assert_eq!(parse_capture_slug("YWI=").as_deref(), Some("ab"));
    }

    #[test]
    fn invalid_slugs_yield_none() {
        assert_eq!(parse_capture_slug("***"), None);
        // 0xFF 0xFE is not UTF-8.
        assert_eq!(parse_capture_slug("__4"), None);
    }

    #[test]
    fn blank_ids_round_trip() {
        assert_eq!(capture_slug(""), "");
        assert_eq!(parse_capture_slug(&capture_slug("")).as_deref(), Some(""));
    }
}
