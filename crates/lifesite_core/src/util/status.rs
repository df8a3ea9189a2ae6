//! Status badge color classes.

/// Maps a free-form status to badge classes. Unknown statuses get a muted
/// gray badge.
pub fn status_color(status: Option<&str>) -> &'static str {
    let normalized = status.map(|value| value.trim().to_lowercase());
    match normalized.as_deref() {
        Some("completed" | "published" | "done") => "bg-green-100 text-green-800",
        Some("reading" | "in-progress" | "in progress" | "active") => "bg-blue-100 text-blue-800",
        Some("to-read" | "draft" | "planned") => "bg-yellow-100 text-yellow-800",
        Some("abandoned" | "archived") => "bg-gray-100 text-gray-800",
        _ => "bg-gray-100 text-gray-600",
    }
}

#[cfg(test)]
mod tests {
    use super::status_color;

    #[test]
    fn status_lookup_is_case_insensitive() {
        assert_eq!(status_color(Some("Completed")), "bg-green-100 text-green-800");
        assert_eq!(status_color(Some(" draft ")), "bg-yellow-100 text-yellow-800");
        assert_eq!(status_color(None), "bg-gray-100 text-gray-600");
        assert_eq!(status_color(Some("mystery")), "bg-gray-100 text-gray-600");
    }
}
