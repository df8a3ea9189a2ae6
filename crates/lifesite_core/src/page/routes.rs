use std::path::{Path, PathBuf};
use url::form_urlencoded::byte_serialize;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Thoughts,
    /// Slug from [`crate::util::slug::capture_slug`].
    Thought(String),
    ThoughtTag(String),
    BucketList,
    Dailies,
    Communities,
    Principles,
    ProjectIdeas,
    Projects,
    Blog,
    BlogPost(String),
    ContentConsumed,
    Github,
    Todos,
    Financial,
    Metrics,
    Events,
    Victories,
    Standards,
    LineDancing,
    Failures,
    Anki,
    Map,
    WhereIveBeen,
}

impl Route {
    /// Routes with no dynamic segment, in navigation order.
    pub const FIXED: [Route; 22] = [
        Route::Home,
        Route::BucketList,
        Route::Dailies,
        Route::Communities,
        Route::Principles,
        Route::ProjectIdeas,
        Route::Projects,
        Route::Blog,
        Route::ContentConsumed,
        Route::Github,
        Route::Thoughts,
        Route::Todos,
        Route::Financial,
        Route::Metrics,
        Route::Events,
        Route::Victories,
        Route::Standards,
        Route::LineDancing,
        Route::Failures,
        Route::Anki,
        Route::Map,
        Route::WhereIveBeen,
    ];

    /// Root-relative URL with a trailing slash.
    pub fn href(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Thoughts => "/thoughts/".to_string(),
            Self::Thought(slug) => format!("/thoughts/{}/", path_segment(slug)),
            Self::ThoughtTag(tag) => {
                format!("/thoughts/tags/{}/", path_segment(&tag.to_lowercase()))
            }
            Self::BucketList => "/bucket-list/".to_string(),
            Self::Dailies => "/dailies/".to_string(),
            Self::Communities => "/communities/".to_string(),
            Self::Principles => "/principles/".to_string(),
            Self::ProjectIdeas => "/project-ideas/".to_string(),
            Self::Projects => "/projects/".to_string(),
            Self::Blog => "/blog/".to_string(),
            Self::BlogPost(id) => format!("/blog/{}/", path_segment(id)),
            Self::ContentConsumed => "/content-consumed/".to_string(),
            Self::Github => "/github/".to_string(),
            Self::Todos => "/todos/".to_string(),
            Self::Financial => "/financial/".to_string(),
            Self::Metrics => "/metrics/".to_string(),
            Self::Events => "/events/".to_string(),
            Self::Victories => "/resources/victories/".to_string(),
            Self::Standards => "/resources/standards/".to_string(),
            Self::LineDancing => "/resources/line-dancing/".to_string(),
            Self::Failures => "/failures/".to_string(),
            Self::Anki => "/anki/".to_string(),
            Self::Map => "/map/".to_string(),
            Self::WhereIveBeen => "/where-ive-been/".to_string(),
        }
    }

    /// `<out_dir>/<route>/index.html`.
    pub fn output_path(&self, out_dir: &Path) -> PathBuf {
        let mut path = out_dir.to_path_buf();
        for segment in self.href().split('/').filter(|segment| !segment.is_empty()) {
            path.push(segment);
        }
        path.join("index.html")
    }

    /// Navigation label for fixed routes.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Thoughts | Self::Thought(_) | Self::ThoughtTag(_) => "Thoughts",
            Self::BucketList => "Bucket List",
            Self::Dailies => "Dailies",
            Self::Communities => "Communities",
            Self::Principles => "Principles",
            Self::ProjectIdeas => "Project Ideas",
            Self::Projects => "Active Projects",
            Self::Blog | Self::BlogPost(_) => "Blog",
            Self::ContentConsumed => "Content Consumed",
            Self::Github => "Github",
            Self::Todos => "To-Dos",
            Self::Financial => "Financial",
            Self::Metrics => "Metrics",
            Self::Events => "Events",
            Self::Victories => "Victories",
            Self::Standards => "Standards",
            Self::LineDancing => "Line Dancing",
            Self::Failures => "Failures",
            Self::Anki => "Anki",
            Self::Map => "Map",
            Self::WhereIveBeen => "Where I've Been",
        }
    }

    /// Fixed route this page belongs to in the navigation.
    pub fn section(&self) -> Route {
        match self {
            Self::Thought(_) | Self::ThoughtTag(_) => Self::Thoughts,
            Self::BlogPost(_) => Self::Blog,
            other => other.clone(),
        }
    }
}

/// Percent-encodes one path segment. Blank and dot-only segments are
/// rewritten so they cannot address a parent directory.
pub fn path_segment(raw: &str) -> String {
    let encoded: String = byte_serialize(raw.trim().as_bytes()).collect();
    if encoded.is_empty() {
        return "_".to_string();
    }
    if encoded.chars().all(|c| c == '.') {
        return encoded.replace('.', "%2E");
    }
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_paths_end_in_index_html() {
        let out = Path::new("/tmp/site");
        assert_eq!(Route::Home.output_path(out), out.join("index.html"));
        assert_eq!(
            Route::ThoughtTag("Rust Lang".to_string()).output_path(out),
            out.join("thoughts").join("tags").join("rust+lang").join("index.html")
        );
    }

    #[test]
    fn segments_cannot_escape() {
        assert_eq!(path_segment(".."), "%2E%2E");
        assert_eq!(path_segment("a/b"), "a%2Fb");
        assert_eq!(path_segment("  "), "_");
        assert_eq!(Route::BlogPost("..".to_string()).href(), "/blog/%2E%2E/");
    }

    #[test]
    fn resource_pages_nest_under_resources() {
        let out = Path::new("/tmp/site");
        assert_eq!(
            Route::LineDancing.output_path(out),
            out.join("resources").join("line-dancing").join("index.html")
        );
        assert_eq!(Route::Victories.href(), "/resources/victories/");
        assert_eq!(Route::WhereIveBeen.label(), "Where I've Been");
    }

    #[test]
    fn fixed_routes_have_distinct_hrefs() {
        let hrefs: std::collections::HashSet<String> =
            Route::FIXED.iter().map(Route::href).collect();
        assert_eq!(hrefs.len(), Route::FIXED.len());
    }
}
