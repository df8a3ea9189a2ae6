//! Snapshot directory access.
//!
//! # Responsibility
//! - Name the fixed set of JSON snapshots the site is built from.
//! - Read them leniently (fallback on any failure) or strictly.
//!
//! # Invariants
//! - The lenient loaders never return an error.
//! - Snapshots are read-only; nothing here writes into the data dir.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

mod loader;

pub use loader::{load_json_array, load_json_or, load_json_strict, DataDir, SiteData};

pub type DataResult<T> = Result<T, DataError>;

#[derive(Debug)]
pub enum DataError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl Display for DataError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read `{}`: {source}", path.display())
            }
            Self::Json { path, source } => {
                write!(f, "invalid JSON in `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for DataError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
        }
    }
}

/// One snapshot file per data domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataFile {
    Thoughts,
    Habits,
    DailiesTimeline,
    Content,
    Books,
    ExportMetadata,
    Blog,
    Communities,
    Projects,
    Events,
    Tasks,
    Financial,
    Metrics,
    Principles,
    Ideas,
    Github,
    Victories,
    Failures,
    Standards,
    LineDancing,
    Anki,
}

impl DataFile {
    pub const ALL: [DataFile; 21] = [
        Self::Thoughts,
        Self::Habits,
        Self::DailiesTimeline,
        Self::Content,
        Self::Books,
        Self::ExportMetadata,
        Self::Blog,
        Self::Communities,
        Self::Projects,
        Self::Events,
        Self::Tasks,
        Self::Financial,
        Self::Metrics,
        Self::Principles,
        Self::Ideas,
        Self::Github,
        Self::Victories,
        Self::Failures,
        Self::Standards,
        Self::LineDancing,
        Self::Anki,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            Self::Thoughts => "thoughts.json",
            Self::Habits => "habits.json",
            Self::DailiesTimeline => "dailies_timeline.json",
            Self::Content => "content.json",
            Self::Books => "books.json",
            Self::ExportMetadata => "export_metadata.json",
            Self::Blog => "blog.json",
            Self::Communities => "communities.json",
            Self::Projects => "projects.json",
            Self::Events => "events.json",
            Self::Tasks => "tasks.json",
            Self::Financial => "financial.json",
            Self::Metrics => "metrics.json",
            Self::Principles => "principles.json",
            Self::Ideas => "ideas.json",
            Self::Github => "github.json",
            Self::Victories => "victories.json",
            Self::Failures => "failures.json",
            Self::Standards => "standards.json",
            Self::LineDancing => "line_dancing.json",
            Self::Anki => "anki.json",
        }
    }

    /// Whether the snapshot is a single object rather than an array.
    pub fn is_object(self) -> bool {
        matches!(
            self,
            Self::ExportMetadata | Self::Github | Self::Standards | Self::LineDancing
        )
    }
}
