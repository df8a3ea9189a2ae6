use super::{DataError, DataFile, DataResult};
use crate::model::{
    bucket_list_from_content, AnkiReview, BlogPost, Book, BucketList, Community, ContentEntry,
    DailyCount, Event, ExportMetadata, FinancialEntry, GithubActivity, Habit, Idea, LineDancing,
    Metric, Milestone, Principle, Project, Standards, Task, Thought,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Root directory of the JSON snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path(&self, file: DataFile) -> PathBuf {
        self.root.join(file.file_name())
    }

    pub fn array<T: DeserializeOwned>(&self, file: DataFile) -> Vec<T> {
        load_json_array(&self.path(file))
    }

    pub fn object<T: DeserializeOwned + Default>(&self, file: DataFile) -> T {
        load_json_or(&self.path(file), T::default())
    }
}

/// Reads and parses `path`, surfacing every failure.
pub fn load_json_strict<T: DeserializeOwned>(path: &Path) -> DataResult<T> {
    let raw = std::fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| DataError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads `path`, returning `fallback` when it is missing or malformed.
pub fn load_json_or<T: DeserializeOwned>(path: &Path, fallback: T) -> T {
    match load_json_strict(path) {
        Ok(value) => {
            log::debug!(
                "event=data_load module=data status=ok file={}",
                file_label(path)
            );
            value
        }
        Err(err) => {
            log_fallback(path, &err);
            fallback
        }
    }
}

/// Reads a JSON array of records. Elements that do not match `T` are
/// skipped; a missing file, malformed JSON or a non-array yields empty.
pub fn load_json_array<T: DeserializeOwned>(path: &Path) -> Vec<T> {
    let value: Value = match load_json_strict(path) {
        Ok(value) => value,
        Err(err) => {
            log_fallback(path, &err);
            return Vec::new();
        }
    };
    let Value::Array(elements) = value else {
        log::warn!(
            "event=data_load module=data status=fallback file={} reason=not_an_array",
            file_label(path)
        );
        return Vec::new();
    };

    let total = elements.len();
    let records: Vec<T> = elements
        .into_iter()
        .enumerate()
        .filter_map(|(index, element)| match serde_json::from_value(element) {
            Ok(record) => Some(record),
            Err(err) => {
                log::warn!(
                    "event=record_skip module=data status=error file={} index={} error={}",
                    file_label(path),
                    index,
                    err
                );
                None
            }
        })
        .collect();

    log::info!(
        "event=data_load module=data status=ok file={} records={} skipped={}",
        file_label(path),
        records.len(),
        total - records.len()
    );
    records
}

fn log_fallback(path: &Path, err: &DataError) {
    match err {
        DataError::Io { source, .. } if source.kind() == ErrorKind::NotFound => {
            log::info!(
                "event=data_load module=data status=missing file={}",
                file_label(path)
            );
        }
        other => {
            log::warn!(
                "event=data_load module=data status=fallback file={} error={}",
                file_label(path),
                other
            );
        }
    }
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Every snapshot, loaded leniently.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SiteData {
    pub thoughts: Vec<Thought>,
    pub habits: Vec<Habit>,
    pub dailies: Vec<DailyCount>,
    pub content: Vec<ContentEntry>,
    pub books: Vec<Book>,
    pub export_metadata: ExportMetadata,
    pub blog: Vec<BlogPost>,
    pub communities: Vec<Community>,
    pub projects: Vec<Project>,
    pub events: Vec<Event>,
    pub tasks: Vec<Task>,
    pub financial: Vec<FinancialEntry>,
    pub metrics: Vec<Metric>,
    pub principles: Vec<Principle>,
    pub ideas: Vec<Idea>,
    pub github: GithubActivity,
    pub victories: Vec<Milestone>,
    pub failures: Vec<Milestone>,
    pub standards: Standards,
    pub line_dancing: LineDancing,
    pub anki: Vec<AnkiReview>,
}

impl SiteData {
    pub fn load(dir: &DataDir) -> Self {
        let data = Self {
            thoughts: dir.array(DataFile::Thoughts),
            habits: dir.array(DataFile::Habits),
            dailies: dir.array(DataFile::DailiesTimeline),
            content: dir.array(DataFile::Content),
            books: dir.array(DataFile::Books),
            export_metadata: dir.object(DataFile::ExportMetadata),
            blog: dir.array(DataFile::Blog),
            communities: dir.array(DataFile::Communities),
            projects: dir.array(DataFile::Projects),
            events: dir.array(DataFile::Events),
            tasks: dir.array(DataFile::Tasks),
            financial: dir.array(DataFile::Financial),
            metrics: dir.array(DataFile::Metrics),
            principles: dir.array(DataFile::Principles),
            ideas: dir.array(DataFile::Ideas),
            github: dir.object(DataFile::Github),
            victories: dir.array(DataFile::Victories),
            failures: dir.array(DataFile::Failures),
            standards: dir.object(DataFile::Standards),
            line_dancing: dir.object(DataFile::LineDancing),
            anki: dir.array(DataFile::Anki),
        };
        log::info!(
            "event=site_data_load module=data status=ok dir={} records={}",
            dir.root().display(),
            data.record_count()
        );
        data
    }

    pub fn bucket_list(&self) -> BucketList {
        bucket_list_from_content(&self.content)
    }

    pub fn record_count(&self) -> usize {
        self.thoughts.len()
            + self.habits.len()
            + self.dailies.len()
            + self.content.len()
            + self.books.len()
            + self.blog.len()
            + self.communities.len()
            + self.projects.len()
            + self.events.len()
            + self.tasks.len()
            + self.financial.len()
            + self.metrics.len()
            + self.principles.len()
            + self.ideas.len()
            + self.victories.len()
            + self.failures.len()
            + self.line_dancing.dances_i_know.len()
            + self.line_dancing.dances_to_learn.len()
            + self.anki.len()
    }
}
