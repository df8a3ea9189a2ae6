//! GitHub commit activity.
//!
//! # Responsibility
//! - Fetch commit timestamps for configured repositories.
//! - Fold them into the `GithubActivity` snapshot the github page reads.
//!
//! # Invariants
//! - A repository answering 404 is skipped; any other failure aborts.
//! - Aggregation is pure and never touches the network.
//!
//! # See also
//! - `model::github` for the snapshot shape.

mod aggregate;
mod client;

pub use aggregate::{aggregate_commits, RepoCommits};
pub use client::{fetch_activity, CommitSource, GithubClient};

use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum GithubError {
    Http(reqwest::Error),
    Status {
        repo: String,
        status: u16,
        body: String,
    },
    InvalidRepo(String),
}

impl Display for GithubError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Http(err) => write!(f, "github request failed: {err}"),
            Self::Status { repo, status, body } => {
                write!(f, "github returned {status} for `{repo}`: {body}")
            }
            Self::InvalidRepo(repo) => {
                write!(f, "repository `{repo}` must look like owner/repo")
            }
        }
    }
}

impl Error for GithubError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Http(err) => Some(err),
            Self::Status { .. } | Self::InvalidRepo(_) => None,
        }
    }
}

impl From<reqwest::Error> for GithubError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err)
    }
}

pub type GithubResult<T> = Result<T, GithubError>;
