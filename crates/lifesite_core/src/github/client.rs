//! Blocking REST client for the commits endpoint.

use super::aggregate::{aggregate_commits, RepoCommits};
use super::{GithubError, GithubResult};
use crate::config::{split_repository, GithubConfig};
use crate::model::GithubActivity;
use chrono::{DateTime, Duration, SecondsFormat, Utc};
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::StatusCode;
use serde::Deserialize;

const PER_PAGE: usize = 100;
/// Hard stop for one repository's pagination.
const MAX_PAGES: u32 = 100;
const CLIENT_USER_AGENT: &str = concat!("lifesite/", env!("CARGO_PKG_VERSION"));
const BODY_PREVIEW_CHARS: usize = 200;

/// Supplier of commit timestamps for one repository.
pub trait CommitSource {
    /// Commits authored at or after `since`. `Ok(None)` when the repository
    /// does not exist or is not visible.
    fn commits_since(
        &self,
        owner: &str,
        repo: &str,
        since: DateTime<Utc>,
    ) -> GithubResult<Option<Vec<DateTime<Utc>>>>;
}

pub struct GithubClient {
    http: Client,
    api_base: String,
    token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CommitItem {
    commit: CommitDetail,
}

#[derive(Debug, Deserialize)]
struct CommitDetail {
    author: Option<Signature>,
    committer: Option<Signature>,
}

#[derive(Debug, Deserialize)]
struct Signature {
    date: Option<DateTime<Utc>>,
}

impl CommitItem {
    fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.commit
            .author
            .as_ref()
            .and_then(|sig| sig.date)
            .or_else(|| self.commit.committer.as_ref().and_then(|sig| sig.date))
    }
}

impl GithubClient {
    pub fn new(config: &GithubConfig) -> GithubResult<Self> {
        let http = Client::builder().build()?;
        Ok(Self {
            http,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            token: config
                .token
                .clone()
                .filter(|token| !token.trim().is_empty()),
        })
    }

    fn fetch_page(
        &self,
        owner: &str,
        repo: &str,
        since: &str,
        page: u32,
    ) -> GithubResult<Option<Vec<CommitItem>>> {
        let url = format!("{}/repos/{owner}/{repo}/commits", self.api_base);
        let mut request = self
            .http
            .get(&url)
            .header(USER_AGENT, CLIENT_USER_AGENT)
            .header(ACCEPT, "application/vnd.github+json")
            .query(&[
                ("since", since.to_string()),
                ("per_page", PER_PAGE.to_string()),
                ("page", page.to_string()),
            ]);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send()?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(GithubError::Status {
                repo: format!("{owner}/{repo}"),
                status: status.as_u16(),
                body: body.chars().take(BODY_PREVIEW_CHARS).collect(),
            });
        }
        Ok(Some(response.json()?))
    }
}

impl CommitSource for GithubClient {
    fn commits_since(
        &self,
        owner: &str,
        repo: &str,
        since: DateTime<Utc>,
    ) -> GithubResult<Option<Vec<DateTime<Utc>>>> {
        let since = since.to_rfc3339_opts(SecondsFormat::Secs, true);
        let mut commits = Vec::new();
        for page in 1..=MAX_PAGES {
            let Some(items) = self.fetch_page(owner, repo, &since, page)? else {
                return Ok(None);
            };
            let fetched = items.len();
            commits.extend(items.iter().filter_map(CommitItem::timestamp));
            log::debug!(
                "event=github_page module=github status=ok repo={owner}/{repo} page={page} items={fetched}"
            );
            if fetched < PER_PAGE {
                return Ok(Some(commits));
            }
        }
        log::warn!(
            "event=github_fetch module=github status=truncated repo={owner}/{repo} pages={MAX_PAGES}"
        );
        Ok(Some(commits))
    }
}

/// Fetches every configured repository and aggregates the result.
///
/// Repositories that answer 404 are left out of the activity.
pub fn fetch_activity<S: CommitSource>(
    source: &S,
    config: &GithubConfig,
    now: DateTime<Utc>,
) -> GithubResult<GithubActivity> {
    let since = now - Duration::days(i64::from(config.since_days));
    let mut fetched = Vec::new();

    for name in &config.repositories {
        let (owner, repo) =
            split_repository(name).ok_or_else(|| GithubError::InvalidRepo(name.clone()))?;
        match source.commits_since(owner, repo, since)? {
            Some(commits) => {
                log::info!(
                    "event=github_fetch module=github status=ok repo={owner}/{repo} commits={}",
                    commits.len()
                );
                fetched.push(RepoCommits {
                    repository: format!("{owner}/{repo}"),
                    commits,
                });
            }
            None => {
                log::warn!(
                    "event=github_fetch module=github status=skipped repo={owner}/{repo} reason=not_found"
                );
            }
        }
    }

    Ok(aggregate_commits(&fetched, now))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::cell::RefCell;
    use std::collections::HashMap;

    struct FakeSource {
        repos: HashMap<String, Vec<DateTime<Utc>>>,
        seen_since: RefCell<Vec<DateTime<Utc>>>,
    }

    impl CommitSource for FakeSource {
        fn commits_since(
            &self,
            owner: &str,
            repo: &str,
            since: DateTime<Utc>,
        ) -> GithubResult<Option<Vec<DateTime<Utc>>>> {
            self.seen_since.borrow_mut().push(since);
            Ok(self.repos.get(&format!("{owner}/{repo}")).cloned())
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn missing_repositories_are_skipped() {
        let source = FakeSource {
            repos: HashMap::from([("me/site".to_string(), vec![now() - Duration::days(1)])]),
            seen_since: RefCell::new(Vec::new()),
        };
        let config = GithubConfig {
            repositories: vec!["me/site".to_string(), "me/gone".to_string()],
            since_days: 30,
            ..GithubConfig::default()
        };
        let activity = fetch_activity(&source, &config, now()).unwrap();

        assert_eq!(activity.repositories, vec!["me/site".to_string()]);
        assert_eq!(activity.total_commits, 1);
        assert_eq!(
            source.seen_since.borrow().first().copied(),
            Some(now() - Duration::days(30))
        );
    }

    #[test]
    fn malformed_repository_fails() {
        let source = FakeSource {
            repos: HashMap::new(),
            seen_since: RefCell::new(Vec::new()),
        };
        let config = GithubConfig {
            repositories: vec!["no-slash".to_string()],
            ..GithubConfig::default()
        };
        let err = fetch_activity(&source, &config, now()).unwrap_err();
        assert!(matches!(err, GithubError::InvalidRepo(name) if name == "no-slash"));
    }

    #[test]
    fn author_date_wins_over_committer() {
        let item: CommitItem = serde_json::from_value(serde_json::json!({
            "commit": {
                "author": {"date": "2024-05-01T10:00:00Z"},
                "committer": {"date": "2024-05-02T10:00:00Z"}
            }
        }))
        .unwrap();
        assert_eq!(
            item.timestamp(),
            Some(Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap())
        );
    }
}
