use crate::model::{GithubActivity, HeatmapValue};
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use std::collections::BTreeMap;

/// Commit timestamps fetched for one repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoCommits {
    /// `owner/repo`.
    pub repository: String,
    pub commits: Vec<DateTime<Utc>>,
}

/// Per-day commit counts across `repos`, oldest day first.
///
/// `repositories` lists every fetched repository, including those without
/// commits in the window.
pub fn aggregate_commits(repos: &[RepoCommits], now: DateTime<Utc>) -> GithubActivity {
    let mut per_day: BTreeMap<NaiveDate, u32> = BTreeMap::new();
    for commit in repos.iter().flat_map(|repo| repo.commits.iter()) {
        *per_day.entry(commit.date_naive()).or_insert(0) += 1;
    }

    let total_commits = per_day.values().map(|count| u64::from(*count)).sum();
    let heatmap_data = per_day
        .into_iter()
        .map(|(date, count)| HeatmapValue {
            date: date.format("%Y-%m-%d").to_string(),
            count,
        })
        .collect();
    let repositories: Vec<String> = repos.iter().map(|repo| repo.repository.clone()).collect();

    GithubActivity {
        heatmap_data,
        total_commits,
        repository_count: repositories.len(),
        repositories,
        last_updated: now.to_rfc3339_opts(SecondsFormat::Secs, true),
        error: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, day, hour, 0, 0).unwrap()
    }

    #[test]
    fn counts_merge_across_repositories() {
        let repos = vec![
            RepoCommits {
                repository: "me/a".to_string(),
                commits: vec![at(2, 9), at(1, 23), at(2, 10)],
            },
            RepoCommits {
                repository: "me/b".to_string(),
                commits: vec![at(2, 1)],
            },
            RepoCommits {
                repository: "me/idle".to_string(),
                commits: Vec::new(),
            },
        ];
        let activity = aggregate_commits(&repos, at(3, 12));

        assert_eq!(activity.total_commits, 4);
        assert_eq!(activity.repository_count, 3);
        assert_eq!(
            activity.heatmap_data,
            vec![
                HeatmapValue {
                    date: "2024-05-01".to_string(),
                    count: 1
                },
                HeatmapValue {
                    date: "2024-05-02".to_string(),
                    count: 3
                },
            ]
        );
        assert_eq!(activity.last_updated, "2024-05-03T12:00:00Z");
    }
}
