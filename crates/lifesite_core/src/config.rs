//! Site configuration.
//!
//! # Responsibility
//! - Deserialize `lifesite.json` with defaults for every field.
//! - Apply environment overrides before validation.
//!
//! # Invariants
//! - A validated config has non-blank data/out dirs.
//! - Every GitHub repository entry has the `owner/repo` shape.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Conventional config file name looked up by the CLI.
pub const DEFAULT_CONFIG_FILE: &str = "lifesite.json";

pub const ENV_DATA_DIR: &str = "LIFESITE_DATA_DIR";
pub const ENV_OUT_DIR: &str = "LIFESITE_OUT_DIR";
pub const ENV_SITE_URL: &str = "LIFESITE_SITE_URL";
pub const ENV_LOG_LEVEL: &str = "LIFESITE_LOG_LEVEL";
pub const ENV_GITHUB_TOKEN: &str = "GITHUB_TOKEN";

#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "invalid config `{}`: {source}", path.display())
            }
            Self::Invalid(message) => write!(f, "invalid config: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Invalid(_) => None,
        }
    }
}

/// Top-level site settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Directory holding the JSON snapshots.
    pub data_dir: PathBuf,
    /// Directory the page tree is written into.
    pub out_dir: PathBuf,
    pub site_title: String,
    /// Absolute base URL used for Open Graph links. No trailing slash.
    pub site_url: String,
    pub author: String,
    pub description: String,
    pub github: GithubConfig,
    pub analytics: AnalyticsConfig,
    pub log: LogConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            out_dir: PathBuf::from("public"),
            site_title: "Personal Website".to_string(),
            site_url: "http://localhost:8000".to_string(),
            author: String::new(),
            description: "Notes, habits, and projects.".to_string(),
            github: GithubConfig::default(),
            analytics: AnalyticsConfig::default(),
            log: LogConfig::default(),
        }
    }
}

/// Commit-activity fetch settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GithubConfig {
    pub api_base: String,
    /// Repositories as `owner/repo`.
    pub repositories: Vec<String>,
    /// Bearer token. Usually supplied through `GITHUB_TOKEN` instead.
    #[serde(skip_serializing)]
    pub token: Option<String>,
    /// How far back commits are requested.
    pub since_days: u32,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.github.com".to_string(),
            repositories: Vec::new(),
            token: None,
            since_days: 365,
        }
    }
}

/// Optional PostHog beacon.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    pub posthog_key: Option<String>,
    pub posthog_host: Option<String>,
}

impl AnalyticsConfig {
    /// The beacon is emitted only when a non-blank key is configured.
    pub fn is_enabled(&self) -> bool {
        self.posthog_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    /// Absolute directory for rotating log files; stderr when unset.
    pub dir: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: crate::logging::default_log_level().to_string(),
            dir: None,
        }
    }
}

impl SiteConfig {
    /// Reads a config file. Fields absent from the file keep their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reads `path` when it exists, otherwise starts from defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            log::debug!(
                "event=config_load module=config status=default path={}",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Applies overrides from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from any key lookup. Blank values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(value) = get(ENV_DATA_DIR) {
            self.data_dir = PathBuf::from(value);
        }
        if let Some(value) = get(ENV_OUT_DIR) {
            self.out_dir = PathBuf::from(value);
        }
        if let Some(value) = get(ENV_SITE_URL) {
            self.site_url = value;
        }
        if let Some(value) = get(ENV_LOG_LEVEL) {
            self.log.level = value;
        }
        if let Some(value) = get(ENV_GITHUB_TOKEN) {
            self.github.token = Some(value);
        }
    }

    /// Checks cross-field invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("data_dir must not be blank".to_string()));
        }
        if self.out_dir.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("out_dir must not be blank".to_string()));
        }
        if self.out_dir == self.data_dir {
            return Err(ConfigError::Invalid(
                "out_dir must differ from data_dir".to_string(),
            ));
        }
        for repo in &self.github.repositories {
            if split_repository(repo).is_none() {
                return Err(ConfigError::Invalid(format!(
                    "github repository `{repo}` must look like owner/repo"
                )));
            }
        }
        Ok(())
    }

    /// `site_url` without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.site_url.trim_end_matches('/')
    }
}

/// Splits `owner/repo` into its two non-blank halves.
pub fn split_repository(value: &str) -> Option<(&str, &str)> {
    let (owner, repo) = value.trim().split_once('/')?;
    if owner.is_empty() || repo.is_empty() || repo.contains('/') {
        return None;
    }
    Some((owner, repo))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn partial_file_keeps_defaults() {
        let config: SiteConfig =
            serde_json::from_str(r#"{"site_title":"Notebook","github":{"since_days":30}}"#)
                .unwrap();
        assert_eq!(config.site_title, "Notebook");
        assert_eq!(config.github.since_days, 30);
        assert_eq!(config.github.api_base, "https://api.github.com");
        assert_eq!(config.data_dir, PathBuf::from("data"));
    }

    #[test]
    fn overrides_skip_blank_values() {
        let env: HashMap<&str, &str> = HashMap::from([
            (ENV_DATA_DIR, "/srv/snapshots"),
            (ENV_SITE_URL, "  "),
            (ENV_GITHUB_TOKEN, "ghp_example"),
        ]);
        let mut config = SiteConfig::default();
        config.apply_overrides(|key| env.get(key).map(|value| value.to_string()));

        assert_eq!(config.data_dir, PathBuf::from("/srv/snapshots"));
        assert_eq!(config.site_url, "http://localhost:8000");
        assert_eq!(config.github.token.as_deref(), Some("ghp_example"));
    }

    #[test]
    fn validate_rejects_malformed_repository() {
        let mut config = SiteConfig::default();
        config.github.repositories = vec!["octocat/hello".to_string(), "broken".to_string()];
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("broken"));
    }

    #[test]
    fn split_repository_requires_two_parts() {
        assert_eq!(split_repository("a/b"), Some(("a", "b")));
        assert_eq!(split_repository("a/b/c"), None);
        assert_eq!(split_repository("/b"), None);
    }

    #[test]
    fn analytics_disabled_without_key() {
        let mut analytics = AnalyticsConfig::default();
        assert!(!analytics.is_enabled());
        analytics.posthog_key = Some("phc_123".to_string());
        assert!(analytics.is_enabled());
    }
}
