//! Core of the lifesite static site generator.
//! Loads personal-data snapshots, filters and aggregates them, and renders
//! the page tree.

pub mod calendar;
pub mod config;
pub mod data;
pub mod filter;
pub mod github;
pub mod hierarchy;
pub mod logging;
pub mod model;
pub mod page;
pub mod render;
pub mod util;

pub use config::{ConfigError, SiteConfig};
pub use data::{DataDir, DataError, DataFile, SiteData};
pub use filter::{DateRange, Filterable, RecordFilter, ViewState};
pub use github::{fetch_activity, GithubClient, GithubError};
pub use logging::{default_log_level, init_logging, logging_status};
pub use page::{build_site, BuildError, BuildReport, Route, SiteBuilder};
pub use render::RenderContext;

/// Minimal health-check API for the CLI.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
