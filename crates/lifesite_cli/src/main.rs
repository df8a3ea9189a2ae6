//! `lifesite` command line.
//!
//! # Responsibility
//! - Resolve configuration from file, environment and flags.
//! - Drive site builds, GitHub snapshot refreshes and ad-hoc record queries.

use anyhow::{anyhow, bail, Context, Result};
use chrono::{Local, NaiveDate, Utc};
use clap::{Args, Parser, Subcommand, ValueEnum};
use lifesite_core::data::load_json_strict;
use lifesite_core::filter::{sort_by_timestamp_asc, sort_by_timestamp_desc};
use lifesite_core::model::{
    bucket_list_from_content, BlogPost, ContentEntry, Event, GithubActivity, Idea, Milestone,
    Project, Task, Thought,
};
use lifesite_core::util::dates::parse_date;
use lifesite_core::util::slug::{capture_slug, parse_capture_slug};
use lifesite_core::{
    build_site, fetch_activity, init_logging, DataDir, DataFile, DateRange, Filterable,
    GithubClient, RecordFilter, SiteConfig, SiteData,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "lifesite", version, about = "Static personal site from JSON snapshots")]
struct Cli {
    /// Config file; defaults apply when it does not exist.
    #[arg(long, global = true, default_value = lifesite_core::config::DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Snapshot directory, overriding config and environment.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render every page into the output directory.
    Build(BuildArgs),
    /// Fetch commit activity and write `github.json`.
    FetchGithub {
        /// Destination file; defaults to `<data_dir>/github.json`.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print the records of one domain that match a filter, as JSON.
    Query(QueryArgs),
    /// Encode or decode thought route slugs.
    Slug {
        #[command(subcommand)]
        action: SlugAction,
    },
    /// Check that the core library is linked.
    Ping,
}

#[derive(Args, Debug)]
struct BuildArgs {
    #[arg(long)]
    out_dir: Option<PathBuf>,
    /// Refresh GitHub activity before rendering without touching the snapshot.
    #[arg(long)]
    fetch_github: bool,
    /// Anchor date for heatmaps and day windows; defaults to the local date.
    #[arg(long, value_parser = parse_day)]
    today: Option<NaiveDate>,
}

#[derive(Args, Debug)]
struct QueryArgs {
    domain: Domain,
    /// Selected tags; records matching any of them are kept.
    #[arg(long = "tag")]
    tags: Vec<String>,
    #[arg(long, value_parser = parse_day)]
    from: Option<NaiveDate>,
    #[arg(long, value_parser = parse_day)]
    to: Option<NaiveDate>,
    #[arg(long)]
    search: Option<String>,
    /// Event type or task status.
    #[arg(long)]
    category: Option<String>,
    #[arg(long)]
    oldest_first: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Domain {
    Thoughts,
    Events,
    Tasks,
    Projects,
    Ideas,
    Blog,
    BucketList,
    Victories,
    Failures,
}

#[derive(Subcommand, Debug)]
enum SlugAction {
    Encode { capture_id: String },
    Decode { slug: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match &cli.command {
        Command::Ping => {
            println!("lifesite_core ping={}", lifesite_core::ping());
            println!("lifesite_core version={}", lifesite_core::core_version());
            Ok(())
        }
        Command::Slug { action } => run_slug(action),
        Command::Build(args) => {
            let config = resolve_config(&cli, args.out_dir.as_deref())?;
            run_build(&config, args)
        }
        Command::FetchGithub { output } => {
            let config = resolve_config(&cli, None)?;
            run_fetch_github(&config, output.as_deref())
        }
        Command::Query(args) => {
            let config = resolve_config(&cli, None)?;
            run_query(&config, args)
        }
    }
}

fn resolve_config(cli: &Cli, out_dir: Option<&Path>) -> Result<SiteConfig> {
    let mut config = SiteConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config {}", cli.config.display()))?;
    config.apply_env();
    if let Some(dir) = &cli.data_dir {
        config.data_dir = dir.clone();
    }
    if let Some(dir) = out_dir {
        config.out_dir = dir.to_path_buf();
    }
    config.validate()?;
    init_logging(&config.log.level, config.log.dir.as_deref()).map_err(|err| anyhow!(err))?;
    Ok(config)
}

fn run_build(config: &SiteConfig, args: &BuildArgs) -> Result<()> {
    let mut data = SiteData::load(&DataDir::new(&config.data_dir));
    if args.fetch_github {
        data.github = fetch_or_inline_error(config);
    }
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let report = build_site(config, &data, today).context("building site")?;
    println!(
        "wrote {} pages to {}",
        report.page_count(),
        report.out_dir.display()
    );
    Ok(())
}

/// A failed refresh during a build is shown on the github page instead of
/// failing the build.
fn fetch_or_inline_error(config: &SiteConfig) -> GithubActivity {
    let now = Utc::now();
    let result = GithubClient::new(&config.github)
        .and_then(|client| fetch_activity(&client, &config.github, now));
    match result {
        Ok(activity) => activity,
        Err(err) => {
            log::warn!("event=github_fetch module=cli status=error error={err}");
            GithubActivity::failed(err.to_string(), now.to_rfc3339())
        }
    }
}

fn run_fetch_github(config: &SiteConfig, output: Option<&Path>) -> Result<()> {
    if config.github.repositories.is_empty() {
        bail!("no github repositories configured");
    }
    let client = GithubClient::new(&config.github)?;
    let activity = fetch_activity(&client, &config.github, Utc::now())
        .context("fetching github activity")?;

    let path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| DataDir::new(&config.data_dir).path(DataFile::Github));
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(&activity)?;
    std::fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;
    println!(
        "{} commits across {} repositories written to {}",
        activity.total_commits,
        activity.repository_count,
        path.display()
    );
    Ok(())
}

fn run_query(config: &SiteConfig, args: &QueryArgs) -> Result<()> {
    let mut filter = RecordFilter::new()
        .with_tags(args.tags.iter().map(String::as_str))
        .with_date_range(DateRange::new(args.from, args.to));
    if let Some(search) = &args.search {
        filter = filter.with_query(search.as_str());
    }
    if let Some(category) = &args.category {
        filter = filter.with_category(category.as_str());
    }

    let dir = DataDir::new(&config.data_dir);
    let json = match args.domain {
        Domain::Thoughts => query::<Thought>(&dir, DataFile::Thoughts, &filter, args)?,
        Domain::Events => query::<Event>(&dir, DataFile::Events, &filter, args)?,
        Domain::Tasks => query::<Task>(&dir, DataFile::Tasks, &filter, args)?,
        Domain::Projects => query::<Project>(&dir, DataFile::Projects, &filter, args)?,
        Domain::Ideas => query::<Idea>(&dir, DataFile::Ideas, &filter, args)?,
        Domain::Blog => query::<BlogPost>(&dir, DataFile::Blog, &filter, args)?,
        Domain::Victories => query::<Milestone>(&dir, DataFile::Victories, &filter, args)?,
        Domain::Failures => query::<Milestone>(&dir, DataFile::Failures, &filter, args)?,
        Domain::BucketList => {
            let content: Vec<ContentEntry> = load_json_strict(&dir.path(DataFile::Content))?;
            let list = bucket_list_from_content(&content);
            render_matches(&list.items, &filter, args.oldest_first)?
        }
    };
    println!("{json}");
    Ok(())
}

fn query<T>(
    dir: &DataDir,
    file: DataFile,
    filter: &RecordFilter,
    args: &QueryArgs,
) -> Result<String>
where
    T: DeserializeOwned + Serialize + Filterable,
{
    let records: Vec<T> = load_json_strict(&dir.path(file))?;
    render_matches(&records, filter, args.oldest_first)
}

fn render_matches<T: Serialize + Filterable>(
    records: &[T],
    filter: &RecordFilter,
    oldest_first: bool,
) -> Result<String> {
    let mut matches = filter.apply(records);
    if oldest_first {
        sort_by_timestamp_asc(&mut matches);
    } else {
        sort_by_timestamp_desc(&mut matches);
    }
    log::info!(
        "event=query module=cli status=ok total={} matched={}",
        records.len(),
        matches.len()
    );
    Ok(serde_json::to_string_pretty(&matches)?)
}

fn run_slug(action: &SlugAction) -> Result<()> {
    match action {
        SlugAction::Encode { capture_id } => println!("{}", capture_slug(capture_id)),
        SlugAction::Decode { slug } => match parse_capture_slug(slug) {
            Some(capture_id) => println!("{capture_id}"),
            None => bail!("`{slug}` is not a valid thought slug"),
        },
    }
    Ok(())
}

fn parse_day(raw: &str) -> Result<NaiveDate, String> {
    parse_date(raw).ok_or_else(|| format!("`{raw}` is not a date (expected YYYY-MM-DD)"))
}
