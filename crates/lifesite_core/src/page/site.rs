//! Static site build.
//!
//! # Responsibility
//! - Bind each route to its renderer and the loaded snapshots.
//! - Write one `index.html` per route under the configured output dir.
//!
//! # Invariants
//! - Every fixed route is written, including when every snapshot is empty.
//! - Dynamic pages are written once per distinct route.
//! - A failed write aborts the build; no partial report is returned.

use super::layout::{render_document, PageMeta};
use super::routes::Route;
use crate::config::{ConfigError, SiteConfig};
use crate::data::SiteData;
use crate::filter::{tag_counts, ExpansionState, RecordFilter, ViewState};
use crate::model::content::{ABOUT_CONTENT_ID, HOME_CONTENT_ID};
use crate::model::find_content;
use crate::model::thought::PUBLIC_TAG;
use crate::render::html::{empty_state, escape_html};
use crate::render::{
    render_anki, render_blog, render_blog_post, render_books, render_bucket_list,
    render_communities, render_dailies, render_events, render_financial, render_github,
    render_habits, render_ideas, render_line_dancing, render_metrics, render_milestones,
    render_principles, render_projects, render_standards, render_thought_detail,
    render_thought_locations, render_thoughts, render_todos, MilestoneKind, RenderContext,
};
use crate::util::markdown::format_markdown;
use crate::util::slug::capture_slug;
use crate::util::text::truncate_text;
use chrono::NaiveDate;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const DESCRIPTION_MAX_CHARS: usize = 160;

#[derive(Debug)]
pub enum BuildError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Config(ConfigError),
}

impl Display for BuildError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to write `{}`: {source}", path.display())
            }
            Self::Config(err) => write!(f, "{err}"),
        }
    }
}

impl Error for BuildError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Config(err) => Some(err),
        }
    }
}

impl From<ConfigError> for BuildError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

/// Pages written by one build, in write order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub out_dir: PathBuf,
    pub pages: Vec<PathBuf>,
}

impl BuildReport {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

/// Renders and writes every page of the site.
pub struct SiteBuilder<'a> {
    config: &'a SiteConfig,
    data: &'a SiteData,
    ctx: RenderContext,
}

impl<'a> SiteBuilder<'a> {
    pub fn new(config: &'a SiteConfig, data: &'a SiteData, today: NaiveDate) -> Self {
        Self {
            config,
            data,
            ctx: RenderContext::new(today),
        }
    }

    /// Every route this build writes: fixed routes in navigation order,
    /// then thought details, thought tags and blog posts.
    pub fn routes(&self) -> Vec<Route> {
        let mut routes: Vec<Route> = Route::FIXED.to_vec();
        let mut seen: HashSet<Route> = routes.iter().cloned().collect();

        let thought_routes = self
            .data
            .thoughts
            .iter()
            .map(|thought| thought.anchor_key())
            .filter(|key| !key.trim().is_empty())
            .map(|key| Route::Thought(capture_slug(key)));
        let tag_routes = tag_counts(&self.data.thoughts)
            .into_iter()
            .filter(|(tag, _)| tag != PUBLIC_TAG)
            .map(|(tag, _)| Route::ThoughtTag(tag));
        let post_routes = self
            .data
            .blog
            .iter()
            .filter(|post| !post.id.trim().is_empty())
            .map(|post| Route::BlogPost(post.id.clone()));

        for route in thought_routes.chain(tag_routes).chain(post_routes) {
            if seen.insert(route.clone()) {
                routes.push(route);
            }
        }
        routes
    }

    /// Full HTML document for `route`.
    pub fn render_page(&self, route: &Route) -> String {
        let (meta, body) = self.page(route);
        render_document(&meta, &body, self.config)
    }

    pub fn build(&self) -> Result<BuildReport, BuildError> {
        self.config.validate()?;
        let out_dir = self.config.out_dir.clone();
        create_dir(&out_dir)?;

        let mut pages = Vec::new();
        for route in self.routes() {
            let path = route.output_path(&out_dir);
            if let Some(parent) = path.parent() {
                create_dir(parent)?;
            }
            let html = self.render_page(&route);
            std::fs::write(&path, html).map_err(|source| BuildError::Io {
                path: path.clone(),
                source,
            })?;
            log::debug!(
                "event=page_write module=page status=ok route={}",
                route.href()
            );
            pages.push(path);
        }

        log::info!(
            "event=site_build module=page status=ok out_dir={} pages={}",
            out_dir.display(),
            pages.len()
        );
        Ok(BuildReport { out_dir, pages })
    }

    fn page(&self, route: &Route) -> (PageMeta, String) {
        let data = self.data;
        let ctx = &self.ctx;
        let view = ViewState::default();
        match route {
            Route::Home => (
                PageMeta::new(route.clone(), self.config.description.clone())
                    .with_title(self.config.site_title.clone()),
                self.home_body(),
            ),
            Route::Thoughts => (
                PageMeta::new(route.clone(), "Short captured thoughts."),
                render_thoughts(&data.thoughts, &view, ctx),
            ),
            Route::Thought(slug) => {
                let thought = data
                    .thoughts
                    .iter()
                    .find(|thought| capture_slug(thought.anchor_key()) == *slug);
                match thought {
                    Some(thought) => (
                        PageMeta::new(
                            route.clone(),
                            truncate_text(&thought.content, DESCRIPTION_MAX_CHARS),
                        ),
                        render_thought_detail(thought, ctx),
                    ),
                    None => (
                        PageMeta::new(route.clone(), ""),
                        empty_state("Thought not found."),
                    ),
                }
            }
            Route::ThoughtTag(tag) => {
                let view = ViewState::with_filter(RecordFilter::new().with_tag(tag));
                (
                    PageMeta::new(route.clone(), format!("Thoughts tagged {tag}."))
                        .with_title(format!("Thoughts tagged #{tag}")),
                    render_thoughts(&data.thoughts, &view, ctx),
                )
            }
            Route::BucketList => (
                PageMeta::new(route.clone(), "Things to do before the end."),
                render_bucket_list(&data.bucket_list(), &view, ctx),
            ),
            Route::Dailies => (
                PageMeta::new(route.clone(), "Daily writing and habit tracking."),
                format!(
                    "{}<section class=\"mt-8\"><h2 class=\"text-xl font-semibold mb-4\">Habit Tracking</h2>{}</section>",
                    render_dailies(&data.dailies, &view, ctx),
                    render_habits(&data.habits, &view, ctx)
                ),
            ),
            Route::Communities => (
                PageMeta::new(route.clone(), "Communities and affiliation."),
                render_communities(&data.communities, &view, ctx),
            ),
            Route::Principles => (
                PageMeta::new(route.clone(), "Principles, nested by parent."),
                render_principles(
                    &data.principles,
                    &ViewState {
                        expanded: ExpansionState::expand_all(),
                        ..ViewState::default()
                    },
                    ctx,
                ),
            ),
            Route::ProjectIdeas => (
                PageMeta::new(route.clone(), "Ideas for future projects."),
                render_ideas(&data.ideas, &view, ctx),
            ),
            Route::Projects => (
                PageMeta::new(route.clone(), "Projects in progress."),
                render_projects(&data.projects, &view, ctx),
            ),
            Route::Blog => (
                PageMeta::new(route.clone(), "Longer writing."),
                render_blog(&data.blog, &view, ctx),
            ),
            Route::BlogPost(id) => match data.blog.iter().find(|post| post.id == *id) {
                Some(post) => (
                    PageMeta::new(route.clone(), post.seo_description())
                        .with_title(post.seo_title()),
                    render_blog_post(post, ctx),
                ),
                None => (
                    PageMeta::new(route.clone(), ""),
                    empty_state("Post not found."),
                ),
            },
            Route::ContentConsumed => (
                PageMeta::new(route.clone(), "Books and reading notes."),
                render_books(&data.books, &data.export_metadata, &view, ctx),
            ),
            Route::Github => (
                PageMeta::new(route.clone(), "Commit activity over the last year."),
                render_github(&data.github, &view, ctx),
            ),
            Route::Todos => (
                PageMeta::new(route.clone(), "Task completion and urgency."),
                render_todos(&data.tasks, &view, ctx),
            ),
            Route::Financial => (
                PageMeta::new(route.clone(), "Monthly income and expenses."),
                render_financial(&data.financial, &view, ctx),
            ),
            Route::Metrics => (
                PageMeta::new(route.clone(), "Health and activity metrics."),
                render_metrics(&data.metrics, &view, ctx),
            ),
            Route::Events => (
                PageMeta::new(route.clone(), "Past and upcoming events."),
                render_events(&data.events, &view, ctx),
            ),
            Route::Victories => (
                PageMeta::new(route.clone(), "Wins worth remembering."),
                render_milestones(&data.victories, MilestoneKind::Victory, &view, ctx),
            ),
            Route::Standards => (
                PageMeta::new(route.clone(), "Standards I hold myself to."),
                render_standards(&data.standards, &view, ctx),
            ),
            Route::LineDancing => (
                PageMeta::new(route.clone(), "Dances I know and dances to learn."),
                render_line_dancing(&data.line_dancing, &view, ctx),
            ),
            Route::Failures => (
                PageMeta::new(route.clone(), "Failures and what they taught."),
                render_milestones(&data.failures, MilestoneKind::Failure, &view, ctx),
            ),
            Route::Anki => (
                PageMeta::new(route.clone(), "Flashcard review statistics."),
                render_anki(&data.anki, &view, ctx),
            ),
            Route::Map => (
                PageMeta::new(route.clone(), "Where thoughts were captured."),
                render_thought_locations(&data.thoughts, &view, ctx),
            ),
            Route::WhereIveBeen => (
                PageMeta::new(
                    route.clone(),
                    "Travel events, conferences, and places I've visited.",
                ),
                render_events(&data.events, &view, ctx),
            ),
        }
    }

    fn section_count(&self, route: &Route) -> Option<usize> {
        let data = self.data;
        let count = match route {
            Route::Thoughts => data.thoughts.len(),
            Route::BucketList => data.bucket_list().items.len(),
            Route::Dailies => data.dailies.len(),
            Route::Communities => data.communities.len(),
            Route::Principles => data.principles.len(),
            Route::ProjectIdeas => data.ideas.len(),
            Route::Projects => data.projects.len(),
            Route::Blog => data.blog.len(),
            Route::ContentConsumed => data.books.len(),
            Route::Github => data.github.heatmap_data.len(),
            Route::Todos => data.tasks.len(),
            Route::Financial => data.financial.len(),
            Route::Metrics => data.metrics.len(),
            Route::Events | Route::WhereIveBeen => data.events.len(),
            Route::Victories => data.victories.len(),
            Route::Failures => data.failures.len(),
            Route::LineDancing => {
                data.line_dancing.dances_i_know.len() + data.line_dancing.dances_to_learn.len()
            }
            Route::Anki => data.anki.len(),
            _ => return None,
        };
        Some(count)
    }

    fn home_body(&self) -> String {
        let mut html = String::new();
        if let Some(entry) = find_content(&self.data.content, HOME_CONTENT_ID) {
            html.push_str(&format!(
                "<section id=\"home\" class=\"prose max-w-none mb-8\">{}</section>",
                format_markdown(&entry.content)
            ));
        }
        html.push_str("<div class=\"grid grid-cols-1 md:grid-cols-3 gap-4\">");
        for route in Route::FIXED.iter().filter(|route| **route != Route::Home) {
            let count = self
                .section_count(route)
                .map(|count| format!("<p class=\"text-sm text-subtext0\">{count} records</p>"))
                .unwrap_or_default();
            html.push_str(&format!(
                "<a class=\"card p-4 block\" href=\"{}\"><h2 class=\"text-lg font-semibold\">{}</h2>{count}</a>",
                route.href(),
                escape_html(route.label())
            ));
        }
        html.push_str("</div>");
        if let Some(entry) = find_content(&self.data.content, ABOUT_CONTENT_ID) {
            html.push_str(&format!(
                "<section id=\"about\" class=\"prose max-w-none mt-8\">{}</section>",
                format_markdown(&entry.content)
            ));
        }
        html
    }
}

/// Builds the whole site into `config.out_dir`.
pub fn build_site(
    config: &SiteConfig,
    data: &SiteData,
    today: NaiveDate,
) -> Result<BuildReport, BuildError> {
    SiteBuilder::new(config, data, today).build()
}

fn create_dir(path: &Path) -> Result<(), BuildError> {
    std::fs::create_dir_all(path).map_err(|source| BuildError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BlogPost, Thought};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    fn thought(capture_id: &str, tags: &str) -> Thought {
        Thought {
            id: capture_id.to_string(),
            capture_id: capture_id.to_string(),
            content: format!("content of {capture_id}"),
            tags: Some(tags.to_string()),
            ..Thought::default()
        }
    }

    #[test]
    fn routes_include_dynamic_pages_once() {
        let config = SiteConfig::default();
        let data = SiteData {
            thoughts: vec![
                thought("cap-1", r#"["Rust","public"]"#),
                thought("cap-1", r#"["rust"]"#),
            ],
            blog: vec![BlogPost {
                id: "post-1".to_string(),
                ..BlogPost::default()
            }],
            ..SiteData::default()
        };
        let routes = SiteBuilder::new(&config, &data, today()).routes();

        assert_eq!(routes.len(), Route::FIXED.len() + 3);
        assert!(routes.contains(&Route::Thought(capture_slug("cap-1"))));
        assert!(routes.contains(&Route::ThoughtTag("rust".to_string())));
        assert!(!routes.contains(&Route::ThoughtTag("public".to_string())));
        assert!(routes.contains(&Route::BlogPost("post-1".to_string())));
    }

    #[test]
    fn missing_thought_renders_not_found() {
        let config = SiteConfig::default();
        let data = SiteData::default();
        let html = SiteBuilder::new(&config, &data, today())
            .render_page(&Route::Thought("nope".to_string()));
        assert!(html.contains("Thought not found."));
    }

    #[test]
    fn build_rejects_invalid_config() {
        let mut config = SiteConfig::default();
        config.out_dir = config.data_dir.clone();
        let err = build_site(&config, &SiteData::default(), today()).unwrap_err();
        assert!(matches!(err, BuildError::Config(_)));
    }
}
