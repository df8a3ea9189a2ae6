//! Shared HTML document around every page body.

use super::routes::Route;
use crate::config::SiteConfig;
use crate::render::html::escape_html;

/// Scrolls the element named by `location.hash` into view, opens enclosing
/// `<details>`, and highlights it for three seconds.
const HASH_HIGHLIGHT_SCRIPT: &str = r#"(function(){function highlight(){var id=decodeURIComponent(location.hash.replace(/^#\/?/,''));if(!id)return;var el=document.getElementById(id);if(!el)return;for(var p=el.closest('details');p;p=p.parentElement&&p.parentElement.closest('details')){p.open=true;}el.scrollIntoView({behavior:'smooth',block:'center'});el.classList.add('hash-highlighted');setTimeout(function(){el.classList.remove('hash-highlighted');},3000);}window.addEventListener('hashchange',highlight);window.addEventListener('DOMContentLoaded',highlight);})();"#;

const DEFAULT_POSTHOG_HOST: &str = "https://us.i.posthog.com";

/// Head metadata of one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub route: Route,
    pub title: String,
    pub description: String,
    /// `article` for single posts and thoughts, `website` otherwise.
    pub og_type: &'static str,
}

impl PageMeta {
    pub fn new(route: Route, description: impl Into<String>) -> Self {
        let og_type = match route {
            Route::Thought(_) | Route::BlogPost(_) => "article",
            _ => "website",
        };
        Self {
            title: route.label().to_string(),
            route,
            description: description.into(),
            og_type,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

/// Complete `<!DOCTYPE html>` document for `body`.
pub fn render_document(meta: &PageMeta, body: &str, config: &SiteConfig) -> String {
    let full_title = if meta.route == Route::Home {
        config.site_title.clone()
    } else {
        format!("{} - {}", meta.title, config.site_title)
    };
    let description = if meta.description.trim().is_empty() {
        config.description.as_str()
    } else {
        meta.description.as_str()
    };
    let url = format!("{}{}", config.base_url(), meta.route.href());

    let mut html = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str(
        "<meta charset=\"utf-8\">\n<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
    );
    html.push_str(&format!("<title>{}</title>\n", escape_html(&full_title)));
    html.push_str(&format!(
        "<meta name=\"description\" content=\"{}\">\n",
        escape_html(description)
    ));
    if !config.author.trim().is_empty() {
        html.push_str(&format!(
            "<meta name=\"author\" content=\"{}\">\n",
            escape_html(&config.author)
        ));
    }
    html.push_str(&format!("<link rel=\"canonical\" href=\"{}\">\n", escape_html(&url)));
    html.push_str(&format!(
        "<meta property=\"og:title\" content=\"{}\">\n<meta property=\"og:description\" content=\"{}\">\n<meta property=\"og:url\" content=\"{}\">\n<meta property=\"og:type\" content=\"{}\">\n<meta property=\"og:site_name\" content=\"{}\">\n<meta name=\"twitter:card\" content=\"summary\">\n",
        escape_html(&meta.title),
        escape_html(description),
        escape_html(&url),
        meta.og_type,
        escape_html(&config.site_title)
    ));
    html.push_str(
        "<link rel=\"icon\" href=\"/favicon.ico\">\n<link rel=\"stylesheet\" href=\"/styles.css\">\n",
    );
    html.push_str(&format!("<script>{HASH_HIGHLIGHT_SCRIPT}</script>\n"));
    if let Some(beacon) = analytics_beacon(config) {
        html.push_str(&beacon);
    }
    html.push_str("</head>\n<body class=\"min-h-screen bg-bg\">\n");
    html.push_str(&navigation(&meta.route, config));
    html.push_str(&format!(
        "<main class=\"max-w-7xl mx-auto py-6 sm:px-6 lg:px-8\"><div class=\"px-4 py-6 sm:px-0\"><h1 class=\"text-3xl font-bold mb-6\">{}</h1>\n",
        escape_html(&meta.title)
    ));
    html.push_str(body);
    html.push_str("\n</div></main>\n</body>\n</html>\n");
    html
}

fn navigation(current: &Route, config: &SiteConfig) -> String {
    let section = current.section();
    let mut html = format!(
        "<nav class=\"site-nav sticky top-0\"><a class=\"text-xl font-bold\" href=\"/\">{}</a><ul class=\"flex flex-wrap gap-4\">",
        escape_html(&config.site_title)
    );
    for route in Route::FIXED.iter().filter(|route| **route != Route::Home) {
        let active = if *route == section {
            " class=\"active\" aria-current=\"page\""
        } else {
            ""
        };
        html.push_str(&format!(
            "<li><a href=\"{}\"{active}>{}</a></li>",
            route.href(),
            route.label()
        ));
    }
    html.push_str("</ul></nav>\n");
    html
}

fn analytics_beacon(config: &SiteConfig) -> Option<String> {
    if !config.analytics.is_enabled() {
        return None;
    }
    let key = config.analytics.posthog_key.as_deref()?.trim();
    let host = config
        .analytics
        .posthog_host
        .as_deref()
        .map(str::trim)
        .filter(|host| !host.is_empty())
        .unwrap_or(DEFAULT_POSTHOG_HOST)
        .trim_end_matches('/');
    let key = serde_json::to_string(key).ok()?;
    let host = serde_json::to_string(host).ok()?;
    Some(format!(
        "<script>!function(w,d){{var s=d.createElement('script');s.async=true;s.src={host}.replace('.i.posthog.com','-assets.i.posthog.com')+'/static/array.js';s.onload=function(){{w.posthog.init({key},{{api_host:{host},capture_pageview:true}});}};d.head.appendChild(s);}}(window,document);</script>\n"
    ))
}
