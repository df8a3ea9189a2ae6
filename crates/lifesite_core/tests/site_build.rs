use chrono::NaiveDate;
use lifesite_core::util::slug::capture_slug;
use lifesite_core::{build_site, DataDir, Route, SiteConfig, SiteData};
use serde_json::json;
use std::fs;
use std::path::Path;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
}

fn config_for(root: &Path) -> SiteConfig {
    SiteConfig {
        data_dir: root.join("data"),
        out_dir: root.join("public"),
        site_title: "Test Site".to_string(),
        site_url: "https://site.test".to_string(),
        ..SiteConfig::default()
    }
}

fn read_route(config: &SiteConfig, route: &Route) -> String {
    fs::read_to_string(route.output_path(&config.out_dir)).unwrap()
}

#[test]
fn empty_data_dir_writes_every_route_with_empty_states() {
    let root = tempfile::tempdir().unwrap();
    let config = config_for(root.path());
    let data = SiteData::load(&DataDir::new(&config.data_dir));

    let report = build_site(&config, &data, today()).unwrap();
    assert_eq!(report.page_count(), Route::FIXED.len());
    for route in Route::FIXED.iter() {
        let page = read_route(&config, route);
        assert!(page.starts_with("<!DOCTYPE html>"), "{route:?}");
        assert!(page.contains("Test Site"), "{route:?}");
    }

    let expected = [
        (Route::Thoughts, "No thoughts found."),
        (Route::BucketList, "Nothing on the bucket list yet."),
        (Route::Dailies, "No dailies data available."),
        (Route::Communities, "No communities yet."),
        (Route::Principles, "No principles yet."),
        (Route::ProjectIdeas, "No project ideas yet."),
        (Route::Projects, "No active projects found"),
        (Route::Blog, "No blog posts yet."),
        (Route::ContentConsumed, "No books yet."),
        (Route::Github, "0 commits in the last year across 0 repositories"),
        (Route::Todos, "No tasks exported yet."),
        (Route::Financial, "No financial data yet."),
        (Route::Metrics, "No metrics recorded yet."),
        (Route::Events, "No travel events found."),
        (Route::Victories, "No victories recorded yet."),
        (Route::Standards, "No standards written yet."),
        (Route::LineDancing, "No dances yet."),
        (Route::Failures, "No failures recorded yet."),
        (Route::Anki, "No Anki reviews yet."),
        (Route::Map, "No thoughts with location data found."),
        (Route::WhereIveBeen, "No travel events found."),
    ];
    for (route, message) in expected {
        assert!(read_route(&config, &route).contains(message), "{route:?}");
    }
    assert!(read_route(&config, &Route::Dailies).contains("No habits tracked yet."));
}

#[test]
fn home_page_renders_home_content_and_section_links() {
    let root = tempfile::tempdir().unwrap();
    let config = config_for(root.path());
    let data = SiteData {
        content: serde_json::from_value(json!([
            {"id": "home-page", "title": "Home", "type": "page", "content": "# Welcome\n\nHello **there**."}
        ]))
        .unwrap(),
        ..SiteData::default()
    };
    build_site(&config, &data, today()).unwrap();

    let home = read_route(&config, &Route::Home);
    assert!(home.contains("<title>Test Site</title>"));
    assert!(home.contains("<strong class=\"font-semibold\">there</strong>"));
    assert!(home.contains("href=\"/bucket-list/\""));
    assert!(home.contains("href=\"/events/\""));
}

#[test]
fn thoughts_and_posts_get_their_own_pages() {
    let root = tempfile::tempdir().unwrap();
    let config = config_for(root.path());
    fs::create_dir_all(&config.data_dir).unwrap();
    fs::write(
        config.data_dir.join("thoughts.json"),
        json!([
            {"id": 1, "capture_id": "2024/03/01 run", "timestamp": "2024-03-01T07:00:00",
             "content": "Ran <five> km", "tags": "[\"Health\",\"public\"]"},
            {"id": 2, "capture_id": "read", "timestamp": "2024-03-02T07:00:00",
             "content": "Finished a book", "tags": "[\"books\"]"}
        ])
        .to_string(),
    )
    .unwrap();
    fs::write(
        config.data_dir.join("blog.json"),
        json!([{"id": "hello-world", "title": "Hello", "content": "# Hi\n\nFirst post."}])
            .to_string(),
    )
    .unwrap();

    let data = SiteData::load(&DataDir::new(&config.data_dir));
    let report = build_site(&config, &data, today()).unwrap();
    // Two thoughts, two visible tags, one post.
    assert_eq!(report.page_count(), Route::FIXED.len() + 5);

    let detail = read_route(&config, &Route::Thought(capture_slug("2024/03/01 run")));
    assert!(detail.contains("Ran &lt;five&gt; km"));
    assert!(detail.contains("hash-highlighted"));

    let tag_page = read_route(&config, &Route::ThoughtTag("health".to_string()));
    assert!(tag_page.contains("Ran &lt;five&gt; km"));
    assert!(!tag_page.contains("Finished a book"));
    assert!(!config
        .out_dir
        .join("thoughts/tags/public/index.html")
        .exists());

    let post = read_route(&config, &Route::BlogPost("hello-world".to_string()));
    assert!(post.contains("First post."));
    assert!(post.contains(
        "<meta property=\"og:url\" content=\"https://site.test/blog/hello-world/\">"
    ));
}

#[test]
fn resource_pages_render_their_snapshots() {
    let root = tempfile::tempdir().unwrap();
    let config = config_for(root.path());
    fs::create_dir_all(&config.data_dir).unwrap();
    let files = [
        (
            "victories.json",
            json!([{"id": 1, "date": "2024-02-01", "description": "Shipped **v1**"}]),
        ),
        (
            "failures.json",
            json!([{"id": 2, "date": "2024-01-10", "description": "Missed the deadline"}]),
        ),
        (
            "standards.json",
            json!({"title": "Standards", "content": "- Show up on time"}),
        ),
        (
            "line_dancing.json",
            json!({"dances_i_know": [{"name": "Copperhead Road"}], "dances_to_learn": []}),
        ),
        (
            "anki.json",
            json!([{"id": 1, "deck_name": "Spanish", "review_date": "2024-03-14T08:00:00",
                    "ease_button": 3, "time_spent_ms": 4000}]),
        ),
        (
            "events.json",
            json!([{"id": "e1", "title": "Lisbon trip", "event_type": "travel",
                    "start_date": "2024-02-10"}]),
        ),
    ];
    for (name, value) in files {
        fs::write(config.data_dir.join(name), value.to_string()).unwrap();
    }

    let data = SiteData::load(&DataDir::new(&config.data_dir));
    build_site(&config, &data, today()).unwrap();

    let victories = read_route(&config, &Route::Victories);
    assert!(victories.contains("id=\"victory-1\""));
    assert!(victories.contains("Shipped"));
    assert!(read_route(&config, &Route::Failures).contains("Missed the deadline"));
    assert!(read_route(&config, &Route::Standards).contains("Show up on time"));
    assert!(read_route(&config, &Route::LineDancing).contains("Copperhead Road"));
    assert!(read_route(&config, &Route::Anki).contains("Spanish"));
    assert!(read_route(&config, &Route::WhereIveBeen).contains("Lisbon trip"));
}

#[test]
fn rebuild_overwrites_previous_output() {
    let root = tempfile::tempdir().unwrap();
    let config = config_for(root.path());
    let empty = SiteData::default();
    build_site(&config, &empty, today()).unwrap();
    build_site(&config, &empty, today()).unwrap();
    assert!(config.out_dir.join("index.html").exists());
}
