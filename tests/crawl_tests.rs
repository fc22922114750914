//! Integration tests for the crawler
//!
//! These tests use wiremock to stand up a mock website and exercise the
//! full crawl cycle end-to-end, including the output emitters.

use seomap::config::CrawlConfig;
use seomap::crawler::{crawl, CrawlEngine};
use seomap::output::{format_csv_sitemap, format_xml_sitemap};
use seomap::url::canonicalize;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a zero-delay test configuration seeded at the mock server
fn test_config(base_url: &str, max_pages: usize) -> CrawlConfig {
    CrawlConfig::from_seed(base_url, max_pages, 0).expect("valid test config")
}

/// Mounts a 200 text/html page at the given path
async fn mount_page(server: &MockServer, page_path: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_crawl_discovers_reachable_closure() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    // Seed page: a same-site link, its trailing-slash duplicate, an
    // external link, and a filtered asset
    mount_page(
        &mock_server,
        "/",
        r#"<html><head><title>Home</title></head><body>
        <h1>Welcome</h1>
        <a href="/about">About</a>
        <a href="/about/">About again</a>
        <a href="https://other.com/page">External</a>
        <a href="/file.pdf">Download</a>
        </body></html>"#
            .to_string(),
    )
    .await;

    mount_page(
        &mock_server,
        "/about",
        r#"<html><head><title>About</title></head><body><h1>About us</h1></body></html>"#
            .to_string(),
    )
    .await;

    // The asset link must be filtered before any request happens
    Mock::given(method("GET"))
        .and(path("/file.pdf"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let config = test_config(&base_url, 100);
    let result = crawl(config).await.expect("crawl failed");

    let mut crawled: Vec<&str> = result.pages.iter().map(|p| p.url.as_str()).collect();
    crawled.sort();

    let seed = canonicalize(&base_url);
    let about = canonicalize(&format!("{}/about", base_url));
    let mut expected = vec![seed.as_str(), about.as_str()];
    expected.sort();

    assert_eq!(crawled, expected);
    assert_eq!(result.discovered, vec![about]);
}

#[tokio::test]
async fn test_page_budget_bounds_visits() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    // Every page links to five more, far exceeding the budget
    let links: String = (0..5)
        .map(|i| format!(r#"<a href="/page{}">P{}</a>"#, i, i))
        .collect();

    mount_page(
        &mock_server,
        "/",
        format!("<html><head><title>Home</title></head><body>{}</body></html>", links),
    )
    .await;

    for i in 0..5 {
        mount_page(
            &mock_server,
            &format!("/page{}", i),
            format!("<html><head><title>Page {}</title></head><body>{}</body></html>", i, links),
        )
        .await;
    }

    let config = test_config(&base_url, 3);
    let result = crawl(config).await.expect("crawl failed");

    assert!(result.pages.len() <= 3);

    // No more requests than the budget allows
    let requests = mock_server.received_requests().await.unwrap();
    assert!(
        requests.len() <= 3,
        "expected at most 3 requests, saw {}",
        requests.len()
    );
}

#[tokio::test]
async fn test_failed_page_does_not_abort_crawl() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        r#"<html><head><title>Home</title></head><body>
        <a href="/missing">Broken</a>
        <a href="/good">Good</a>
        </body></html>"#
            .to_string(),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    mount_page(
        &mock_server,
        "/good",
        r#"<html><head><title>Good</title></head><body><h1>Still here</h1></body></html>"#
            .to_string(),
    )
    .await;

    let config = test_config(&base_url, 100);
    let result = crawl(config).await.expect("crawl failed");

    // The 404 page is discovered and visited, but has no record
    let missing = canonicalize(&format!("{}/missing", base_url));
    assert!(result.discovered.contains(&missing));
    assert!(result.record_for(&missing).is_none());

    // The crawl carried on past the failure
    let good = canonicalize(&format!("{}/good", base_url));
    assert!(result.record_for(&good).is_some());
    assert_eq!(result.pages.len(), 2);
}

#[tokio::test]
async fn test_woocommerce_urls_never_fetched_when_filtered() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        r#"<html><head><title>Shop</title></head><body>
        <a href="/cart/">Cart</a>
        <a href="/blog/post-1">Post</a>
        </body></html>"#
            .to_string(),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/cart"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    mount_page(
        &mock_server,
        "/blog/post-1",
        r#"<html><head><title>Post</title></head><body><h1>A post</h1></body></html>"#.to_string(),
    )
    .await;

    let mut config = test_config(&base_url, 100);
    config.filter_woocommerce = true;

    let result = crawl(config).await.expect("crawl failed");

    let cart = canonicalize(&format!("{}/cart", base_url));
    assert!(!result.discovered.contains(&cart));
    assert!(result
        .record_for(&canonicalize(&format!("{}/blog/post-1", base_url)))
        .is_some());
}

#[tokio::test]
async fn test_slow_page_times_out_and_crawl_continues() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        r#"<html><head><title>Home</title></head><body>
        <a href="/slow">Slow</a>
        <a href="/fast">Fast</a>
        </body></html>"#
            .to_string(),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html></html>")
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&mock_server)
        .await;

    mount_page(
        &mock_server,
        "/fast",
        r#"<html><head><title>Fast</title></head><body></body></html>"#.to_string(),
    )
    .await;

    let mut config = test_config(&base_url, 100);
    config.request_timeout = Duration::from_millis(250);

    let engine = CrawlEngine::new(config).expect("engine");
    let result = engine.run().await;

    let slow = canonicalize(&format!("{}/slow", base_url));
    assert!(result.record_for(&slow).is_none());
    assert!(result
        .record_for(&canonicalize(&format!("{}/fast", base_url)))
        .is_some());
}

#[tokio::test]
async fn test_sentinel_metadata_for_bare_pages() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        r#"<html><head></head><body><p>No title, no heading</p></body></html>"#.to_string(),
    )
    .await;

    let config = test_config(&base_url, 100);
    let result = crawl(config).await.expect("crawl failed");

    let record = result.record_for(&canonicalize(&base_url)).expect("record");
    assert_eq!(record.seo_title, "No SEO title found");
    assert_eq!(record.h1, "No H1 found");
}

#[tokio::test]
async fn test_csv_export_of_crawl_with_failure() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        r#"<html><head><title>Home</title></head><body>
        <h1>Welcome</h1>
        <a href="/broken">Broken</a>
        </body></html>"#
            .to_string(),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let config = test_config(&base_url, 100);
    let result = crawl(config).await.expect("crawl failed");

    let csv = format_csv_sitemap(&result).expect("csv");
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines[0], "SEO Title,H1,Permalinks,Date Crawled");
    assert_eq!(lines.len(), 3); // header + seed + broken

    // Rows sorted ascending: the seed sorts before /broken
    assert!(lines[1].contains("Home,Welcome,"));
    assert!(lines[2].starts_with("Not crawled,Not crawled,"));
    assert!(lines[2].contains("/broken"));
}

#[tokio::test]
async fn test_xml_export_of_crawl_with_failure() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        r#"<html><head><title>Home</title></head><body>
        <h1>Welcome</h1>
        <a href="/broken">Broken</a>
        </body></html>"#
            .to_string(),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let config = test_config(&base_url, 100);
    let result = crawl(config).await.expect("crawl failed");

    let xml = format_xml_sitemap(&result);

    // Every URL has a <loc>, fetched or not
    assert_eq!(xml.matches("<url>").count(), 2);
    assert!(xml.contains(&format!("<loc>{}</loc>", canonicalize(&base_url))));
    assert!(xml.contains(&format!(
        "<loc>{}</loc>",
        canonicalize(&format!("{}/broken", base_url))
    )));

    // Metadata only for the fetched page
    assert_eq!(xml.matches("<seo_title>").count(), 1);
    assert!(xml.contains("<seo_title>Home</seo_title>"));
    assert!(xml.contains("<h1>Welcome</h1>"));
}

#[tokio::test]
async fn test_links_back_to_seed_are_not_revisited() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        r#"<html><head><title>Home</title></head><body>
        <a href="/about">About</a>
        </body></html>"#
            .to_string(),
    )
    .await;

    mount_page(
        &mock_server,
        "/about",
        r#"<html><head><title>About</title></head><body>
        <a href="/">Home</a>
        <a href="/about">Self</a>
        </body></html>"#
            .to_string(),
    )
    .await;

    let config = test_config(&base_url, 100);
    let result = crawl(config).await.expect("crawl failed");

    assert_eq!(result.pages.len(), 2);

    // Each page was requested exactly once
    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
}
