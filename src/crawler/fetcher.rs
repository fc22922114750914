//! HTTP fetcher implementation
//!
//! One GET per page with a browser-like user agent and a bounded timeout.
//! Fetch failures come back as [`FetchError`] values; the engine treats
//! every one of them as recoverable and moves on to the next URL.

use crate::config::CrawlConfig;
use crate::crawler::parser::parse_html;
use crate::crawler::{PageRecord, NO_H1_SENTINEL, NO_TITLE_SENTINEL};
use crate::url::{canonicalize, is_crawlable, same_site, CanonicalUrl};
use crate::FetchError;
use chrono::Local;
use reqwest::Client;
use std::collections::HashSet;
use std::time::Duration;

/// Identifying header sent with every request
///
/// Matches what a desktop browser sends; some sites serve crawlers a
/// stripped or blocked response otherwise.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// A successfully fetched page: its record plus the same-site links found
/// on it
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Metadata captured for this page
    pub record: PageRecord,

    /// Canonical same-site links in first-seen order, deduplicated
    pub links: Vec<CanonicalUrl>,
}

/// Builds the HTTP client used for the whole crawl
///
/// # Arguments
///
/// * `timeout` - Per-request timeout from the crawl configuration
pub fn build_http_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches one page and extracts its metadata and outbound links
///
/// Issues a single GET (redirects followed by the client). A transport
/// failure or timeout maps to [`FetchError::Transport`] /
/// [`FetchError::Timeout`]; a non-2xx status to
/// [`FetchError::HttpStatus`]. On success the body is parsed for title,
/// first H1 and anchors; absent or empty title/H1 degrade to sentinel
/// values rather than failing the page.
///
/// Discovered hrefs are resolved against the final page URL, then
/// canonicalized and kept only when both the domain scoper and the link
/// filter accept them; duplicates within one page are dropped, preserving
/// first-seen order.
pub async fn fetch_page(
    client: &Client,
    url: &CanonicalUrl,
    config: &CrawlConfig,
) -> Result<FetchedPage, FetchError> {
    let response = client
        .get(url.as_str())
        .send()
        .await
        .map_err(|e| classify_transport_error(url, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    // Relative hrefs resolve against where the page actually came from,
    // which may differ from the requested URL after redirects
    let final_url = response.url().clone();

    let body = response
        .text()
        .await
        .map_err(|e| classify_transport_error(url, e))?;

    let parsed = parse_html(&body, &final_url);

    let record = PageRecord {
        url: url.clone(),
        seo_title: parsed.title.unwrap_or_else(|| NO_TITLE_SENTINEL.to_string()),
        h1: parsed.h1.unwrap_or_else(|| NO_H1_SENTINEL.to_string()),
        crawled_on: Local::now().date_naive(),
    };

    let links = collect_site_links(parsed.links, config);

    Ok(FetchedPage { record, links })
}

/// Canonicalizes raw hrefs and keeps the crawlable same-site ones,
/// deduplicated in first-seen order
fn collect_site_links(raw_links: Vec<String>, config: &CrawlConfig) -> Vec<CanonicalUrl> {
    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for href in raw_links {
        let canonical = canonicalize(&href);

        if !same_site(&canonical, &config.base_domain) {
            tracing::trace!("Dropping off-site link: {}", canonical);
            continue;
        }

        if !is_crawlable(&canonical, config) {
            tracing::trace!("Dropping filtered link: {}", canonical);
            continue;
        }

        if seen.insert(canonical.clone()) {
            links.push(canonical);
        }
    }

    links
}

/// Maps a reqwest error onto the fetch error taxonomy
fn classify_transport_error(url: &CanonicalUrl, error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
        }
    } else {
        FetchError::Transport {
            url: url.to_string(),
            source: error,
        }
    }
}
