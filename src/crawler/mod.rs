//! Crawler module for web page fetching and traversal
//!
//! This module contains the core crawling logic:
//! - HTTP fetching with per-page error classification
//! - HTML parsing and link extraction
//! - The frontier/visited-set traversal engine

mod engine;
mod fetcher;
mod parser;

pub use engine::CrawlEngine;
pub use fetcher::{build_http_client, fetch_page, FetchedPage, USER_AGENT};
pub use parser::{parse_html, ParsedPage};

use crate::config::CrawlConfig;
use crate::url::CanonicalUrl;
use chrono::NaiveDate;

/// Sentinel stored when a page has no usable `<title>`
pub const NO_TITLE_SENTINEL: &str = "No SEO title found";

/// Sentinel stored when a page has no `<h1>`
pub const NO_H1_SENTINEL: &str = "No H1 found";

/// Metadata captured for one successfully fetched page
///
/// Created exactly once, at fetch time, and immutable afterwards. A URL
/// that was visited but whose fetch failed has no record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRecord {
    /// Canonical URL of the page
    pub url: CanonicalUrl,

    /// `<title>` text, or [`NO_TITLE_SENTINEL`]
    pub seo_title: String,

    /// First `<h1>` text, or [`NO_H1_SENTINEL`]
    pub h1: String,

    /// Capture date
    pub crawled_on: NaiveDate,
}

/// Everything one crawl run produced; the emitters' sole input
#[derive(Debug, Clone)]
pub struct CrawlResult {
    /// The canonical seed URL
    pub seed: CanonicalUrl,

    /// Page records in visit order
    pub pages: Vec<PageRecord>,

    /// Every discovered URL in first-enqueue order, whether or not it was
    /// fetched before the budget ran out (the seed is not repeated here)
    pub discovered: Vec<CanonicalUrl>,
}

impl CrawlResult {
    /// Looks up the record for a URL, if its fetch succeeded
    pub fn record_for(&self, url: &CanonicalUrl) -> Option<&PageRecord> {
        self.pages.iter().find(|record| &record.url == url)
    }

    /// Seed plus all discovered URLs, seed first
    pub fn all_urls(&self) -> impl Iterator<Item = &CanonicalUrl> {
        std::iter::once(&self.seed).chain(self.discovered.iter())
    }
}

/// Runs a complete crawl with the given configuration
///
/// This is the main library entry point: it builds the engine, drives the
/// traversal to completion, and hands back the accumulated records and
/// discovered URL set for the output writers.
///
/// # Example
///
/// ```no_run
/// use seomap::config::CrawlConfig;
/// use seomap::crawler::crawl;
///
/// # async fn example() -> seomap::Result<()> {
/// let config = CrawlConfig::from_seed("example.com", 100, 1)?;
/// let result = crawl(config).await?;
/// println!("Visited {} pages", result.pages.len());
/// # Ok(())
/// # }
/// ```
pub async fn crawl(config: CrawlConfig) -> crate::Result<CrawlResult> {
    let engine = CrawlEngine::new(config)?;
    Ok(engine.run().await)
}
