//! Crawl engine - frontier/visited-set traversal
//!
//! Owns all mutable crawl state (frontier, visited set, record table) for
//! one run, so independent crawls can coexist in one process. The
//! traversal is sequential: one fetch in flight, a politeness delay
//! between fetches, and per-page failures logged and skipped.

use crate::config::CrawlConfig;
use crate::crawler::fetcher::{build_http_client, fetch_page};
use crate::crawler::{CrawlResult, PageRecord};
use crate::url::CanonicalUrl;
use crate::SeomapError;
use reqwest::Client;
use std::collections::{HashSet, VecDeque};

/// Crawl engine for a single run
///
/// Created in the idle state with the seed already queued; [`run`] drives
/// the traversal to completion and consumes the engine.
///
/// [`run`]: CrawlEngine::run
pub struct CrawlEngine {
    config: CrawlConfig,
    client: Client,

    /// URLs waiting to be fetched, FIFO. Dequeue order is not part of the
    /// crate's contract; only closure and the page budget are.
    frontier: VecDeque<CanonicalUrl>,

    /// Mirror of `frontier` for O(1) duplicate checks
    queued: HashSet<CanonicalUrl>,

    /// URLs already fetched, successfully or not. Never shrinks; gates
    /// both re-fetch and re-enqueue.
    visited: HashSet<CanonicalUrl>,

    /// Records in visit order
    pages: Vec<PageRecord>,

    /// Every link ever enqueued, in first-enqueue order (the seed is
    /// tracked separately)
    discovered: Vec<CanonicalUrl>,
}

impl CrawlEngine {
    /// Creates an engine for one crawl run
    ///
    /// Builds the HTTP client up front so client construction problems
    /// surface before any traversal state exists.
    pub fn new(config: CrawlConfig) -> Result<Self, SeomapError> {
        let client = build_http_client(config.request_timeout)?;

        let seed = config.seed.clone();
        let mut frontier = VecDeque::new();
        let mut queued = HashSet::new();
        frontier.push_back(seed.clone());
        queued.insert(seed);

        Ok(Self {
            config,
            client,
            frontier,
            queued,
            visited: HashSet::new(),
            pages: Vec::new(),
            discovered: Vec::new(),
        })
    }

    /// Runs the traversal to completion
    ///
    /// Loops while the frontier is non-empty and the page budget has
    /// room: dequeue, skip if already visited, mark visited, fetch. On
    /// success the page's record is stored and its links enqueued; on
    /// failure the condition is logged and the URL stays visited with no
    /// record, never retried this run. The configured delay runs between
    /// iterations and is skipped entirely when zero.
    ///
    /// The future is abortable at every await point, so a caller can race
    /// it against a shutdown signal; the per-request timeout bounds the
    /// in-flight fetch.
    pub async fn run(mut self) -> CrawlResult {
        let start_time = std::time::Instant::now();

        while self.visited.len() < self.config.max_pages {
            let Some(url) = self.dequeue() else {
                tracing::info!("Frontier is empty, crawl complete");
                break;
            };

            if self.visited.contains(&url) {
                continue;
            }
            self.visited.insert(url.clone());

            tracing::info!("Crawling: {}", url);

            match fetch_page(&self.client, &url, &self.config).await {
                Ok(fetched) => {
                    tracing::debug!(
                        "  SEO title: {} | H1: {}",
                        fetched.record.seo_title,
                        fetched.record.h1
                    );

                    for link in fetched.links {
                        self.enqueue(link);
                    }
                    self.pages.push(fetched.record);
                }
                Err(e) => {
                    tracing::warn!("Skipping page: {}", e);
                }
            }

            if !self.config.delay.is_zero() {
                tokio::time::sleep(self.config.delay).await;
            }
        }

        tracing::info!(
            "Crawl finished: {} pages visited, {} URLs discovered in {:?}",
            self.visited.len(),
            self.discovered.len(),
            start_time.elapsed()
        );

        CrawlResult {
            seed: self.config.seed,
            pages: self.pages,
            discovered: self.discovered,
        }
    }

    /// Removes one URL from the frontier and its dedupe mirror
    fn dequeue(&mut self) -> Option<CanonicalUrl> {
        let url = self.frontier.pop_front()?;
        self.queued.remove(&url);
        Some(url)
    }

    /// Adds a discovered link to the frontier unless it was already
    /// visited or is already queued
    fn enqueue(&mut self, url: CanonicalUrl) {
        if self.visited.contains(&url) || self.queued.contains(&url) {
            return;
        }

        self.queued.insert(url.clone());
        self.discovered.push(url.clone());
        self.frontier.push_back(url);
    }
}
