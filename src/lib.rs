//! Seomap: an SEO sitemap crawler
//!
//! This crate crawls a single website starting from a seed URL, collects
//! every same-site page reachable by following links, extracts each page's
//! SEO title and first H1, and writes the result as an XML sitemap or a
//! CSV spreadsheet.

pub mod config;
pub mod crawler;
pub mod output;
pub mod url;

use thiserror::Error;

/// Main error type for seomap operations
#[derive(Debug, Error)]
pub enum SeomapError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
///
/// These are fatal at startup and are surfaced before any network activity.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid seed URL '{url}': {message}")]
    InvalidSeedUrl { url: String, message: String },

    #[error("Seed URL '{0}' has no host")]
    MissingHost(String),

    #[error("Unsupported URL scheme '{0}': only http and https are crawlable")]
    UnsupportedScheme(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Per-page fetch errors
///
/// Every variant is recoverable at the crawl engine: the page is logged,
/// left without a record, and the traversal continues.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("{url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },
}

/// Result type alias for seomap operations
pub type Result<T> = std::result::Result<T, SeomapError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::{CrawlConfig, OutputConfig, OutputFormat};
pub use crawler::{crawl, CrawlEngine, CrawlResult, PageRecord};
pub use url::{canonicalize, is_crawlable, same_site, CanonicalUrl};
