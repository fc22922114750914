//! Configuration module for seomap
//!
//! Crawl configuration comes from the command line rather than a config
//! file; this module owns the types and the fatal startup validation.
//!
//! # Example
//!
//! ```
//! use seomap::config::CrawlConfig;
//!
//! let config = CrawlConfig::from_seed("example.com", 100, 1).unwrap();
//! assert_eq!(config.base_domain, "example.com");
//! ```

mod types;
pub(crate) mod validation;

// Re-export types
pub use types::{CrawlConfig, OutputConfig, OutputFormat, DEFAULT_REQUEST_TIMEOUT};

// Re-export validation helpers used by the CLI layer
pub use validation::ensure_scheme;
