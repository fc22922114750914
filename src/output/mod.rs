//! Output module for persisting crawl results
//!
//! Two independent emitters transform the finished crawl into a document:
//! an XML sitemap (sitemaps.org schema with seo_title/h1 extensions) or a
//! CSV spreadsheet. Both are pure over the crawl result, with thin
//! file-writing wrappers.

mod csv_output;
mod xml;

pub use csv_output::{format_csv_sitemap, write_csv_sitemap, NOT_CRAWLED_SENTINEL};
pub use xml::{format_xml_sitemap, write_xml_sitemap, SITEMAP_NAMESPACE};

use crate::config::{OutputConfig, OutputFormat};
use crate::crawler::CrawlResult;
use thiserror::Error;

/// Errors that can occur while writing output
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("Failed to format output: {0}")]
    Format(String),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Writes the crawl result in the configured format
pub fn write_output(result: &CrawlResult, output: &OutputConfig) -> OutputResult<()> {
    match output.format {
        OutputFormat::Csv => write_csv_sitemap(result, &output.path),
        OutputFormat::Xml => write_xml_sitemap(result, &output.path),
    }
}
