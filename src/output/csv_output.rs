//! CSV sitemap emitter
//!
//! A pure transform from a crawl result to a spreadsheet-friendly table:
//! one row per canonical URL, sorted ascending, with sentinel values for
//! URLs that were discovered but never fetched.

use crate::crawler::CrawlResult;
use crate::output::OutputResult;
use crate::url::CanonicalUrl;
use chrono::Local;
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::Path;

/// Sentinel rendered for title/H1 of a URL without a record
pub const NOT_CRAWLED_SENTINEL: &str = "Not crawled";

/// One CSV data row; the serde renames produce the fixed header
#[derive(Debug, Serialize)]
struct CsvRow {
    #[serde(rename = "SEO Title")]
    seo_title: String,

    #[serde(rename = "H1")]
    h1: String,

    #[serde(rename = "Permalinks")]
    permalink: String,

    #[serde(rename = "Date Crawled")]
    date_crawled: String,
}

/// Formats a crawl result as a CSV document
///
/// Header row first (`SEO Title, H1, Permalinks, Date Crawled`), then one
/// row per canonical URL (seed plus everything discovered), sorted by URL
/// ascending. URLs without a record render the `Not crawled` sentinel and
/// the current date.
pub fn format_csv_sitemap(result: &CrawlResult) -> OutputResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    for row in build_rows(result) {
        writer.serialize(row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| crate::output::OutputError::Format(e.to_string()))?;

    String::from_utf8(bytes).map_err(|e| crate::output::OutputError::Format(e.to_string()))
}

/// Writes the CSV sitemap to a file
///
/// # Arguments
///
/// * `result` - The finished crawl
/// * `path` - Destination file path
pub fn write_csv_sitemap(result: &CrawlResult, path: &Path) -> OutputResult<()> {
    let mut writer = csv::Writer::from_path(path)?;

    for row in build_rows(result) {
        writer.serialize(row)?;
    }

    writer.flush()?;
    Ok(())
}

/// Builds the data rows, sorted by canonical URL
fn build_rows(result: &CrawlResult) -> Vec<CsvRow> {
    let today = Local::now().date_naive().format("%Y-%m-%d").to_string();

    // BTreeSet both dedupes and sorts ascending
    let urls: BTreeSet<&CanonicalUrl> = result.all_urls().collect();

    urls.into_iter()
        .map(|url| match result.record_for(url) {
            Some(record) => CsvRow {
                seo_title: record.seo_title.clone(),
                h1: record.h1.clone(),
                permalink: url.to_string(),
                date_crawled: record.crawled_on.format("%Y-%m-%d").to_string(),
            },
            None => CsvRow {
                seo_title: NOT_CRAWLED_SENTINEL.to_string(),
                h1: NOT_CRAWLED_SENTINEL.to_string(),
                permalink: url.to_string(),
                date_crawled: today.clone(),
            },
        })
        .collect()
}
