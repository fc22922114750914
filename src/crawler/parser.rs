//! HTML extraction for the fetcher
//!
//! Pulls the three things the crawl cares about out of a page body: the
//! `<title>` text, the first `<h1>` text, and every anchor href resolved
//! to an absolute URL.

use scraper::{Html, Selector};
use url::Url;

/// Extracted information from an HTML page
#[derive(Debug, Clone)]
pub struct ParsedPage {
    /// The page title (from the first `<title>` tag), trimmed; `None`
    /// when absent or empty
    pub title: Option<String>,

    /// The first `<h1>` text, trimmed; `None` when absent or empty
    pub h1: Option<String>,

    /// All anchor links found on the page, as absolute URLs
    pub links: Vec<String>,
}

/// Parses HTML content and extracts metadata and links
///
/// Extraction is pure given the body bytes; scraper is lenient, so even
/// badly malformed HTML yields a document and the absent-element cases
/// simply come back as `None`.
///
/// # Arguments
///
/// * `html` - The HTML content to parse
/// * `base_url` - The page's own URL, for resolving relative hrefs
pub fn parse_html(html: &str, base_url: &Url) -> ParsedPage {
    let document = Html::parse_document(html);

    ParsedPage {
        title: extract_first_text(&document, "title"),
        h1: extract_first_text(&document, "h1"),
        links: extract_links(&document, base_url),
    }
}

/// Extracts the trimmed text of the first element matching a selector
fn extract_first_text(document: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;

    document
        .select(&selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
}

/// Extracts all followable anchor hrefs from the document
fn extract_links(document: &Html, base_url: &Url) -> Vec<String> {
    let mut links = Vec::new();

    if let Ok(selector) = Selector::parse("a[href]") {
        for element in document.select(&selector) {
            if let Some(href) = element.value().attr("href") {
                if let Some(absolute) = resolve_link(href, base_url) {
                    links.push(absolute);
                }
            }
        }
    }

    links
}

/// Resolves an href against the page URL and drops unfollowable links
///
/// Returns `None` for empty hrefs, `javascript:`/`mailto:`/`tel:`/`data:`
/// pseudo-links, pure-fragment anchors, and anything that fails to
/// resolve to an http(s) URL.
fn resolve_link(href: &str, base_url: &Url) -> Option<String> {
    let href = href.trim();

    if href.is_empty() {
        return None;
    }

    if href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("data:")
    {
        return None;
    }

    if href.starts_with('#') {
        return None;
    }

    match base_url.join(href) {
        Ok(absolute) => {
            if absolute.scheme() == "http" || absolute.scheme() == "https" {
                Some(absolute.to_string())
            } else {
                None
            }
        }
        Err(_) => None,
    }
}
