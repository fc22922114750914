//! XML sitemap emitter
//!
//! A pure transform from a crawl result to a sitemaps.org `<urlset>`
//! document. The `<seo_title>` and `<h1>` children are a deliberate
//! extension of the standard schema for SEO workflows.

use crate::crawler::{CrawlResult, PageRecord};
use crate::output::OutputResult;
use crate::url::CanonicalUrl;
use chrono::Local;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Namespace of the standard sitemap schema
pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Formats a crawl result as an XML sitemap
///
/// The seed URL comes first, followed by every discovered URL in
/// first-enqueue order. Each `<url>` always carries `<loc>` and
/// `<lastmod>`; `<seo_title>` and `<h1>` appear only when the page was
/// actually fetched. URLs discovered but never fetched (over budget, or
/// the fetch failed) get the current date as `<lastmod>`.
pub fn format_xml_sitemap(result: &CrawlResult) -> String {
    let mut xml = String::new();
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str(&format!("<urlset xmlns=\"{}\">\n", SITEMAP_NAMESPACE));

    for url in result.all_urls() {
        push_url_element(&mut xml, url, result.record_for(url));
    }

    xml.push_str("</urlset>\n");
    xml
}

/// Writes the XML sitemap to a file
///
/// # Arguments
///
/// * `result` - The finished crawl
/// * `path` - Destination file path
pub fn write_xml_sitemap(result: &CrawlResult, path: &Path) -> OutputResult<()> {
    let xml = format_xml_sitemap(result);

    let mut file = File::create(path)?;
    file.write_all(xml.as_bytes())?;

    Ok(())
}

/// Appends one `<url>` element
fn push_url_element(xml: &mut String, url: &CanonicalUrl, record: Option<&PageRecord>) {
    xml.push_str("  <url>\n");
    xml.push_str(&format!("    <loc>{}</loc>\n", xml_escape(url.as_str())));

    if let Some(record) = record {
        xml.push_str(&format!(
            "    <seo_title>{}</seo_title>\n",
            xml_escape(&record.seo_title)
        ));
        xml.push_str(&format!("    <h1>{}</h1>\n", xml_escape(&record.h1)));
    }

    let lastmod = match record {
        Some(record) => record.crawled_on.format("%Y-%m-%d").to_string(),
        None => Local::now().date_naive().format("%Y-%m-%d").to_string(),
    };
    xml.push_str(&format!("    <lastmod>{}</lastmod>\n", lastmod));

    xml.push_str("  </url>\n");
}

/// Escapes text for use inside an XML element
fn xml_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }

    escaped
}
