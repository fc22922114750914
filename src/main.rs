//! Seomap main entry point
//!
//! Command-line interface for the seomap sitemap crawler.

use clap::Parser;
use seomap::config::{CrawlConfig, OutputConfig, OutputFormat};
use seomap::crawler::crawl;
use seomap::output::write_output;
use tracing_subscriber::EnvFilter;

/// Seomap: an SEO sitemap crawler
///
/// Crawls a website starting from a seed URL, collects every same-site
/// page reachable by following links, extracts SEO titles and H1 tags,
/// and writes an XML sitemap or a CSV spreadsheet.
#[derive(Parser, Debug)]
#[command(name = "seomap")]
#[command(version)]
#[command(about = "Generate an XML or CSV sitemap with SEO titles and H1 tags", long_about = None)]
struct Cli {
    /// Website URL to crawl (https:// is assumed when no scheme is given)
    #[arg(value_name = "URL")]
    url: String,

    /// Maximum number of pages to crawl
    #[arg(long, default_value_t = 1000)]
    max_pages: usize,

    /// Delay between requests, in seconds
    #[arg(long, default_value_t = 1)]
    delay: u64,

    /// Skip WooCommerce action URLs (cart, checkout, wishlist, ...)
    #[arg(long)]
    ignore_woocommerce: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "csv")]
    format: OutputFormat,

    /// Output filename; the format's extension is appended when missing
    #[arg(short, long)]
    output: Option<String>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    // All configuration validation happens here, before any network
    // activity; an invalid seed or budget never starts a crawl
    let mut config = CrawlConfig::from_seed(&cli.url, cli.max_pages, cli.delay)?;
    config.filter_woocommerce = cli.ignore_woocommerce;

    let filename = cli
        .output
        .unwrap_or_else(|| cli.format.default_filename());
    let output = OutputConfig::new(cli.format, &filename);

    tracing::info!(
        "Crawling {} (max {} pages, {}s delay)",
        config.seed,
        config.max_pages,
        cli.delay
    );
    if config.filter_woocommerce {
        tracing::info!("Ignoring WooCommerce URLs (cart, checkout, wishlist, ...)");
    }

    let result = tokio::select! {
        result = crawl(config) => result?,
        _ = tokio::signal::ctrl_c() => {
            tracing::warn!("Interrupted, aborting crawl");
            anyhow::bail!("crawl aborted before completion");
        }
    };

    write_output(&result, &output)?;

    println!("Sitemap generated: {}", output.path.display());
    println!("Total URLs found: {}", result.all_urls().count());
    println!("Pages crawled: {}", result.pages.len());

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("seomap=info,warn"),
            1 => EnvFilter::new("seomap=debug,info"),
            2 => EnvFilter::new("seomap=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
