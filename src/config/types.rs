use crate::url::CanonicalUrl;
use crate::ConfigResult;
use std::path::PathBuf;
use std::time::Duration;

/// Default per-request timeout
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for a single crawl run
///
/// Immutable for the lifetime of one crawl. Built through
/// [`CrawlConfig::from_seed`], which performs all fatal validation before
/// any network activity.
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Canonical seed URL the traversal starts from
    pub seed: CanonicalUrl,

    /// Bare base domain derived from the seed (leading `www.` stripped)
    pub base_domain: String,

    /// Maximum number of pages to visit
    pub max_pages: usize,

    /// Delay between consecutive requests
    pub delay: Duration,

    /// Per-request timeout
    pub request_timeout: Duration,

    /// Whether to drop WooCommerce action URLs (cart, checkout, ...)
    pub filter_woocommerce: bool,
}

impl CrawlConfig {
    /// Builds a validated crawl configuration from a raw seed URL
    ///
    /// `https://` is prefixed automatically when the seed carries no
    /// scheme. Fails with a [`crate::ConfigError`] on an unparseable seed,
    /// a missing host, a non-http(s) scheme, or a zero page budget.
    ///
    /// # Arguments
    ///
    /// * `raw_url` - Seed URL as the user typed it
    /// * `max_pages` - Page budget, must be positive
    /// * `delay_secs` - Politeness delay between requests, in seconds
    pub fn from_seed(raw_url: &str, max_pages: usize, delay_secs: u64) -> ConfigResult<Self> {
        crate::config::validation::validate_max_pages(max_pages)?;

        let with_scheme = crate::config::validation::ensure_scheme(raw_url);
        let (seed, base_domain) = crate::config::validation::parse_seed(&with_scheme)?;

        Ok(Self {
            seed,
            base_domain,
            max_pages,
            delay: Duration::from_secs(delay_secs),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            filter_woocommerce: false,
        })
    }
}

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Spreadsheet export with SEO title and H1 columns
    Csv,
    /// Standard sitemap with seo_title/h1 extension elements
    Xml,
}

impl OutputFormat {
    /// File extension for this format, without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Xml => "xml",
        }
    }

    /// Default output filename for this format
    pub fn default_filename(&self) -> String {
        format!("sitemap.{}", self.extension())
    }
}

/// Where and how crawl results are persisted
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub path: PathBuf,
}

impl OutputConfig {
    /// Builds an output configuration, appending the format's extension
    /// when the given filename has none
    pub fn new(format: OutputFormat, filename: &str) -> Self {
        let path = PathBuf::from(filename);
        let path = match path.extension() {
            Some(_) => path,
            None => path.with_extension(format.extension()),
        };

        Self { format, path }
    }
}
