use crate::config::CrawlConfig;
use crate::url::CanonicalUrl;
use url::Url;

/// WooCommerce action terms that mark cart/checkout machinery rather than
/// content pages
const WOOCOMMERCE_TERMS: &[&str] = &["cart", "wishlist", "checkout", "add-to-cart", "my-account"];

/// Path fragments of known non-content infrastructure endpoints
const INFRASTRUCTURE_PATHS: &[&str] = &[
    "/cdn-cgi/l/email-protection",
    "/wp-json",
    "/xmlrpc.php",
];

/// File extensions that never resolve to crawlable HTML
const DENIED_EXTENSIONS: &[&str] = &[
    // Images
    ".jpg", ".jpeg", ".png", ".gif", ".webp", ".svg", ".ico", ".bmp",
    // Documents and archives
    ".pdf", ".zip", ".gz", ".tar", ".rar", ".7z",
    // Video and audio
    ".mp4", ".mpeg", ".mov", ".avi", ".webm", ".mp3", ".wav",
    // Stylesheets and scripts
    ".css", ".js",
    // Fonts
    ".woff", ".woff2", ".ttf", ".eot", ".otf",
];

/// Decides whether a same-site URL is worth fetching
///
/// This is a pure predicate over an ordered deny-list; the first rule that
/// matches rejects the URL:
///
/// 1. non-http(s) schemes (and anything that no longer parses)
/// 2. WooCommerce action URLs, when that policy is enabled
/// 3. known infrastructure endpoints (email obfuscation, JSON API
///    discovery, XML-RPC, feeds)
/// 4. binary/non-HTML file extensions, including `/file.pdf?x=1` style
///    URLs where the extension is followed by a query or path segment
pub fn is_crawlable(url: &CanonicalUrl, config: &CrawlConfig) -> bool {
    let Some(parsed) = url.to_url() else {
        return false;
    };

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return false;
    }

    if config.filter_woocommerce && matches_woocommerce_action(&parsed) {
        return false;
    }

    if is_infrastructure_path(parsed.path()) {
        return false;
    }

    if has_denied_extension(parsed.path()) {
        return false;
    }

    true
}

/// Checks a URL against the WooCommerce action terms
///
/// Terms are matched as case-insensitive substrings of the path and,
/// separately, of the full URL whenever a query string is present, so both
/// `/cart/` and `/?add-to-cart=42` are caught.
pub fn matches_woocommerce_action(url: &Url) -> bool {
    let path = url.path().to_lowercase();
    if WOOCOMMERCE_TERMS.iter().any(|term| path.contains(term)) {
        return true;
    }

    if url.query().is_some() {
        let full = url.as_str().to_lowercase();
        if WOOCOMMERCE_TERMS.iter().any(|term| full.contains(term)) {
            return true;
        }
    }

    false
}

/// Checks whether a path points at non-content infrastructure
///
/// Covers Cloudflare email-obfuscation endpoints, WordPress JSON API
/// discovery, XML-RPC, and feed endpoints.
pub fn is_infrastructure_path(path: &str) -> bool {
    let path = path.to_lowercase();

    if INFRASTRUCTURE_PATHS
        .iter()
        .any(|fragment| path.contains(fragment))
    {
        return true;
    }

    path == "/feed" || path.ends_with("/feed")
}

/// Checks whether a path carries a denied binary/asset extension
///
/// The extension is matched case-insensitively both as a path suffix and
/// followed by a further path separator; a query string after the suffix
/// is already gone at this point because only the path is examined.
pub fn has_denied_extension(path: &str) -> bool {
    let path = path.to_lowercase();

    DENIED_EXTENSIONS.iter().any(|ext| {
        path.ends_with(ext) || path.contains(&format!("{}/", ext))
    })
}
