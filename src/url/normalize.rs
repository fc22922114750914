use std::fmt;
use url::Url;

/// A URL normalized into a comparison-stable form
///
/// Two URLs a reader would consider "the same page" (differing only in a
/// trailing slash or a fragment) canonicalize to an identical value, so
/// `CanonicalUrl` can key the visited set, the frontier, and the record
/// table directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalUrl(String);

impl CanonicalUrl {
    /// Returns the canonical form as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses the canonical form back into a [`Url`] for fetching
    ///
    /// Canonical forms produced from parseable input always round-trip;
    /// best-effort forms built from malformed input may not.
    pub fn to_url(&self) -> Option<Url> {
        Url::parse(&self.0).ok()
    }
}

impl fmt::Display for CanonicalUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Normalizes a URL string into its canonical form
///
/// # Normalization Steps
///
/// 1. Parse the URL (the `url` crate lowercases the host as a side effect)
/// 2. Rebuild as `scheme://host[:port]` plus the path
/// 3. Strip a single trailing slash from the path; the root path `/`
///    becomes the empty path, so `https://example.com/` and
///    `https://example.com` are the same page
/// 4. Remove the fragment
/// 5. Preserve the query string verbatim when present
///
/// Relative references must be resolved against the page that carried them
/// before calling this; resolution is the fetcher's job. Malformed input
/// never errors: the fallback cuts the string at `#`, strips one trailing
/// slash from the pre-query part, and returns that as a best-effort form.
///
/// # Examples
///
/// ```
/// use seomap::url::canonicalize;
///
/// assert_eq!(
///     canonicalize("https://example.com/page/#section").as_str(),
///     "https://example.com/page"
/// );
/// ```
pub fn canonicalize(raw: &str) -> CanonicalUrl {
    match Url::parse(raw) {
        Ok(url) => canonical_from_parsed(&url),
        Err(_) => CanonicalUrl(best_effort(raw)),
    }
}

/// Rebuilds a parsed URL into the canonical string form
fn canonical_from_parsed(url: &Url) -> CanonicalUrl {
    let mut out = String::new();
    out.push_str(url.scheme());
    out.push_str("://");

    if let Some(host) = url.host_str() {
        out.push_str(host);
    }

    // Non-default ports matter for loopback test servers
    if let Some(port) = url.port() {
        out.push(':');
        out.push_str(&port.to_string());
    }

    let path = url.path();
    out.push_str(path.strip_suffix('/').unwrap_or(path));

    if let Some(query) = url.query() {
        out.push('?');
        out.push_str(query);
    }

    CanonicalUrl(out)
}

/// Best-effort canonical form for input the URL parser rejects
fn best_effort(raw: &str) -> String {
    let without_fragment = raw.split('#').next().unwrap_or_default();

    match without_fragment.split_once('?') {
        Some((head, query)) => {
            format!("{}?{}", head.strip_suffix('/').unwrap_or(head), query)
        }
        None => without_fragment
            .strip_suffix('/')
            .unwrap_or(without_fragment)
            .to_string(),
    }
}
