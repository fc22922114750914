use crate::url::CanonicalUrl;

/// Strips a single leading `www.` label from a host
///
/// Crawls should not fragment when a site redirects between its bare and
/// `www.` hosts, so scoping compares "bare" domains. Only the `www.` label
/// is special-cased; any other subdomain is a distinct site.
///
/// # Examples
///
/// ```
/// use seomap::url::bare_domain;
///
/// assert_eq!(bare_domain("www.example.com"), "example.com");
/// assert_eq!(bare_domain("example.com"), "example.com");
/// assert_eq!(bare_domain("blog.example.com"), "blog.example.com");
/// ```
pub fn bare_domain(host: &str) -> &str {
    host.strip_prefix("www.").unwrap_or(host)
}

/// Decides whether a canonical URL belongs to the target site
///
/// Compares the URL's bare host against the configured bare base domain.
/// A URL that cannot be parsed back, or that has no host, is never
/// same-site and so is never followed.
///
/// # Arguments
///
/// * `url` - The canonical URL to test
/// * `base_domain` - The crawl's base domain, already lowercased and bare
pub fn same_site(url: &CanonicalUrl, base_domain: &str) -> bool {
    let Some(parsed) = url.to_url() else {
        return false;
    };

    match parsed.host_str() {
        Some(host) => bare_domain(host) == bare_domain(base_domain),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::url::canonicalize;

    #[test]
    fn test_bare_domain_strips_www() {
        assert_eq!(bare_domain("www.example.com"), "example.com");
    }

    #[test]
    fn test_bare_domain_strips_only_one_label() {
        assert_eq!(bare_domain("www.www.example.com"), "www.example.com");
    }

    #[test]
    fn test_bare_domain_leaves_other_subdomains() {
        assert_eq!(bare_domain("api.example.com"), "api.example.com");
    }

    #[test]
    fn test_same_site_exact_match() {
        let url = canonicalize("https://example.com/page");
        assert!(same_site(&url, "example.com"));
    }

    #[test]
    fn test_same_site_www_equivalence() {
        let url = canonicalize("https://www.example.com/page");
        assert!(same_site(&url, "example.com"));

        let url = canonicalize("https://example.com/page");
        assert!(same_site(&url, "www.example.com"));
    }

    #[test]
    fn test_same_site_rejects_other_subdomains() {
        let url = canonicalize("https://blog.example.com/post");
        assert!(!same_site(&url, "example.com"));
    }

    #[test]
    fn test_same_site_rejects_other_domains() {
        let url = canonicalize("https://other.com/page");
        assert!(!same_site(&url, "example.com"));
    }

    #[test]
    fn test_same_site_rejects_lookalike_suffix() {
        let url = canonicalize("https://notexample.com/page");
        assert!(!same_site(&url, "example.com"));
    }

    #[test]
    fn test_same_site_with_port() {
        let url = canonicalize("http://127.0.0.1:9090/page");
        assert!(same_site(&url, "127.0.0.1"));
    }

    #[test]
    fn test_same_site_unparseable_never_matches() {
        let url = canonicalize("definitely not a url");
        assert!(!same_site(&url, "example.com"));
    }
}
