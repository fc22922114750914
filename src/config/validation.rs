use crate::url::{bare_domain, canonicalize, CanonicalUrl};
use crate::ConfigError;
use url::Url;

/// Prefixes `https://` when the raw seed carries no scheme
///
/// Users type `example.com` at least as often as the full URL; the
/// original tooling silently upgraded such input to HTTPS and this keeps
/// that behavior.
pub fn ensure_scheme(raw: &str) -> String {
    let trimmed = raw.trim();

    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    }
}

/// Parses and validates the seed URL, deriving the crawl's base domain
///
/// # Returns
///
/// * `Ok((seed, base_domain))` - Canonical seed and its bare host
/// * `Err(ConfigError)` - The seed is unusable; fatal before any fetch
pub(crate) fn parse_seed(raw: &str) -> Result<(CanonicalUrl, String), ConfigError> {
    let parsed = Url::parse(raw).map_err(|e| ConfigError::InvalidSeedUrl {
        url: raw.to_string(),
        message: e.to_string(),
    })?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(ConfigError::UnsupportedScheme(parsed.scheme().to_string()));
    }

    let host = parsed
        .host_str()
        .ok_or_else(|| ConfigError::MissingHost(raw.to_string()))?;

    let base_domain = bare_domain(host).to_string();

    Ok((canonicalize(raw), base_domain))
}

/// Validates the page budget
pub(crate) fn validate_max_pages(max_pages: usize) -> Result<(), ConfigError> {
    if max_pages == 0 {
        return Err(ConfigError::Validation(
            "max_pages must be positive".to_string(),
        ));
    }

    Ok(())
}
