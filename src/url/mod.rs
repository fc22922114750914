//! URL handling module for seomap
//!
//! This module provides URL canonicalization, same-site domain scoping,
//! and the crawlability filter applied to every discovered link.

mod domain;
mod filter;
mod normalize;

// Re-export main functions
pub use domain::{bare_domain, same_site};
pub use filter::{
    has_denied_extension, is_crawlable, is_infrastructure_path, matches_woocommerce_action,
};
pub use normalize::{canonicalize, CanonicalUrl};
