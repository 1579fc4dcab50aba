//! Defaults-over-parsed-config merging.
//!
//! Generation clients start from a domain's strict defaults and overlay the
//! user's parsed configuration on top. [`merge_config`] is that overlay as a
//! library operation so every caller shares one implementation.

use crate::{PartialConfig, RequestConfig};

/// Merges a parsed configuration over a set of defaults.
///
/// Overlay values win key-by-key; defaults-only keys pass through untouched.
///
/// # Examples
///
/// ```
/// use prompt_config_core::{DomainSchema, PartialConfig, merge_config};
///
/// let defaults = DomainSchema::image().defaults();
///
/// let mut overlay = PartialConfig::new();
/// overlay.insert("width", 512.0.into());
///
/// let merged = merge_config(&defaults, &overlay);
/// assert_eq!(merged.number("width"), Some(512.0)); // overlay wins
/// assert_eq!(merged.text("model"), Some("fluently-xl")); // default kept
/// ```
pub fn merge_config(defaults: &RequestConfig, overlay: &PartialConfig) -> RequestConfig {
    let mut merged = defaults.clone();
    for (key, value) in overlay.iter() {
        merged.insert(key.clone(), value.clone());
    }
    merged
}
