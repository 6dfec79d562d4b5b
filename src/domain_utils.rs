//! Domain name syntax checks and `-d` list handling.
//!
//! Validation is purely syntactic: one or more `label.` groups followed by an
//! alphabetic final label of at least two characters. Labels are ASCII
//! letters, digits or hyphens. Nothing is normalized here; callers trim.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{ExAddrError, Result};

static DOMAIN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([a-zA-Z0-9-]+\.)+[a-zA-Z]{2,}$").unwrap());

/// Return true if `domain` is a syntactically valid domain name.
pub fn is_valid_domain(domain: &str) -> bool {
    DOMAIN_RE.is_match(domain)
}

/// Split a comma separated `-d` value into trimmed entries, keeping order.
///
/// Empty entries are kept so that `"a.com,"` fails validation instead of
/// being silently shortened.
pub fn split_domain_list(raw: &str) -> Vec<String> {
    raw.split(',').map(|d| d.trim().to_string()).collect()
}

/// Check every entry, failing on the first one that is not a valid domain.
pub fn validate_domains<S: AsRef<str>>(domains: &[S]) -> Result<()> {
    match domains.iter().find(|d| !is_valid_domain(d.as_ref())) {
        Some(bad) => Err(ExAddrError::invalid_domain(bad.as_ref())),
        None => Ok(()),
    }
}
