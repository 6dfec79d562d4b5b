use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use tracing::{debug, trace};

use crate::errors::{ExAddrError, Result};
use crate::netutil::is_valid_host;

/// Dotted-quad shape only. Octets are not range checked, so `999.1.1.1`
/// is reported like any other match. Word boundaries are ASCII: only
/// `[0-9A-Za-z_]` next to an address suppresses it.
static IPV4_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?-u:\b)(?:[0-9]{1,3}\.){3}[0-9]{1,3}(?-u:\b)").unwrap()
});

static SEPARATOR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[~!$^*(){}\[\]:,/\s]+").unwrap());

/// Set of extracted hosts or addresses, unique by exact string.
///
/// Insertion order is irrelevant; results are only ever observed through
/// [`HostSet::into_sorted`].
#[derive(Default, Debug, Clone)]
pub struct HostSet {
    set: HashSet<String>,
}

impl HostSet {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self {
            set: HashSet::new(),
        }
    }

    /// Insert an entry, returning false if it was already present.
    pub fn insert<S: Into<String>>(&mut self, host: S) -> bool {
        self.set.insert(host.into())
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// Consume and return entries in ascending byte order.
    pub fn into_sorted(self) -> Vec<String> {
        let mut v: Vec<String> = self.set.into_iter().collect();
        v.sort_unstable();
        v
    }
}

impl<S: Into<String>> Extend<S> for HostSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for host in iter {
            self.insert(host);
        }
    }
}

/// Build the scanner for hostnames ending in `.{suffix}`. The suffix is
/// matched literally.
fn suffix_pattern(suffix: &str) -> Result<Regex> {
    let pattern = format!(r"[a-zA-Z0-9._-]+\.{}", regex::escape(suffix));
    Regex::new(&pattern).map_err(|e| ExAddrError::pattern(pattern, e))
}

/// Extract every hostname in `content` that ends in one of `suffixes`.
///
/// Each suffix is trimmed before use. Candidates that are neither an IP
/// literal nor a syntactically valid domain are dropped. The result is
/// deduplicated across all suffixes and sorted ascending.
pub fn extract_hosts<S: AsRef<str>>(content: &str, suffixes: &[S]) -> Result<Vec<String>> {
    let mut hosts = HostSet::new();
    for suffix in suffixes {
        let suffix = suffix.as_ref().trim();
        let re = suffix_pattern(suffix)?;

        let mut matched = 0usize;
        for m in re.find_iter(content) {
            matched += 1;
            let candidate = m.as_str();
            if is_valid_host(candidate) {
                hosts.insert(candidate);
            } else {
                trace!(candidate, suffix, "discarding candidate that is not a valid host");
            }
        }
        debug!(suffix, matched, "scanned for suffix");
    }
    Ok(hosts.into_sorted())
}

/// Extract every IPv4-shaped substring in `content`, deduplicated and sorted
/// ascending as strings.
pub fn extract_ips(content: &str) -> Vec<String> {
    let mut ips = HostSet::new();
    ips.extend(IPV4_RE.find_iter(content).map(|m| m.as_str()));
    debug!(unique = ips.len(), "scanned for IPv4 addresses");
    ips.into_sorted()
}

/// Split text on runs of `~!$^*(){}[]:,/` and whitespace.
///
/// Leading and trailing separators produce empty pieces at the ends.
pub fn split_tokens(text: &str) -> Vec<&str> {
    SEPARATOR_RE.split(text).collect()
}
