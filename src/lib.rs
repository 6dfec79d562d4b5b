//! exaddr Library
//!
//! Extract hostnames that end in a set of domain suffixes, or IPv4-shaped
//! addresses, from arbitrary text. Results are deduplicated and sorted.
//!
//! - Validate domain suffixes and candidate hosts
//! - Scan text for hostnames under given domains
//! - Scan text for dotted-quad addresses (syntactic only, no octet range check)
//! - Write results to stdout or overwrite an output file
//!
//! # Example
//!
//! ```rust
//! use exaddr::extract::{extract_hosts, extract_ips};
//!
//! let text = "mail.example.com relays via 10.0.0.1 and www.example.com";
//! let hosts = extract_hosts(text, &["example.com"])?;
//! assert_eq!(hosts, vec!["mail.example.com", "www.example.com"]);
//! assert_eq!(extract_ips(text), vec!["10.0.0.1"]);
//! # Ok::<(), exaddr::ExAddrError>(())
//! ```

pub mod app;
pub mod cli;
pub mod config;
pub mod domain_utils;
pub mod errors;
pub mod extract;
pub mod netutil;
pub mod output;
pub mod styled_output;

// Re-export commonly used types and functions for convenience
pub use app::{App, RunReport};
pub use config::{Config, ExtractionMode};
pub use domain_utils::is_valid_domain;
pub use errors::{ExAddrError, Result};
pub use extract::{HostSet, extract_hosts, extract_ips, split_tokens};
pub use netutil::is_valid_host;
pub use output::OutputTarget;
pub use styled_output::StyledFormatter;
