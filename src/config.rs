//! Run configuration for exaddr.
//!
//! `Config` is the validated form of the command line. It is resolved from
//! [`Cli`](crate::cli::Cli) with [`Config::from_cli`], which applies the
//! flag-presence checks. Domain syntax is checked separately through
//! [`Config::validate_domains`], after the input has been read, so that an
//! unreadable file is reported before a malformed suffix.

use std::path::PathBuf;

use crate::cli::Cli;
use crate::domain_utils::{split_domain_list, validate_domains};
use crate::errors::{ExAddrError, Result};
use crate::output::OutputTarget;

/// What to extract from the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionMode {
    /// IPv4-shaped substrings
    Ips,

    /// Hostnames ending in one of the given suffixes
    Hosts { domains: Vec<String> },
}

/// Main configuration structure for a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// File to scan
    pub input: PathBuf,

    /// Extraction mode
    pub mode: ExtractionMode,

    /// Where results are written
    pub output: OutputTarget,
}

impl Config {
    /// Build a configuration from parsed CLI arguments.
    ///
    /// Fails if `-file` is empty, or if `-d` is empty outside IP mode. In IP
    /// mode any `-d` value is ignored.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        if cli.file.is_empty() {
            return Err(ExAddrError::missing_file());
        }

        let mode = if cli.ip {
            ExtractionMode::Ips
        } else if cli.domains.is_empty() {
            return Err(ExAddrError::missing_domains());
        } else {
            ExtractionMode::Hosts {
                domains: split_domain_list(&cli.domains),
            }
        };

        Ok(Self {
            input: PathBuf::from(&cli.file),
            mode,
            output: OutputTarget::parse(&cli.output),
        })
    }

    /// Check the syntax of every domain suffix. A no-op in IP mode.
    pub fn validate_domains(&self) -> Result<()> {
        match &self.mode {
            ExtractionMode::Ips => Ok(()),
            ExtractionMode::Hosts { domains } => validate_domains(domains),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(file: &str, domains: &str, output: &str, ip: bool) -> Cli {
        Cli {
            file: file.to_string(),
            domains: domains.to_string(),
            output: output.to_string(),
            ip,
            verbose: 1,
        }
    }

    #[test]
    fn test_hosts_config() {
        let config = Config::from_cli(&cli("in.txt", "example.com, test.org", "cli", false)).unwrap();
        assert_eq!(config.input, PathBuf::from("in.txt"));
        assert_eq!(
            config.mode,
            ExtractionMode::Hosts {
                domains: vec!["example.com".into(), "test.org".into()]
            }
        );
        assert_eq!(config.output, OutputTarget::Stdout);
        assert!(config.validate_domains().is_ok());
    }

    #[test]
    fn test_missing_file_checked_first() {
        let err = Config::from_cli(&cli("", "", "cli", false)).unwrap_err();
        assert!(matches!(err, ExAddrError::MissingFlag { flag: "file", .. }));
    }

    #[test]
    fn test_missing_domains() {
        let err = Config::from_cli(&cli("in.txt", "", "cli", false)).unwrap_err();
        assert!(matches!(err, ExAddrError::MissingFlag { flag: "d", .. }));
    }

    #[test]
    fn test_ip_mode_ignores_domains() {
        let config = Config::from_cli(&cli("in.txt", "not a domain!", "out.txt", true)).unwrap();
        assert_eq!(config.mode, ExtractionMode::Ips);
        assert_eq!(config.output, OutputTarget::File(PathBuf::from("out.txt")));
        assert!(config.validate_domains().is_ok());

        let config = Config::from_cli(&cli("in.txt", "", "cli", true)).unwrap();
        assert_eq!(config.mode, ExtractionMode::Ips);
    }

    #[test]
    fn test_invalid_domain_detected() {
        let config = Config::from_cli(&cli("in.txt", "example.com,not a domain!", "cli", false)).unwrap();
        let err = config.validate_domains().unwrap_err();
        assert_eq!(err.to_string(), "Error: Invalid domain provided: not a domain!");
    }
}
