//! High-level application orchestration layer.
//!
//! `App` takes a resolved [`Config`] and performs one run:
//!   1. Read the whole input file
//!   2. Check domain suffix syntax (hostname mode only)
//!   3. Extract IPv4 addresses or hostnames
//!   4. Write the sorted results to stdout or the output file
//!
//! Any failure aborts the run; nothing is written once an error has been
//! returned.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::config::{Config, ExtractionMode};
use crate::errors::{IoOperation, IoResultExt, Result};
use crate::extract::{extract_hosts, extract_ips};
use crate::output::{OutputTarget, write_results};

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Number of unique items written
    pub items: usize,

    /// Where they were written
    pub target: OutputTarget,
}

/// CLI-facing façade over extraction and output.
pub struct App {
    config: Config,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Execute the run described by the configuration.
    pub fn run(&self) -> Result<RunReport> {
        debug!(config = ?self.config, "starting run");

        let content = read_input(&self.config.input)?;
        self.config.validate_domains()?;

        let items = self.extract(&content)?;
        write_results(&self.config.output, &items)?;

        info!(
            items = items.len(),
            target = %self.config.output,
            "results written"
        );
        Ok(RunReport {
            items: items.len(),
            target: self.config.output.clone(),
        })
    }

    /// Extract items from already loaded content according to the mode.
    pub fn extract(&self, content: &str) -> Result<Vec<String>> {
        match &self.config.mode {
            ExtractionMode::Ips => Ok(extract_ips(content)),
            ExtractionMode::Hosts { domains } => extract_hosts(content, domains),
        }
    }
}

/// Read the whole input file. Invalid UTF-8 is replaced rather than rejected.
pub fn read_input(path: &Path) -> Result<String> {
    let bytes = fs::read(path).with_path(path.display().to_string(), IoOperation::Read)?;
    debug!(path = %path.display(), bytes = bytes.len(), "read input");
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
