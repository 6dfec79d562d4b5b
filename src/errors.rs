//! Unified error handling for exaddr.
//!
//! Every failure the tool recognizes is terminal: the driver prints the
//! error's `Display` text as a single line on stderr and exits with
//! [`ExAddrError::exit_code`]. The `Display` strings are part of the
//! user-facing contract and should stay stable.
//!
//! Categories are coarse on purpose:
//!   - Input: missing flags or malformed domain suffixes
//!   - Io: reading the input file or writing the output file
//!   - Internal: states that cannot be reached with well-formed patterns
//!
//! Usage:
//!   use exaddr::errors::{Result, ExAddrError};
//!
//!   fn require_file(path: &str) -> Result<()> {
//!       if path.is_empty() {
//!           return Err(ExAddrError::missing_file());
//!       }
//!       Ok(())
//!   }

use std::io;

use thiserror::Error;

/// High-level classification used for logging and exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Io,
    Internal,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ErrorCategory::Input => "input",
            ErrorCategory::Io => "io",
            ErrorCategory::Internal => "internal",
        };
        f.write_str(s)
    }
}

/// I/O direction, used to pick the right diagnostic wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoOperation {
    Read,
    Write,
}

impl std::fmt::Display for IoOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IoOperation::Read => f.write_str("reading file"),
            IoOperation::Write => f.write_str("writing to file"),
        }
    }
}

/// Primary application error type.
#[derive(Error, Debug)]
pub enum ExAddrError {
    // ------------------------ Input / Validation ----------------------------
    #[error("Error: {message}")]
    MissingFlag { flag: &'static str, message: String },

    #[error("Error: Invalid domain provided: {domain}")]
    InvalidDomain { domain: String },

    // ----------------------------- I/O / FS ---------------------------------
    #[error("Error {operation}: {source}")]
    Io {
        path: String,
        operation: IoOperation,
        #[source]
        source: io::Error,
    },

    // ---------------------------- Internal ----------------------------------
    #[error("Error: failed to build pattern for '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl ExAddrError {
    /// Categorize the error for logging.
    pub fn category(&self) -> ErrorCategory {
        use ExAddrError::*;
        match self {
            MissingFlag { .. } | InvalidDomain { .. } => ErrorCategory::Input,
            Io { .. } => ErrorCategory::Io,
            Pattern { .. } => ErrorCategory::Internal,
        }
    }

    /// Process exit status for this error. Every recognized failure aborts
    /// the run with status 1.
    pub fn exit_code(&self) -> i32 {
        1
    }

    // ---------------------------- Constructors -----------------------------

    pub fn missing_file() -> Self {
        Self::MissingFlag {
            flag: "file",
            message: "-file flag is required".into(),
        }
    }

    pub fn missing_domains() -> Self {
        Self::MissingFlag {
            flag: "d",
            message: "-d flag is required if you want to extract domains.".into(),
        }
    }

    pub fn invalid_domain(domain: impl Into<String>) -> Self {
        Self::InvalidDomain {
            domain: domain.into(),
        }
    }

    pub fn io(path: impl Into<String>, operation: IoOperation, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            operation,
            source,
        }
    }

    pub fn pattern(pattern: impl Into<String>, source: regex::Error) -> Self {
        Self::Pattern {
            pattern: pattern.into(),
            source,
        }
    }
}

/// Public result alias.
pub type Result<T> = std::result::Result<T, ExAddrError>;

/// Extension trait for enriching IO results with path + operation context.
pub trait IoResultExt<T> {
    fn with_path(self, path: impl Into<String>, operation: IoOperation) -> Result<T>;
}

impl<T> IoResultExt<T> for std::result::Result<T, io::Error> {
    fn with_path(self, path: impl Into<String>, operation: IoOperation) -> Result<T> {
        self.map_err(|e| ExAddrError::io(path, operation, e))
    }
}
