use std::ffi::OsString;

use clap::{ArgAction, Parser};
use tracing::Level;

use crate::output::STDOUT_TARGET;

/// Command-line interface definition.
///
/// Long flags may be written Go-style with a single dash (`-file`, `-ip`);
/// see [`normalize_args`].
///
/// Verbosity levels:
/// 0 - silent (only results and fatal errors)
/// 1 - errors (default)
/// 2 - warnings + errors
/// 3 - info
/// 4 - debug
/// 5 - trace
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Extract hostnames under the given domains, or IPv4 addresses, from a text file"
)]
pub struct Cli {
    /// Path to the input file
    #[arg(long, value_name = "FILE", default_value = "")]
    pub file: String,

    /// Comma separated list of domains
    #[arg(short = 'd', long = "domains", value_name = "DOMAINS", default_value = "")]
    pub domains: String,

    /// Output method: 'cli' or file path
    #[arg(short = 'o', long = "output", value_name = "TARGET", default_value = STDOUT_TARGET)]
    pub output: String,

    /// Extract IPv4 addresses instead of hostnames (`-ip`, `-ip=false`)
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true",
        value_parser = parse_bool
    )]
    pub ip: bool,

    /// Verbosity level (0-5)
    #[arg(long, default_value_t = 1)]
    pub verbose: u8,
}

impl Cli {
    /// Parse CLI arguments from process args.
    pub fn from_args() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    /// Maximum diagnostic level for the `tracing` subscriber, `None` when
    /// diagnostics are off.
    pub fn log_level(&self) -> Option<Level> {
        match self.verbose {
            0 => None,
            1 => Some(Level::ERROR),
            2 => Some(Level::WARN),
            3 => Some(Level::INFO),
            4 => Some(Level::DEBUG),
            _ => Some(Level::TRACE),
        }
    }
}

/// Boolean flag values accepted by Go's `flag` package.
fn parse_bool(s: &str) -> Result<bool, String> {
    match s {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(false),
        _ => Err(format!("invalid boolean value '{s}'")),
    }
}

/// Flags that take a value, keyed by every spelling Go's `flag` package
/// would accept, mapped to the clap long name.
const VALUE_FLAGS: &[(&str, &str)] = &[
    ("file", "file"),
    ("d", "domains"),
    ("domains", "domains"),
    ("o", "output"),
    ("output", "output"),
    ("verbose", "verbose"),
];

fn value_flag(name: &str) -> Option<&'static str> {
    VALUE_FLAGS
        .iter()
        .find(|(alias, _)| *alias == name)
        .map(|(_, long)| *long)
}

/// Rewrite Go-style flags (`-file x`, `-ip`, `-d=a.com`) into the
/// `--name=value` form clap expects.
///
/// A value-taking flag given without `=` consumes the next argument
/// verbatim, even if it starts with `-`. Single-letter flags that take no
/// value (`-h`, `-V`) are left alone. Everything after a bare `--` is
/// untouched.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let mut out: Vec<OsString> = args.next().into_iter().collect();
    let mut pending: Option<&'static str> = None;
    let mut passthrough = false;

    for arg in args {
        if passthrough {
            out.push(arg);
            continue;
        }
        if let Some(long) = pending.take() {
            let mut joined = OsString::from(format!("--{long}="));
            joined.push(&arg);
            out.push(joined);
            continue;
        }
        let Some(s) = arg.to_str() else {
            out.push(arg);
            continue;
        };
        if s == "--" {
            passthrough = true;
            out.push(arg);
            continue;
        }
        let Some(body) = s.strip_prefix("--").or_else(|| s.strip_prefix('-')) else {
            out.push(arg);
            continue;
        };
        let (name, value) = match body.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (body, None),
        };
        if !name.starts_with(|c: char| c.is_ascii_alphabetic()) {
            out.push(arg);
            continue;
        }
        match (value_flag(name), value) {
            (Some(long), Some(value)) => out.push(OsString::from(format!("--{long}={value}"))),
            (Some(long), None) => pending = Some(long),
            (None, _) if name.len() > 1 => out.push(OsString::from(format!("--{body}"))),
            (None, _) => out.push(OsString::from(s)),
        }
    }

    // Let clap report the missing value.
    if let Some(long) = pending {
        out.push(OsString::from(format!("--{long}")));
    }
    out
}
