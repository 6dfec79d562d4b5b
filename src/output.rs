//! Output handling for exaddr results.
//!
//! Results go either to stdout, one per line, or to a file that is
//! overwritten with the items joined by `\n` (no trailing newline).

use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::errors::{IoOperation, IoResultExt, Result};

/// Value of `-o` that selects standard output.
pub const STDOUT_TARGET: &str = "cli";

/// Where extracted items are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// One item per line on standard output
    Stdout,

    /// Whole-file overwrite at the given path
    File(PathBuf),
}

impl OutputTarget {
    /// Interpret a `-o` value: the literal `cli` means stdout, anything else
    /// is a file path.
    pub fn parse(value: &str) -> Self {
        if value == STDOUT_TARGET {
            OutputTarget::Stdout
        } else {
            OutputTarget::File(PathBuf::from(value))
        }
    }
}

impl std::fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputTarget::Stdout => f.write_str("stdout"),
            OutputTarget::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Write each item followed by a newline.
pub fn write_lines<W: Write, S: AsRef<str>>(w: &mut W, items: &[S]) -> io::Result<()> {
    for item in items {
        writeln!(w, "{}", item.as_ref())?;
    }
    w.flush()
}

/// Items joined by `\n`, as stored in output files.
pub fn join_lines<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Overwrite `path` with `contents`, creating it as `rw-r--r--` on Unix.
fn overwrite_file(path: &Path, contents: &str) -> io::Result<()> {
    let mut opts = OpenOptions::new();
    opts.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        opts.mode(0o644);
    }
    let mut file = opts.open(path)?;
    file.write_all(contents.as_bytes())?;
    file.flush()
}

/// Emit `items` to `target`.
pub fn write_results<S: AsRef<str>>(target: &OutputTarget, items: &[S]) -> Result<()> {
    match target {
        OutputTarget::Stdout => {
            let stdout = io::stdout();
            let mut handle = BufWriter::new(stdout.lock());
            write_lines(&mut handle, items).with_path(STDOUT_TARGET, IoOperation::Write)
        }
        OutputTarget::File(path) => overwrite_file(path, &join_lines(items))
            .with_path(path.display().to_string(), IoOperation::Write),
    }
}
