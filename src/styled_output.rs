//! Styled diagnostics for exaddr using anstyle.
//!
//! Only stderr diagnostics are styled. Extracted results are always written
//! plain so they stay safe to pipe.

use anstyle::{AnsiColor, Color, Style};
use std::io::IsTerminal;

use crate::errors::{ErrorCategory, ExAddrError};

/// Style definitions for diagnostic lines
pub struct Styles {
    pub error: Style,
    pub internal: Style,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            error: Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Red))),
            internal: Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Magenta))),
        }
    }
}

/// Formatter for one-line error diagnostics.
pub struct StyledFormatter {
    styles: Styles,
    use_colors: bool,
}

impl Default for StyledFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl StyledFormatter {
    /// Create a formatter that colors output only when stderr is a terminal.
    pub fn new() -> Self {
        Self {
            styles: Styles::default(),
            use_colors: std::io::stderr().is_terminal(),
        }
    }

    /// Create a formatter without colors (for non-interactive use)
    pub fn without_colors() -> Self {
        Self {
            styles: Styles::default(),
            use_colors: false,
        }
    }

    /// Apply style to text if colors are enabled
    fn styled(&self, text: &str, style: &Style) -> String {
        if self.use_colors {
            format!("{}{}{}", style.render(), text, style.render_reset())
        } else {
            text.to_string()
        }
    }

    /// Render an error as a single diagnostic line (no trailing newline).
    pub fn format_error(&self, err: &ExAddrError) -> String {
        let style = match err.category() {
            ErrorCategory::Internal => &self.styles.internal,
            ErrorCategory::Input | ErrorCategory::Io => &self.styles.error,
        };
        self.styled(&err.to_string(), style)
    }
}
