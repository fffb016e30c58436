//! Message formatting and display.
//!
//! Colored console output for the different message kinds, plus the
//! confirmation prompt used by the merge command. Colors are only emitted
//! when stdout is a terminal.

use std::io::{self, IsTerminal, Write};

use crate::error::{PdfOpsError, Result};

/// Level of an output message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    /// Summary and status messages (blue).
    Info,
    /// Per-file success messages (green).
    Success,
    /// Sort and prompt notices (yellow).
    Notice,
    /// Per-file skip warnings (red, stderr).
    Warning,
    /// Terminal failures (red, stderr).
    Error,
}

impl MessageLevel {
    fn color_code(self) -> &'static str {
        match self {
            Self::Info => "\x1b[34m",
            Self::Success => "\x1b[32m",
            Self::Notice => "\x1b[33m",
            Self::Warning | Self::Error => "\x1b[31m",
        }
    }
}

const RESET: &str = "\x1b[0m";

/// Console output with optional ANSI coloring.
pub struct OutputFormatter {
    colored: bool,
}

impl OutputFormatter {
    /// Create a formatter, enabling color when stdout is a terminal.
    pub fn new() -> Self {
        Self {
            colored: Self::should_use_color(),
        }
    }

    /// Create a formatter that never emits color codes.
    pub fn plain_only() -> Self {
        Self { colored: false }
    }

    fn should_use_color() -> bool {
        io::stdout().is_terminal() && std::env::var("TERM").is_ok()
    }

    /// Print an informational message.
    pub fn info(&self, message: &str) {
        println!("{}", self.paint(MessageLevel::Info, message));
    }

    /// Print a per-file success message.
    pub fn success(&self, message: &str) {
        println!("{}", self.paint(MessageLevel::Success, message));
    }

    /// Print a notice (sorting, prompts).
    pub fn notice(&self, message: &str) {
        println!("{}", self.paint(MessageLevel::Notice, message));
    }

    /// Print a warning to stderr.
    pub fn warning(&self, message: &str) {
        eprintln!("{}", self.paint(MessageLevel::Warning, message));
    }

    /// Print an error to stderr.
    pub fn error(&self, message: &str) {
        eprintln!("{}", self.paint(MessageLevel::Error, message));
    }

    /// Print an uncolored line (listing entries).
    pub fn plain(&self, message: &str) {
        println!("{message}");
    }

    /// Ask a yes/no question on the terminal, defaulting to no.
    ///
    /// Accepts `y` or `yes` (case-insensitive) as confirmation; anything
    /// else, including an empty answer, declines.
    ///
    /// # Errors
    ///
    /// Returns an error if stdin cannot be read.
    pub fn confirm(&self, question: &str) -> Result<bool> {
        print!("{} [y/N]: ", self.paint(MessageLevel::Notice, question));
        io::stdout().flush().map_err(PdfOpsError::Io)?;

        let mut response = String::new();
        io::stdin()
            .read_line(&mut response)
            .map_err(PdfOpsError::Io)?;

        let response = response.trim().to_lowercase();
        Ok(response == "y" || response == "yes")
    }

    fn paint(&self, level: MessageLevel, message: &str) -> String {
        if self.colored {
            format!("{}{}{}", level.color_code(), message, RESET)
        } else {
            message.to_string()
        }
    }
}

impl Default for OutputFormatter {
    fn default() -> Self {
        Self::new()
    }
}
