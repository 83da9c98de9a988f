//! Display utilities for the interactive console.

use colored::Colorize;
use std::cell::Cell;
use std::io::{self, Write};

use crate::application::reporter::StatusReporter;

/// Display helper for the CLI interface.
///
/// Besides the usual leveled line output it supports in-place single-line
/// updates: `write_inline` overwrites whatever the previous `write_inline`
/// call printed, which is how the user selector redraws the current
/// candidate on one terminal line.
pub struct DisplayHelper {
    /// Whether colored output is enabled.
    pub use_color: bool,
    last_inline_len: Cell<usize>,
}

impl DisplayHelper {
    /// Create a new DisplayHelper.
    pub fn new(use_color: bool) -> Self {
        Self {
            use_color,
            last_inline_len: Cell::new(0),
        }
    }

    /// Create a display helper with color auto-detection.
    pub fn auto() -> Self {
        let use_color = atty::is(atty::Stream::Stdout) && std::env::var("NO_COLOR").is_err();
        Self::new(use_color)
    }

    /// Print a success message.
    pub fn success(&self, message: &str) {
        if self.use_color {
            println!("{} {}", "✓".green().bold(), message);
        } else {
            println!("[SUCCESS] {}", message);
        }
    }

    /// Print an error message.
    pub fn error(&self, message: &str) {
        if self.use_color {
            eprintln!("{} {}", "✗".red().bold(), message);
        } else {
            eprintln!("[ERROR] {}", message);
        }
    }

    /// Print a warning message.
    pub fn warning(&self, message: &str) {
        if self.use_color {
            println!("{} {}", "⚠".yellow().bold(), message);
        } else {
            println!("[WARNING] {}", message);
        }
    }

    /// Print an info message.
    pub fn info(&self, message: &str) {
        if self.use_color {
            println!("{} {}", "::".blue().bold(), message);
        } else {
            println!("[INFO] {}", message);
        }
    }

    /// Print a secondary detail line.
    pub fn detail(&self, message: &str) {
        if self.use_color {
            println!("  {}", message.dimmed());
        } else {
            println!("  {}", message);
        }
    }

    /// Print a plain line with no level marker.
    pub fn plain(&self, message: &str) {
        println!("{}", message);
    }

    /// Print a separator line.
    pub fn separator(&self) {
        if self.use_color {
            println!("{}", "─".repeat(40).dimmed());
        } else {
            println!("{}", "-".repeat(40));
        }
    }

    /// Overwrite the current terminal line with `message`.
    ///
    /// The previously written inline message is erased by padding it with
    /// spaces and returning the cursor to column zero, tracked by length.
    pub fn write_inline(&self, message: &str) {
        let previous = self.last_inline_len.replace(message.chars().count());
        let mut out = io::stdout();
        if previous > 0 {
            let _ = write!(out, "\r{}", " ".repeat(previous + 1));
        }
        if self.use_color {
            let _ = write!(out, "\r{}", message.magenta());
        } else {
            let _ = write!(out, "\r{}", message);
        }
        let _ = out.flush();
    }

    /// End an inline session: move to the next line and forget the tracked
    /// length.
    pub fn finish_inline(&self) {
        if self.last_inline_len.replace(0) > 0 {
            println!();
        }
    }

    /// Length of the last inline message, in characters.
    pub fn inline_len(&self) -> usize {
        self.last_inline_len.get()
    }
}

impl StatusReporter for DisplayHelper {
    fn info(&self, message: &str) {
        DisplayHelper::info(self, message);
    }

    fn success(&self, message: &str) {
        DisplayHelper::success(self, message);
    }

    fn warning(&self, message: &str) {
        DisplayHelper::warning(self, message);
    }

    fn error(&self, message: &str) {
        DisplayHelper::error(self, message);
    }

    fn detail(&self, message: &str) {
        DisplayHelper::detail(self, message);
    }
}
