//! Recording stub for the progress-reporting seam.

use std::sync::Mutex;

use tfsadmin::application::StatusReporter;

/// Captures every reported line, tagged with its level.
pub struct RecordingReporter {
    lines: Mutex<Vec<String>>,
}

impl RecordingReporter {
    /// Create an empty reporter.
    pub fn new() -> Self {
        Self {
            lines: Mutex::new(Vec::new()),
        }
    }

    /// All recorded lines in order.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    /// Whether any line at the given level contains `needle`.
    pub fn contains(&self, level: &str, needle: &str) -> bool {
        self.lines()
            .iter()
            .any(|line| line.starts_with(level) && line.contains(needle))
    }

    fn record(&self, level: &str, message: &str) {
        self.lines.lock().unwrap().push(format!("{level}: {message}"));
    }
}

impl Default for RecordingReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusReporter for RecordingReporter {
    fn info(&self, message: &str) {
        self.record("info", message);
    }

    fn success(&self, message: &str) {
        self.record("success", message);
    }

    fn warning(&self, message: &str) {
        self.record("warning", message);
    }

    fn error(&self, message: &str) {
        self.record("error", message);
    }

    fn detail(&self, message: &str) {
        self.record("detail", message);
    }
}
