//! Progress reporting seam.
//!
//! The use cases stream per-collection and per-group progress through this
//! trait instead of printing, so the core logic has no terminal dependency
//! and tests can substitute a recording stub.

/// Receives progress lines as an operation walks the collections.
pub trait StatusReporter {
    /// Neutral progress line.
    fn info(&self, message: &str);

    /// Something completed as intended.
    fn success(&self, message: &str);

    /// Something was skipped or needs operator attention.
    fn warning(&self, message: &str);

    /// A per-item failure the operation continues past.
    fn error(&self, message: &str);

    /// Secondary detail line under the current item.
    fn detail(&self, message: &str);
}

/// Reporter that discards everything.
pub struct NullReporter;

impl StatusReporter for NullReporter {
    fn info(&self, _message: &str) {}
    fn success(&self, _message: &str) {}
    fn warning(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
    fn detail(&self, _message: &str) {}
}
