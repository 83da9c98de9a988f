//! Application layer: the list and remove operations and the progress
//! reporting seam between them and the terminal.

pub mod reporter;
pub mod use_cases;

pub use reporter::{NullReporter, StatusReporter};
