//! Shared test support: a scripted identity directory, fixture builders,
//! and a recording progress reporter.

pub mod mock_directory;
pub mod recording;
pub mod test_fixtures;

pub use mock_directory::MockDirectory;
pub use recording::RecordingReporter;
