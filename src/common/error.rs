//! Session-level error type for the administration console.

use thiserror::Error;

use crate::infrastructure::tfs::DirectoryError;

/// Errors raised while bootstrapping and running an administration session.
#[derive(Debug, Error)]
pub enum TfsAdminError {
    /// No server URL was passed on the command line.
    #[error("You must pass the server URL as the first argument")]
    MissingServerUrl,

    /// The server URL argument failed validation.
    #[error("Invalid server URL '{url}': {message}")]
    InvalidServerUrl {
        /// The rejected input.
        url: String,
        /// Why it was rejected.
        message: String,
    },

    /// The initial connection to the configuration server failed.
    #[error("Failed to connect to {url}: {message}")]
    ConnectionFailed {
        /// Server base URL.
        url: String,
        /// Underlying failure description.
        message: String,
        #[source]
        source: Option<DirectoryError>,
    },

    /// A remote directory call failed outside the per-item handled paths.
    #[error("Directory operation failed: {0}")]
    Directory(#[from] DirectoryError),

    /// Reading a key or a line from the terminal failed.
    #[error("Terminal input failed: {message}")]
    Terminal {
        /// What was being read.
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },
}

impl TfsAdminError {
    /// Build an [`TfsAdminError::InvalidServerUrl`].
    pub fn invalid_server_url(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidServerUrl {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Build a [`TfsAdminError::ConnectionFailed`] wrapping a directory error.
    pub fn connection_failed(url: impl Into<String>, source: DirectoryError) -> Self {
        Self::ConnectionFailed {
            url: url.into(),
            message: source.to_string(),
            source: Some(source),
        }
    }

    /// Build a [`TfsAdminError::Terminal`] wrapping an I/O error.
    pub fn terminal(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Terminal {
            message: message.into(),
            source: Some(source),
        }
    }
}

impl From<std::io::Error> for TfsAdminError {
    fn from(error: std::io::Error) -> Self {
        Self::terminal("terminal read failed", error)
    }
}
