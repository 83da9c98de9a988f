//! Validated configuration-server base URL.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use url::Url;

/// Server URL validation errors.
#[derive(Debug, Error, PartialEq)]
pub enum ServerUrlError {
    /// The input was not a parseable absolute URL.
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    /// Only http and https servers are supported.
    #[error("Unsupported URL scheme: {0}")]
    UnsupportedScheme(String),

    /// The URL carries no host.
    #[error("Missing host in URL")]
    MissingHost,
}

/// Base URL of the configuration server, normalized with no trailing slash.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServerUrl {
    url: String,
}

impl ServerUrl {
    /// Validate and normalize a server URL.
    pub fn new(input: &str) -> Result<Self, ServerUrlError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ServerUrlError::InvalidFormat("Empty URL".to_string()));
        }

        let parsed = Url::parse(trimmed)
            .map_err(|e| ServerUrlError::InvalidFormat(format!("{trimmed}: {e}")))?;

        match parsed.scheme() {
            "http" | "https" => {}
            other => return Err(ServerUrlError::UnsupportedScheme(other.to_string())),
        }

        if parsed.host_str().is_none() {
            return Err(ServerUrlError::MissingHost);
        }

        Ok(Self {
            url: trimmed.trim_end_matches('/').to_string(),
        })
    }

    /// The normalized URL string.
    pub fn as_str(&self) -> &str {
        &self.url
    }

    /// Join a path below the server base.
    pub fn join(&self, path: &str) -> String {
        format!("{}/{}", self.url, path.trim_start_matches('/'))
    }
}

impl fmt::Display for ServerUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_url_normalization() {
        let url = ServerUrl::new("https://tfs.example.com/tfs/").unwrap();
        assert_eq!(url.as_str(), "https://tfs.example.com/tfs");
        assert_eq!(
            url.join("_apis/projectCollections"),
            "https://tfs.example.com/tfs/_apis/projectCollections"
        );
    }

    #[test]
    fn test_empty_url_rejected() {
        assert!(matches!(
            ServerUrl::new("  "),
            Err(ServerUrlError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_unsupported_scheme_rejected() {
        assert_eq!(
            ServerUrl::new("ftp://tfs.example.com"),
            Err(ServerUrlError::UnsupportedScheme("ftp".to_string()))
        );
    }

    #[test]
    fn test_relative_url_rejected() {
        assert!(matches!(
            ServerUrl::new("tfs.example.com/tfs"),
            Err(ServerUrlError::InvalidFormat(_))
        ));
    }
}
