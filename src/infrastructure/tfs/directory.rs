//! Common interface to the remote identity/catalog services.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::{CollectionRef, Identity, IdentityDescriptor};

/// How far to expand membership edges when reading an identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MembershipQuery {
    /// No membership information.
    None,
    /// Immediate members / containing groups only.
    Direct,
    /// Transitive expansion in the queried direction.
    Expanded,
}

impl MembershipQuery {
    /// Wire value for the query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            MembershipQuery::None => "none",
            MembershipQuery::Direct => "direct",
            MembershipQuery::Expanded => "expanded",
        }
    }
}

/// Per-collection services whose presence gates the list/remove operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionService {
    /// The identity-management service.
    IdentityManagement,
    /// The team service.
    Team,
}

impl CollectionService {
    /// Wire name of the service definition.
    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionService::IdentityManagement => "ims",
            CollectionService::Team => "teams",
        }
    }

    /// Name shown to the operator when the service is missing.
    pub fn display_name(&self) -> &'static str {
        match self {
            CollectionService::IdentityManagement => "Identity Service",
            CollectionService::Team => "Team Service",
        }
    }
}

/// Errors raised by directory implementations.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The server answered with a non-success status.
    #[error("Server returned {status} for {url}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Request URL.
        url: String,
    },

    /// The request never completed.
    #[error("Network request failed: {message}")]
    Network {
        /// Underlying failure description.
        message: String,
        /// Transport-level cause, when one exists.
        #[source]
        source: Option<reqwest::Error>,
    },

    /// The response body did not match the expected shape.
    #[error("Failed to decode server response: {message}")]
    Decode {
        /// What failed to decode.
        message: String,
        /// Deserialization cause, when one exists.
        #[source]
        source: Option<serde_json::Error>,
    },

    /// The server refused the operation and said why.
    #[error("{message}")]
    Rejected {
        /// Message as sent by the server.
        message: String,
    },
}

impl DirectoryError {
    /// Build a [`DirectoryError::Network`] from a reqwest error.
    pub fn network(source: reqwest::Error) -> Self {
        Self::Network {
            message: source.to_string(),
            source: Some(source),
        }
    }
}

impl From<reqwest::Error> for DirectoryError {
    fn from(error: reqwest::Error) -> Self {
        Self::network(error)
    }
}

/// Remote identity/catalog surface used by the list and remove operations.
///
/// Reads that can legitimately miss (an account name or group absent from a
/// collection) return `Ok(None)`; every other failure is an error. Nothing
/// here retries.
#[async_trait]
pub trait IdentityDirectory: Send + Sync {
    /// Resolve the identity the server authenticated this session as.
    async fn authenticated_identity(&self) -> Result<Identity, DirectoryError>;

    /// Enumerate the project-collection catalog.
    async fn collections(&self) -> Result<Vec<CollectionRef>, DirectoryError>;

    /// Whether the given per-collection service exists.
    async fn has_service(
        &self,
        collection: &CollectionRef,
        service: CollectionService,
    ) -> Result<bool, DirectoryError>;

    /// Read an identity in a collection by exact account name.
    async fn read_identity_by_name(
        &self,
        collection: &CollectionRef,
        account_name: &str,
        query: MembershipQuery,
    ) -> Result<Option<Identity>, DirectoryError>;

    /// Read an identity in a collection by descriptor.
    async fn read_identity_by_descriptor(
        &self,
        collection: &CollectionRef,
        descriptor: &IdentityDescriptor,
        query: MembershipQuery,
    ) -> Result<Option<Identity>, DirectoryError>;

    /// Remove a member from an application group in a collection.
    async fn remove_member_from_group(
        &self,
        collection: &CollectionRef,
        group: &IdentityDescriptor,
        member: &IdentityDescriptor,
    ) -> Result<(), DirectoryError>;
}
