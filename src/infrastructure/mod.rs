//! Infrastructure layer modules
//!
//! Concrete implementations for external system interactions: the remote
//! configuration server's catalog and identity-management services.

pub mod tfs;

// Re-export commonly used types
pub use tfs::{DirectoryError, IdentityDirectory, MembershipQuery, TfsConfigurationClient};
