//! Remote configuration-server adapter.
//!
//! [`IdentityDirectory`] is the seam between the use cases and the server;
//! [`TfsConfigurationClient`] implements it over the server's REST surface.

pub mod client;
pub mod directory;
pub mod dto;

pub use client::TfsConfigurationClient;
pub use directory::{CollectionService, DirectoryError, IdentityDirectory, MembershipQuery};
