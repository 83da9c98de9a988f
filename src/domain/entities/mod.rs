//! Domain entities mirrored from the remote server.

pub mod collection;
pub mod identity;

pub use collection::CollectionRef;
pub use identity::{Identity, IdentityDescriptor, VALID_USERS_GROUP};
