//! Fixture builders for identities and groups.

use tfsadmin::domain::entities::identity::SYNTHETIC_IDENTITY_TYPE;
use tfsadmin::domain::entities::{Identity, IdentityDescriptor, VALID_USERS_GROUP};

/// Descriptor for a regular (human) user principal.
pub fn user_descriptor(identifier: &str) -> IdentityDescriptor {
    IdentityDescriptor::new("System.Security.Principal", identifier)
}

/// Descriptor for an application group.
pub fn group_descriptor(identifier: &str) -> IdentityDescriptor {
    IdentityDescriptor::new("Microsoft.TeamFoundation.Group", identifier)
}

/// Descriptor whose identity type marks a synthetic system identity.
pub fn system_descriptor(identifier: &str) -> IdentityDescriptor {
    IdentityDescriptor::new(SYNTHETIC_IDENTITY_TYPE, identifier)
}

/// A user identity whose unique name equals `name`.
pub fn user(name: &str, identifier: &str) -> Identity {
    Identity::new(name, name, user_descriptor(identifier))
}

/// A group identity with the given members.
pub fn group(name: &str, identifier: &str, members: Vec<IdentityDescriptor>) -> Identity {
    Identity::new(name, name, group_descriptor(identifier)).with_members(members)
}

/// The per-collection valid-users group with the given members.
pub fn valid_users_group(members: Vec<IdentityDescriptor>) -> Identity {
    group(VALID_USERS_GROUP, "valid-users", members)
}
