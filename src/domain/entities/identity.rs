//! Identity records and the descriptors used for membership operations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Built-in per-collection group whose membership enumerates every user with
/// any access to the collection.
pub const VALID_USERS_GROUP: &str = "Project Collection Valid Users";

/// Identity type marker for the unauthenticated pseudo-identity.
pub const UNAUTHENTICATED_IDENTITY_TYPE: &str = "Microsoft.TeamFoundation.UnauthenticatedIdentity";

/// Identity type marker for internal synthetic identities.
pub const SYNTHETIC_IDENTITY_TYPE: &str = "Microsoft.TeamFoundation.Identity";

/// Opaque (type, identifier) pair uniquely addressing an identity on the
/// server. All group-membership operations go through descriptors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityDescriptor {
    /// Provider-qualified identity type name.
    pub identity_type: String,
    /// Opaque identifier, unique within the type.
    pub identifier: String,
}

impl IdentityDescriptor {
    /// Create a new descriptor.
    pub fn new(identity_type: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            identity_type: identity_type.into(),
            identifier: identifier.into(),
        }
    }

    /// Whether this descriptor belongs to a synthetic or unauthenticated
    /// system identity rather than a human user or real group. Listings
    /// skip these members.
    pub fn is_system_identity(&self) -> bool {
        self.identity_type == UNAUTHENTICATED_IDENTITY_TYPE
            || self.identity_type == SYNTHETIC_IDENTITY_TYPE
    }
}

impl fmt::Display for IdentityDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{};{}", self.identity_type, self.identifier)
    }
}

/// A user or group record on the remote server.
///
/// `members` and `member_of` are the two directions of the membership edge:
/// a group read with expanded membership carries its members, a user read
/// the same way carries every group that contains it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    /// Human-readable display name.
    pub display_name: String,

    /// Login-style unique name. Listing results are keyed by this.
    pub unique_name: String,

    /// Descriptor used to address this identity in membership operations.
    pub descriptor: IdentityDescriptor,

    /// Whether the identity is currently active on the server.
    pub is_active: bool,

    /// Descriptors of the identities contained in this group.
    #[serde(default)]
    pub members: Vec<IdentityDescriptor>,

    /// Descriptors of the groups containing this identity.
    #[serde(default)]
    pub member_of: Vec<IdentityDescriptor>,
}

impl Identity {
    /// Create a new identity with no membership edges.
    pub fn new(
        display_name: impl Into<String>,
        unique_name: impl Into<String>,
        descriptor: IdentityDescriptor,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            unique_name: unique_name.into(),
            descriptor,
            is_active: true,
            members: Vec::new(),
            member_of: Vec::new(),
        }
    }

    /// Set the member descriptors (group expansion).
    pub fn with_members(mut self, members: Vec<IdentityDescriptor>) -> Self {
        self.members = members;
        self
    }

    /// Set the containing-group descriptors (user expansion).
    pub fn with_member_of(mut self, member_of: Vec<IdentityDescriptor>) -> Self {
        self.member_of = member_of;
        self
    }

    /// Set the activity flag.
    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_display() {
        let descriptor = IdentityDescriptor::new("System.Security.Principal", "S-1-5-21-1");
        assert_eq!(descriptor.to_string(), "System.Security.Principal;S-1-5-21-1");
    }

    #[test]
    fn test_system_identity_markers() {
        let unauthenticated = IdentityDescriptor::new(UNAUTHENTICATED_IDENTITY_TYPE, "x");
        let synthetic = IdentityDescriptor::new(SYNTHETIC_IDENTITY_TYPE, "y");
        let user = IdentityDescriptor::new("System.Security.Principal", "S-1-5-21-1");

        assert!(unauthenticated.is_system_identity());
        assert!(synthetic.is_system_identity());
        assert!(!user.is_system_identity());
    }

    #[test]
    fn test_identity_builder() {
        let group_descriptor = IdentityDescriptor::new("Microsoft.TeamFoundation.Group", "g1");
        let identity = Identity::new(
            "Alice Smith",
            "DOMAIN\\alice",
            IdentityDescriptor::new("System.Security.Principal", "S-1"),
        )
        .with_member_of(vec![group_descriptor.clone()])
        .with_active(false);

        assert_eq!(identity.unique_name, "DOMAIN\\alice");
        assert_eq!(identity.member_of, vec![group_descriptor]);
        assert!(!identity.is_active);
        assert!(identity.members.is_empty());
    }
}
