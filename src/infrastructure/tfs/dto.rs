//! Wire representations of the server's REST responses.

use serde::Deserialize;
use uuid::Uuid;

use crate::domain::entities::{CollectionRef, Identity, IdentityDescriptor};

/// Standard list envelope used by the server.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ListEnvelope<T> {
    /// Number of entries in `value`.
    #[serde(default)]
    pub count: usize,
    /// The listed entries.
    #[serde(default)]
    pub value: Vec<T>,
}

/// Connection data returned when a session is opened.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionDataDto {
    /// The identity the server authenticated the caller as.
    pub authenticated_user: IdentityDto,
}

/// Catalog entry for a project collection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionDto {
    /// Collection instance id.
    pub id: Uuid,
    /// Collection name.
    pub name: String,
}

impl From<CollectionDto> for CollectionRef {
    fn from(dto: CollectionDto) -> Self {
        CollectionRef::new(dto.id, dto.name)
    }
}

/// Identity descriptor on the wire.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescriptorDto {
    /// Provider-qualified identity type.
    pub identity_type: String,
    /// Opaque identifier.
    pub identifier: String,
}

impl From<DescriptorDto> for IdentityDescriptor {
    fn from(dto: DescriptorDto) -> Self {
        IdentityDescriptor::new(dto.identity_type, dto.identifier)
    }
}

/// Identity record on the wire.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityDto {
    /// Display name.
    pub display_name: String,
    /// Login-style unique name. Some synthetic records omit it.
    #[serde(default)]
    pub unique_name: String,
    /// Addressing descriptor.
    pub descriptor: DescriptorDto,
    /// Activity flag.
    #[serde(default)]
    pub is_active: bool,
    /// Member descriptors, present when membership was queried on a group.
    #[serde(default)]
    pub members: Vec<DescriptorDto>,
    /// Containing-group descriptors, present when membership was queried on
    /// a user.
    #[serde(default)]
    pub member_of: Vec<DescriptorDto>,
}

impl From<IdentityDto> for Identity {
    fn from(dto: IdentityDto) -> Self {
        Identity {
            display_name: dto.display_name,
            unique_name: dto.unique_name,
            descriptor: dto.descriptor.into(),
            is_active: dto.is_active,
            members: dto.members.into_iter().map(Into::into).collect(),
            member_of: dto.member_of.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_identity_decoding() {
        let json = r#"{
            "displayName": "Alice Smith",
            "uniqueName": "DOMAIN\\alice",
            "descriptor": {
                "identityType": "System.Security.Principal",
                "identifier": "S-1-5-21-1"
            },
            "isActive": true,
            "memberOf": [
                { "identityType": "Microsoft.TeamFoundation.Group", "identifier": "g1" }
            ]
        }"#;

        let identity: Identity = serde_json::from_str::<IdentityDto>(json).unwrap().into();
        assert_eq!(identity.display_name, "Alice Smith");
        assert_eq!(identity.unique_name, "DOMAIN\\alice");
        assert!(identity.is_active);
        assert_eq!(identity.members.len(), 0);
        assert_eq!(
            identity.member_of,
            vec![IdentityDescriptor::new(
                "Microsoft.TeamFoundation.Group",
                "g1"
            )]
        );
    }

    #[test]
    fn test_identity_decoding_defaults() {
        // Synthetic records can omit uniqueName, isActive and both edge lists.
        let json = r#"{
            "displayName": "Service Account",
            "descriptor": {
                "identityType": "Microsoft.TeamFoundation.Identity",
                "identifier": "sys-1"
            }
        }"#;

        let identity: Identity = serde_json::from_str::<IdentityDto>(json).unwrap().into();
        assert_eq!(identity.unique_name, "");
        assert!(!identity.is_active);
        assert!(identity.descriptor.is_system_identity());
    }

    #[test]
    fn test_empty_list_envelope() {
        let json = r#"{ "count": 0, "value": [] }"#;
        let envelope: ListEnvelope<CollectionDto> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.count, 0);
        assert!(envelope.value.is_empty());
    }
}
