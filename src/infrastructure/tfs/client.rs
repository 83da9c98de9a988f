//! HTTP adapter for the configuration server's REST surface.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::entities::{CollectionRef, Identity, IdentityDescriptor};
use crate::domain::value_objects::ServerUrl;
use crate::infrastructure::tfs::directory::{
    CollectionService, DirectoryError, IdentityDirectory, MembershipQuery,
};
use crate::infrastructure::tfs::dto::{
    CollectionDto, ConnectionDataDto, IdentityDto, ListEnvelope,
};

/// Client for a TFS-style configuration server.
///
/// One client serves the whole session: the catalog lives under the server
/// base URL, per-collection identity services under
/// `{base}/{collection-id}/_apis/...`. Requests block the menu until they
/// return; there are no retries and no timeouts beyond reqwest's defaults.
pub struct TfsConfigurationClient {
    http: reqwest::Client,
    base_url: ServerUrl,
}

impl TfsConfigurationClient {
    /// Create a client for the given server.
    pub fn new(base_url: ServerUrl) -> Result<Self, DirectoryError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("tfsadmin/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(DirectoryError::network)?;

        Ok(Self { http, base_url })
    }

    /// Open a session: build the client and resolve the authenticated
    /// identity in one step, so a bad URL or unreachable server surfaces
    /// before the menu is shown.
    pub async fn connect(base_url: ServerUrl) -> Result<(Self, Identity), DirectoryError> {
        let client = Self::new(base_url)?;
        let identity = client.authenticated_identity().await?;
        Ok((client, identity))
    }

    fn collection_url(&self, collection: &CollectionRef, path: &str) -> String {
        self.base_url.join(&format!("{}/{}", collection.id, path))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, DirectoryError> {
        debug!(url, "GET");
        let response = self.http.get(url).query(query).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(DirectoryError::Http {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        let body = response.text().await.map_err(DirectoryError::network)?;
        decode_body(url, &body)
    }

    /// As [`Self::get_json`], but a 404 answer becomes `Ok(None)`: lookup
    /// misses are an expected condition, not a failure.
    async fn get_json_opt<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<Option<T>, DirectoryError> {
        debug!(url, "GET");
        let response = self.http.get(url).query(query).send().await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(DirectoryError::Http {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        let body = response.text().await.map_err(DirectoryError::network)?;
        decode_body(url, &body).map(Some)
    }
}

/// Decode a response body, mapping serde failures to
/// [`DirectoryError::Decode`] with the request URL in the message.
fn decode_body<T: DeserializeOwned>(url: &str, body: &str) -> Result<T, DirectoryError> {
    serde_json::from_str(body).map_err(|e| DirectoryError::Decode {
        message: format!("unexpected response from {url}"),
        source: Some(e),
    })
}

#[async_trait]
impl IdentityDirectory for TfsConfigurationClient {
    async fn authenticated_identity(&self) -> Result<Identity, DirectoryError> {
        let url = self.base_url.join("_apis/connectionData");
        let data: ConnectionDataDto = self
            .get_json(&url, &[("includeServices", "true")])
            .await?;
        Ok(data.authenticated_user.into())
    }

    async fn collections(&self) -> Result<Vec<CollectionRef>, DirectoryError> {
        let url = self.base_url.join("_apis/projectCollections");
        let envelope: ListEnvelope<CollectionDto> = self.get_json(&url, &[]).await?;
        Ok(envelope.value.into_iter().map(Into::into).collect())
    }

    async fn has_service(
        &self,
        collection: &CollectionRef,
        service: CollectionService,
    ) -> Result<bool, DirectoryError> {
        let url = self.collection_url(
            collection,
            &format!("_apis/servicedefinitions/{}", service.as_str()),
        );
        let definition: Option<serde_json::Value> = self.get_json_opt(&url, &[]).await?;
        Ok(definition.is_some())
    }

    async fn read_identity_by_name(
        &self,
        collection: &CollectionRef,
        account_name: &str,
        query: MembershipQuery,
    ) -> Result<Option<Identity>, DirectoryError> {
        let url = self.collection_url(collection, "_apis/identities");
        let envelope: Option<ListEnvelope<IdentityDto>> = self
            .get_json_opt(
                &url,
                &[
                    ("searchFilter", "AccountName"),
                    ("filterValue", account_name),
                    ("queryMembership", query.as_str()),
                ],
            )
            .await?;

        // An empty result list and a 404 both mean "not in this collection".
        Ok(envelope
            .and_then(|e| e.value.into_iter().next())
            .map(Into::into))
    }

    async fn read_identity_by_descriptor(
        &self,
        collection: &CollectionRef,
        descriptor: &IdentityDescriptor,
        query: MembershipQuery,
    ) -> Result<Option<Identity>, DirectoryError> {
        let url = self.collection_url(collection, "_apis/identities");
        let descriptor_value = descriptor.to_string();
        let envelope: Option<ListEnvelope<IdentityDto>> = self
            .get_json_opt(
                &url,
                &[
                    ("descriptors", descriptor_value.as_str()),
                    ("queryMembership", query.as_str()),
                ],
            )
            .await?;

        Ok(envelope
            .and_then(|e| e.value.into_iter().next())
            .map(Into::into))
    }

    async fn remove_member_from_group(
        &self,
        collection: &CollectionRef,
        group: &IdentityDescriptor,
        member: &IdentityDescriptor,
    ) -> Result<(), DirectoryError> {
        let url = self.collection_url(collection, "_apis/groups/members");
        debug!(url, group = %group, member = %member, "DELETE");
        let response = self
            .http
            .delete(&url)
            .query(&[
                ("groupDescriptor", group.to_string()),
                ("memberDescriptor", member.to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // Surface the server's message when it sends one; removal
            // failures are reported per group by the use case.
            let body = response.text().await.unwrap_or_default();
            let message = if body.trim().is_empty() {
                format!("Server returned {status} for {url}")
            } else {
                body.trim().to_string()
            };
            return Err(DirectoryError::Rejected { message });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn client() -> TfsConfigurationClient {
        TfsConfigurationClient::new(ServerUrl::new("https://tfs.example.com/tfs").unwrap())
            .unwrap()
    }

    #[test]
    fn test_malformed_body_is_a_decode_error() {
        let error = decode_body::<ListEnvelope<CollectionDto>>(
            "https://tfs.example.com/tfs/_apis/projectCollections",
            "<html>proxy error</html>",
        )
        .unwrap_err();

        match error {
            DirectoryError::Decode { message, source } => {
                assert!(message.contains("_apis/projectCollections"));
                assert!(source.is_some());
            }
            other => panic!("expected Decode, got {other}"),
        }
    }

    #[test]
    fn test_collection_url_layout() {
        let collection = CollectionRef::new(
            Uuid::parse_str("0d9b8ceb-8a34-4b37-a8d1-6a0aa20c7c0d").unwrap(),
            "DefaultCollection",
        );
        assert_eq!(
            client().collection_url(&collection, "_apis/identities"),
            "https://tfs.example.com/tfs/0d9b8ceb-8a34-4b37-a8d1-6a0aa20c7c0d/_apis/identities"
        );
    }
}
