//! List the distinct users across every project collection.

use thiserror::Error;
use tracing::debug;

use crate::application::reporter::StatusReporter;
use crate::domain::entities::VALID_USERS_GROUP;
use crate::infrastructure::tfs::{
    CollectionService, DirectoryError, IdentityDirectory, MembershipQuery,
};

/// Listing errors.
#[derive(Debug, Error)]
pub enum ListUsersError {
    /// A collection is missing its identity-management or team service.
    /// This aborts the whole listing, not just the collection.
    #[error("{service} not found for collection '{collection}'")]
    ServiceUnavailable {
        /// Display name of the missing service.
        service: &'static str,
        /// Collection the service was resolved on.
        collection: String,
    },

    /// A remote call failed.
    #[error("Directory operation failed: {0}")]
    Directory(#[from] DirectoryError),
}

/// Listing configuration.
#[derive(Debug, Clone, Default)]
pub struct ListUsersConfig {
    /// Collection names excluded from the walk.
    pub ignored_collections: Vec<String>,
}

/// Outcome of a listing walk.
#[derive(Debug, Clone, Default)]
pub struct ListUsersResult {
    /// Distinct unique names, sorted ascending.
    pub users: Vec<String>,

    /// Collections actually walked.
    pub collections_scanned: usize,

    /// Collections skipped through the ignore set.
    pub collections_ignored: usize,

    /// Collections where the valid-users group was absent.
    pub collections_without_group: Vec<String>,

    /// Members skipped because their identity type was synthetic.
    pub system_identities_skipped: usize,
}

impl ListUsersResult {
    /// Number of distinct users found.
    pub fn user_count(&self) -> usize {
        self.users.len()
    }
}

/// Walks the collection catalog and collects the membership of each
/// collection's valid-users group into one sorted, deduplicated name list.
pub struct ListUsersUseCase {
    config: ListUsersConfig,
}

impl ListUsersUseCase {
    /// Create the use case with the given configuration.
    pub fn new(config: ListUsersConfig) -> Self {
        Self { config }
    }

    /// Execute the listing.
    ///
    /// Per collection: the ignore set short-circuits first; a missing
    /// identity or team service aborts the whole operation; a missing
    /// valid-users group only skips the collection. Members whose
    /// descriptor marks a system identity are dropped before resolution.
    pub async fn execute(
        &self,
        directory: &dyn IdentityDirectory,
        reporter: &dyn StatusReporter,
    ) -> Result<ListUsersResult, ListUsersError> {
        let mut result = ListUsersResult::default();

        for collection in directory.collections().await? {
            if collection.is_ignored(&self.config.ignored_collections) {
                reporter.warning(&format!("{} ignored.", collection.name));
                result.collections_ignored += 1;
                continue;
            }
            reporter.info(&format!("Collection: {}", collection.name));

            self.check_services(directory, &collection).await?;

            let group = match directory
                .read_identity_by_name(&collection, VALID_USERS_GROUP, MembershipQuery::Expanded)
                .await?
            {
                Some(group) => group,
                None => {
                    reporter.error(&format!(
                        "{VALID_USERS_GROUP} not found for {}",
                        collection.name
                    ));
                    result.collections_without_group.push(collection.name.clone());
                    continue;
                }
            };

            debug!(
                collection = %collection.name,
                members = group.members.len(),
                "expanded valid-users group"
            );

            for member in &group.members {
                if member.is_system_identity() {
                    result.system_identities_skipped += 1;
                    continue;
                }

                let resolved = directory
                    .read_identity_by_descriptor(&collection, member, MembershipQuery::None)
                    .await?;

                if let Some(identity) = resolved {
                    // Linear containment is fine at the expected scale of
                    // tens to low hundreds of users.
                    if !result.users.contains(&identity.unique_name) {
                        result.users.push(identity.unique_name);
                    }
                }
            }

            result.collections_scanned += 1;
        }

        result.users.sort();
        Ok(result)
    }

    async fn check_services(
        &self,
        directory: &dyn IdentityDirectory,
        collection: &crate::domain::entities::CollectionRef,
    ) -> Result<(), ListUsersError> {
        for service in [CollectionService::IdentityManagement, CollectionService::Team] {
            if !directory.has_service(collection, service).await? {
                return Err(ListUsersError::ServiceUnavailable {
                    service: service.display_name(),
                    collection: collection.name.clone(),
                });
            }
        }
        Ok(())
    }
}
