//! Remove a user from every group across every project collection.

use thiserror::Error;
use tracing::debug;

use crate::application::reporter::StatusReporter;
use crate::domain::entities::{CollectionRef, Identity, IdentityDescriptor};
use crate::domain::value_objects::AccountName;
use crate::infrastructure::tfs::{
    CollectionService, DirectoryError, IdentityDirectory, MembershipQuery,
};

/// Removal errors.
#[derive(Debug, Error)]
pub enum RemoveUserError {
    /// A collection is missing its identity-management or team service.
    /// This aborts the whole removal, not just the collection.
    #[error("{service} not found for collection '{collection}'")]
    ServiceUnavailable {
        /// Display name of the missing service.
        service: &'static str,
        /// Collection the service was resolved on.
        collection: String,
    },

    /// A remote call failed outside the per-group handled path.
    #[error("Directory operation failed: {0}")]
    Directory(#[from] DirectoryError),
}

/// Removal configuration.
#[derive(Debug, Clone)]
pub struct RemoveUserConfig {
    /// Account name of the user to remove everywhere.
    pub target: AccountName,

    /// Collection names excluded from the walk.
    pub ignored_collections: Vec<String>,
}

/// One group the target could not be removed from.
#[derive(Debug, Clone)]
pub struct GroupRemovalFailure {
    /// Collection the group lives in.
    pub collection: String,
    /// Group display name, or the raw descriptor when the group itself
    /// could not be resolved.
    pub group: String,
    /// Underlying error message.
    pub message: String,
}

/// Outcome of a removal walk.
///
/// Removal is not transactional: memberships removed before a later failure
/// stay removed. The counts summarize what was logged per item.
#[derive(Debug, Clone, Default)]
pub struct RemoveUserResult {
    /// Group memberships successfully removed.
    pub removed_count: usize,

    /// Per-group failures, none of which stopped the walk.
    pub failures: Vec<GroupRemovalFailure>,

    /// Collections where the target was not found.
    pub collections_without_user: Vec<String>,

    /// Collections actually walked.
    pub collections_scanned: usize,

    /// Collections skipped through the ignore set.
    pub collections_ignored: usize,
}

impl RemoveUserResult {
    /// Whether any per-group removal failed.
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Looks the target up in each collection and removes it from every group
/// it belongs to, isolating each group removal so one failure never stops
/// the rest.
pub struct RemoveUserUseCase {
    config: RemoveUserConfig,
}

impl RemoveUserUseCase {
    /// Create the use case with the given configuration.
    pub fn new(config: RemoveUserConfig) -> Self {
        Self { config }
    }

    /// Execute the removal.
    pub async fn execute(
        &self,
        directory: &dyn IdentityDirectory,
        reporter: &dyn StatusReporter,
    ) -> Result<RemoveUserResult, RemoveUserError> {
        let mut result = RemoveUserResult::default();
        let target_name = self.config.target.as_str();

        for collection in directory.collections().await? {
            if collection.is_ignored(&self.config.ignored_collections) {
                reporter.warning(&format!("{} ignored.", collection.name));
                result.collections_ignored += 1;
                continue;
            }
            reporter.info(&format!("Collection: {}", collection.name));

            self.check_services(directory, &collection).await?;

            reporter.info("Reading identities");
            let target = directory
                .read_identity_by_name(&collection, target_name, MembershipQuery::Expanded)
                .await?;

            let target = match target {
                Some(target) => target,
                None => {
                    reporter.success(&format!(
                        "{target_name} is not found in {}.",
                        collection.name
                    ));
                    result.collections_without_user.push(collection.name.clone());
                    result.collections_scanned += 1;
                    continue;
                }
            };

            debug!(
                collection = %collection.name,
                groups = target.member_of.len(),
                "removing target from containing groups"
            );

            for group in target.member_of.clone() {
                match self
                    .remove_from_group(directory, &collection, &group, &target, reporter)
                    .await
                {
                    Ok(()) => {
                        reporter.info("Removed.");
                        result.removed_count += 1;
                    }
                    Err(e) => {
                        // One failed group must not stop the remaining
                        // groups or collections.
                        reporter.error(&format!("Not removed. Because: {e}"));
                        result.failures.push(GroupRemovalFailure {
                            collection: collection.name.clone(),
                            group: group.to_string(),
                            message: e.to_string(),
                        });
                    }
                }
            }

            result.collections_scanned += 1;
        }

        Ok(result)
    }

    /// Resolve the group behind `descriptor` and remove the target from it.
    /// Any directory error here is a per-group failure.
    async fn remove_from_group(
        &self,
        directory: &dyn IdentityDirectory,
        collection: &CollectionRef,
        descriptor: &IdentityDescriptor,
        target: &Identity,
        reporter: &dyn StatusReporter,
    ) -> Result<(), DirectoryError> {
        let group = directory
            .read_identity_by_descriptor(collection, descriptor, MembershipQuery::None)
            .await?
            .ok_or_else(|| DirectoryError::Rejected {
                message: format!("group {descriptor} could not be resolved"),
            })?;

        reporter.detail(&format!("{} [{}]", group.display_name, group.is_active));

        directory
            .remove_member_from_group(collection, &group.descriptor, &target.descriptor)
            .await
    }

    async fn check_services(
        &self,
        directory: &dyn IdentityDirectory,
        collection: &CollectionRef,
    ) -> Result<(), RemoveUserError> {
        for service in [CollectionService::IdentityManagement, CollectionService::Team] {
            if !directory.has_service(collection, service).await? {
                return Err(RemoveUserError::ServiceUnavailable {
                    service: service.display_name(),
                    collection: collection.name.clone(),
                });
            }
        }
        Ok(())
    }
}
