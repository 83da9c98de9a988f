//! The `L` menu action: list all users and refresh the session cache.

use anyhow::Result;

use crate::application::use_cases::{ListUsersConfig, ListUsersError, ListUsersUseCase};
use crate::presentation::cli::{wait_for_key, AppSession};
use crate::presentation::ui::DisplayHelper;

/// Lists the distinct users of every collection and caches them for the
/// remover's selector.
pub struct ListUsersCommand;

impl ListUsersCommand {
    /// Create the command.
    pub fn new() -> Self {
        Self
    }

    /// Execute the listing against the session's server.
    pub async fn execute(&self, session: &mut AppSession, display: &DisplayHelper) -> Result<()> {
        // The cache never carries entries from a previous listing.
        session.cached_users.clear();

        display.plain("Here your users:");

        let use_case = ListUsersUseCase::new(ListUsersConfig {
            ignored_collections: session.ignored_collections.clone(),
        });

        let result = match use_case.execute(&session.client, display).await {
            Ok(result) => result,
            Err(e @ ListUsersError::ServiceUnavailable { .. }) => {
                // Aborts the whole listing; the operator stays in the menu
                // after acknowledging the error.
                display.error(&e.to_string());
                display.plain("Press any key to continue.");
                wait_for_key();
                return Ok(());
            }
            Err(ListUsersError::Directory(e)) => return Err(e.into()),
        };

        display.plain("Users:");
        for user in &result.users {
            display.plain(user);
        }
        display.success("Completed.");

        if session.verbose {
            display.detail(&format!(
                "{} users across {} collections ({} ignored, {} without a valid-users group)",
                result.user_count(),
                result.collections_scanned,
                result.collections_ignored,
                result.collections_without_group.len()
            ));
        }

        session.cached_users = result.users;
        Ok(())
    }
}

impl Default for ListUsersCommand {
    fn default() -> Self {
        Self::new()
    }
}
