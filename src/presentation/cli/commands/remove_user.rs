//! The `R` menu action: remove a user from every group everywhere.

use anyhow::Result;
use console::{Key, Term};

use crate::application::use_cases::{RemoveUserConfig, RemoveUserError, RemoveUserUseCase};
use crate::common::error::TfsAdminError;
use crate::domain::value_objects::AccountName;
use crate::infrastructure::tfs::IdentityDirectory;
use crate::presentation::cli::{wait_for_key, AppSession};
use crate::presentation::ui::{DisplayHelper, SelectorOutcome, UserSelector};

/// Prompts for a target user (typed or selected from the cache) and removes
/// it from every group across all collections.
pub struct RemoveUserCommand;

impl RemoveUserCommand {
    /// Create the command.
    pub fn new() -> Self {
        Self
    }

    /// Run the interactive remove flow. Returning `Ok` without remote calls
    /// is the normal outcome for `R` (back to menu) and for an empty target.
    pub async fn execute(
        &self,
        session: &mut AppSession,
        display: &DisplayHelper,
        term: &Term,
    ) -> Result<()> {
        let target = self.prompt_target(session, display, term)?;
        let ignored_collections = session.ignored_collections.clone();
        let ran = self
            .remove_target(&session.client, target, ignored_collections, display)
            .await?;
        if !ran {
            display.plain("Press any key to continue.");
            wait_for_key();
        }
        Ok(())
    }

    /// Run the removal for an already-resolved target. A `None` target (the
    /// operator typed or selected an empty name) returns immediately with no
    /// remote call made. `Ok(false)` means the walk was aborted because a
    /// required collection service is missing.
    pub async fn remove_target(
        &self,
        directory: &dyn IdentityDirectory,
        target: Option<AccountName>,
        ignored_collections: Vec<String>,
        display: &DisplayHelper,
    ) -> Result<bool> {
        let Some(target) = target else {
            return Ok(true);
        };

        display.plain(&format!("{target} will be removed."));

        let use_case = RemoveUserUseCase::new(RemoveUserConfig {
            target,
            ignored_collections,
        });

        let result = match use_case.execute(directory, display).await {
            Ok(result) => result,
            Err(e @ RemoveUserError::ServiceUnavailable { .. }) => {
                // Aborts the whole removal; the operator stays in the menu.
                display.error(&e.to_string());
                return Ok(false);
            }
            Err(RemoveUserError::Directory(e)) => return Err(e.into()),
        };

        display.success("Completed.");
        display.detail(&format!(
            "{} memberships removed, {} failed, user absent from {} of {} collections",
            result.removed_count,
            result.failures.len(),
            result.collections_without_user.len(),
            result.collections_scanned
        ));

        Ok(true)
    }

    /// The T/S/R mode prompt. `None` means return to the menu with no
    /// remote calls made.
    fn prompt_target(
        &self,
        session: &AppSession,
        display: &DisplayHelper,
        term: &Term,
    ) -> Result<Option<AccountName>> {
        loop {
            display.plain("How do you want to remove your user?");
            display.plain("[T] Type , [S] Select, [R] Return back");

            match self.read_mode_key(term)? {
                'r' => return Ok(None),
                't' => {
                    display.plain("Type User Identity (UserName) you want to remove:");
                    display.detail("Press enter if you want to exit.");
                    let line = term.read_line().map_err(TfsAdminError::from)?;
                    // Empty input aborts silently back to the menu.
                    return Ok(AccountName::parse(&line));
                }
                _ => {
                    if session.cached_users.is_empty() {
                        display.plain("There is no users to select.");
                        continue;
                    }
                    display.plain("You can use Left, Right, Up, Down button on your keyboard.");

                    let mut selector = UserSelector::new(session.cached_users.clone());
                    match selector.run(term, display).map_err(TfsAdminError::from)? {
                        SelectorOutcome::Cancelled => continue,
                        SelectorOutcome::Committed(name) => {
                            display.separator();
                            return Ok(AccountName::parse(&name));
                        }
                    }
                }
            }
        }
    }

    /// Swallow keys until one of T, S or R is pressed.
    fn read_mode_key(&self, term: &Term) -> Result<char> {
        loop {
            if let Key::Char(c) = term.read_key().map_err(TfsAdminError::from)? {
                let c = c.to_ascii_lowercase();
                if matches!(c, 't' | 's' | 'r') {
                    return Ok(c);
                }
            }
        }
    }
}

impl Default for RemoveUserCommand {
    fn default() -> Self {
        Self::new()
    }
}
