//! CLI entry point and the interactive menu loop.

pub mod commands;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use console::{Key, Term};
use std::process::exit;

use crate::common::error::TfsAdminError;
use crate::domain::value_objects::ServerUrl;
use crate::infrastructure::tfs::TfsConfigurationClient;
use crate::presentation::cli::commands::{
    list_users::ListUsersCommand, remove_user::RemoveUserCommand,
};
use crate::presentation::ui::DisplayHelper;

/// tfsadmin - administer user identities across TFS project collections
#[derive(Parser)]
#[command(name = "tfsadmin")]
#[command(about = "Administer user identities across TFS project collections")]
#[command(version)]
pub struct Cli {
    /// Base URL of the configuration server
    pub server_url: Option<String>,

    /// Collection to exclude from every operation (repeatable)
    #[arg(long = "ignore-collection", value_name = "NAME")]
    pub ignored_collections: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

/// Mutable state of one administration session: the server client, the
/// operator's ignore set, and the user cache filled by the last listing.
pub struct AppSession {
    /// Connected configuration-server client.
    pub client: TfsConfigurationClient,
    /// Collection names excluded from every operation.
    pub ignored_collections: Vec<String>,
    /// Unique names collected by the last list operation; consumed by the
    /// remover's selector. Cleared whenever a new listing starts.
    pub cached_users: Vec<String>,
    /// Whether operations print their summaries.
    pub verbose: bool,
}

/// Menu states. `Listing` and `Removing` fall back to `Idle` when their
/// action completes; `Quit` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuState {
    Idle,
    Listing,
    Removing,
    Quit,
}

/// CLI application runner
pub struct CliApp {
    cli: Cli,
}

impl CliApp {
    /// Parse the command line.
    pub fn new() -> Self {
        Self { cli: Cli::parse() }
    }

    /// Run the session until the operator quits.
    pub async fn run(self) -> Result<()> {
        // Set up colored output
        let display = if self.cli.no_color {
            colored::control::set_override(false);
            DisplayHelper::new(false)
        } else {
            DisplayHelper::auto()
        };

        match self.run_session(&display).await {
            Ok(_) => Ok(()),
            Err(e) => {
                eprintln!("{} {}", "Error:".red().bold(), e);
                exit(1);
            }
        }
    }

    async fn run_session(&self, display: &DisplayHelper) -> Result<()> {
        let Some(ref url) = self.cli.server_url else {
            display.error("You must pass the server URL as the first argument.");
            display.plain("Press any key to exit.");
            wait_for_key();
            return Ok(());
        };

        let server_url = ServerUrl::new(url)
            .map_err(|e| TfsAdminError::invalid_server_url(url, e.to_string()))?;

        let (client, identity) = TfsConfigurationClient::connect(server_url)
            .await
            .map_err(|e| TfsAdminError::connection_failed(url, e))?;

        display.success(&format!("Connected to {url}"));
        display.plain(&format!(
            "Connected identity is {} : {}",
            identity.display_name, identity.unique_name
        ));

        let mut session = AppSession {
            client,
            ignored_collections: self.cli.ignored_collections.clone(),
            cached_users: Vec::new(),
            verbose: self.cli.verbose,
        };

        self.menu_loop(&mut session, display).await
    }

    /// The iterative menu state machine. Each action returns to the idle
    /// prompt; only quit leaves the loop.
    async fn menu_loop(&self, session: &mut AppSession, display: &DisplayHelper) -> Result<()> {
        let term = Term::stdout();
        let mut state = MenuState::Idle;

        loop {
            state = match state {
                MenuState::Idle => self.prompt_action(&term, display)?,
                MenuState::Listing => {
                    ListUsersCommand::new().execute(session, display).await?;
                    MenuState::Idle
                }
                MenuState::Removing => {
                    RemoveUserCommand::new()
                        .execute(session, display, &term)
                        .await?;
                    MenuState::Idle
                }
                MenuState::Quit => return Ok(()),
            };
        }
    }

    fn prompt_action(&self, term: &Term, display: &DisplayHelper) -> Result<MenuState> {
        display.plain("What do you want to do?");
        display.plain(
            "[L] : List All Users | [R] : Remove User from All Projects and Collections | [Q] : Quit",
        );

        let key = term.read_key().map_err(TfsAdminError::from)?;
        match key {
            Key::Char(c) if c.eq_ignore_ascii_case(&'l') => Ok(MenuState::Listing),
            Key::Char(c) if c.eq_ignore_ascii_case(&'r') => Ok(MenuState::Removing),
            Key::Char(c) if c.eq_ignore_ascii_case(&'q') => Ok(MenuState::Quit),
            _ => {
                display.warning("Sorry I didn't understand.");
                Ok(MenuState::Idle)
            }
        }
    }
}

impl Default for CliApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Block on a single keypress, but only when an operator is actually at the
/// terminal; piped stdin falls through so these paths stay scriptable and
/// testable.
fn wait_for_key() {
    if atty::is(atty::Stream::Stdin) {
        let _ = Term::stdout().read_key();
    }
}
