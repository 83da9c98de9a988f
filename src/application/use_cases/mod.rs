//! Use cases: list all users, remove a user everywhere.

pub mod list_users;
pub mod remove_user;

pub use list_users::{ListUsersConfig, ListUsersError, ListUsersResult, ListUsersUseCase};
pub use remove_user::{RemoveUserConfig, RemoveUserError, RemoveUserResult, RemoveUserUseCase};
