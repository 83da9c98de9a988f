//! Interactive menu actions.

pub mod list_users;
pub mod remove_user;

pub use list_users::ListUsersCommand;
pub use remove_user::RemoveUserCommand;
