//! Validated value objects for operator-supplied input.

pub mod account_name;
pub mod server_url;

pub use account_name::AccountName;
pub use server_url::ServerUrl;
