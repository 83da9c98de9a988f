//! # tfsadmin - TFS User Administration Console
//!
//! `tfsadmin` is an interactive command-line tool for administering user
//! identities across the project collections of a Team Foundation Server
//! style configuration server. It connects to the server, lists the distinct
//! users found in each collection's "Project Collection Valid Users" group,
//! and can remove a chosen user from every group they belong to across all
//! collections.
//!
//! ## Quick Start
//!
//! ```bash
//! tfsadmin https://tfs.example.com/tfs
//! ```
//!
//! At the main menu press `L` to list users, `R` to remove a user, `Q` to
//! quit. Inside the remove flow, `T` types a name, `S` scrolls through the
//! users collected by the last listing with the arrow keys, and `R` returns
//! to the menu.
//!
//! ## Architecture
//!
//! The crate is organized using clean architecture principles:
//!
//! - [`domain`]: Identity and collection entities plus validated value objects
//! - [`application`]: The list and remove use cases
//! - [`infrastructure`]: The remote identity/catalog service adapter
//! - [`presentation`]: CLI menu loop and terminal UI
//! - [`common`]: Shared error handling
//!
//! ## Remote services
//!
//! The configuration server is the single source of truth; nothing is
//! persisted locally. The [`infrastructure::tfs::IdentityDirectory`] trait
//! describes the remote surface (collection catalog, identity reads in both
//! membership directions, group-member removal) and
//! [`infrastructure::tfs::TfsConfigurationClient`] implements it over HTTP.
//! Tests substitute a scripted directory, so the use cases never need a live
//! server.

#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod application;
pub mod common;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

// Re-export commonly used types for convenience
pub use crate::common::error::TfsAdminError;
