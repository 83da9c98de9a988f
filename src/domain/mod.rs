//! Core domain model: remote identities, project collections, and the
//! validated inputs the console accepts.

pub mod entities;
pub mod value_objects;
