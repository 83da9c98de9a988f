//! Terminal UI building blocks.

pub mod display;
pub mod selector;

pub use display::DisplayHelper;
pub use selector::{SelectorOutcome, UserSelector};
