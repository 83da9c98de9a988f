//! Presentation layer: CLI entry point, menu loop, and terminal UI.

pub mod cli;
pub mod ui;
