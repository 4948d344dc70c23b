//! CLI command handlers.

pub mod config;
pub mod search;
pub mod tui;
