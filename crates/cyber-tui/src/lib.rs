//! Full-screen terminal client for Cyber Search.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stdout};

use anyhow::Result;
use cyber_core::SearchClient;
pub use features::{input, results};
pub use runtime::TuiRuntime;

/// Runs the interactive search screen until the user quits.
///
/// Blocks the calling thread. Must run inside a multi-threaded tokio runtime
/// so spawned searches make progress meanwhile.
pub fn run_interactive(client: SearchClient) -> Result<()> {
    if !stdout().is_terminal() {
        anyhow::bail!(
            "The interactive search screen requires a terminal.\n\
             Use `cyber-search search '...'` for non-interactive use."
        );
    }

    let mut runtime = TuiRuntime::new(client)?;
    runtime.run()
}
