//! Interactive mode.

use anyhow::Result;
use cyber_core::SearchClient;

pub fn run(client: SearchClient) -> Result<()> {
    cyber_tui::run_interactive(client)
}
