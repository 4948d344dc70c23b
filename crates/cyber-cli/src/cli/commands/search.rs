//! One-shot search.
//!
//! Drives a single `SearchSession` through submit and settle, then prints the
//! settled state the same way the interactive screen shows it.

use std::io::{self, Write};

use anyhow::{Context, Result};
use cyber_core::{SearchClient, SearchResult, SearchSession};

pub async fn run(client: &SearchClient, query: &str, json: bool) -> Result<()> {
    let mut session = SearchSession::new();
    session.update_query(query);
    let Some(ticket) = session.submit() else {
        anyhow::bail!("Query is empty");
    };

    let results = client.search_or_empty(&ticket.query).await;
    session.settle(ticket.id, results);

    let mut out = io::stdout().lock();
    if json {
        let body = serde_json::to_string_pretty(session.results())
            .context("serialize results")?;
        writeln!(out, "{body}")?;
        return Ok(());
    }

    if let Some(message) = session.status_message() {
        writeln!(out, "{message}")?;
    }
    for result in session.results() {
        write_card(&mut out, result)?;
    }
    Ok(())
}

fn write_card(out: &mut impl Write, result: &SearchResult) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "#{} {}", result.rank, result.name)?;
    writeln!(out, "   {}", result.url)?;
    if !result.snippet.is_empty() {
        writeln!(out, "   {}", result.snippet)?;
    }
    match (result.host_name.is_empty(), result.date.is_empty()) {
        (false, false) => writeln!(out, "   {} · {}", result.host_name, result.date),
        (false, true) => writeln!(out, "   {}", result.host_name),
        (true, false) => writeln!(out, "   {}", result.date),
        (true, true) => Ok(()),
    }
}
