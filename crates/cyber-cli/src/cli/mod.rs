//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use cyber_core::logging::{self, WorkerGuard};
use cyber_core::{SearchClient, config};
use tracing::info;

mod commands;

#[derive(Parser)]
#[command(name = "cyber-search")]
#[command(version)]
#[command(about = "Cyber Search: query a search endpoint from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Search endpoint URL for this run (overrides the config file)
    #[arg(long, global = true, env = "CYBER_SEARCH_ENDPOINT", value_name = "URL")]
    endpoint: Option<String>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Runs a single search and prints the results
    Search {
        /// The search query
        #[arg(value_name = "QUERY")]
        query: String,

        /// Print the result list as JSON
        #[arg(long)]
        json: bool,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
    /// Store the search endpoint in the config file
    SetEndpoint {
        /// Absolute http(s) URL of the search API
        #[arg(value_name = "URL")]
        url: String,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;
    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let Cli { command, endpoint } = cli;

    match command {
        // Config commands must work even when the file on disk is broken.
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
            ConfigCommands::SetEndpoint { url } => commands::config::set_endpoint(&url),
        },
        Some(Commands::Search { query, json }) => {
            let (client, _log_guard) = prepare(endpoint)?;
            commands::search::run(&client, &query, json).await
        }
        None => {
            let (client, _log_guard) = prepare(endpoint)?;
            commands::tui::run(client)
        }
    }
}

/// Loads config, applies the endpoint override, starts logging and builds
/// the client. Keep the returned guard alive while the command runs.
fn prepare(endpoint: Option<String>) -> Result<(SearchClient, Option<WorkerGuard>)> {
    let mut config = config::Config::load().context("load config")?;
    if let Some(endpoint) = endpoint {
        config.endpoint = endpoint;
    }

    // Logging is diagnostics only; a read-only home must not block searching.
    let guard = match logging::init(&config) {
        Ok(guard) => Some(guard),
        Err(err) => {
            eprintln!("Warning: logging disabled: {err:#}");
            None
        }
    };

    let client = SearchClient::from_config(&config).context("configure search client")?;
    info!(endpoint = %client.endpoint(), "search client ready");
    Ok((client, guard))
}
