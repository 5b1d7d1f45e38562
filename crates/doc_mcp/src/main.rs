//! MCP Server Binary Entry Point
//!
//! This binary implements a JSON-RPC 2.0 server over stdin/stdout
//! following the Model Context Protocol (MCP) specification.

use anyhow::Context;
use clap::Parser;
use doc_common::telemetry::{init_tracing, VERBOSE_FILTER};
use doc_common::{EXIT_CONFIG_ERROR, EXIT_ERROR};
use doc_config::Config;
use doc_mcp::{JsonRpcError, JsonRpcRequest, JsonRpcResponse, McpServer};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "docdeck-mcp",
    version,
    about = "Serve an in-memory document store over MCP (stdio)"
)]
struct Cli {
    /// Config file (defaults to <workspace>/.docdeck/config.toml)
    #[arg(long, env = "DOCDECK_CONFIG")]
    config: Option<PathBuf>,

    /// Workspace root used to locate the default config
    #[arg(long)]
    workspace: Option<PathBuf>,

    /// Enable verbose/debug logging
    #[arg(long)]
    verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => {
            let root = match &cli.workspace {
                Some(dir) => dir.clone(),
                None => std::env::current_dir().context("Failed to resolve current directory")?,
            };
            Config::load(&root)?
        }
    };
    Ok(config)
}

fn main() {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            // Tracing is not configured yet
            eprintln!("docdeck-mcp: {:#}", e);
            std::process::exit(EXIT_CONFIG_ERROR);
        }
    };

    let level = if cli.verbose {
        VERBOSE_FILTER
    } else {
        config.logging.level.as_str()
    };
    init_tracing(level, cli.json_logs || config.logging.json);

    if let Err(e) = run(&config) {
        tracing::error!("{:#}", e);
        std::process::exit(EXIT_ERROR);
    }
}

fn run(config: &Config) -> anyhow::Result<()> {
    tracing::info!(
        name = %config.server.name,
        documents = config.documents.len(),
        "DocDeck MCP server starting..."
    );

    let mut server = McpServer::from_config(config).context("Failed to build document store")?;

    // Requests are handled strictly one after another
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to create Tokio runtime")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut stdout_lock = stdout.lock();

    // Read requests from stdin line by line
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                tracing::error!("Error reading stdin: {}", e);
                break;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        tracing::debug!("Received: {}", line);

        let response = match serde_json::from_str::<JsonRpcRequest>(&line) {
            Ok(request) => rt.block_on(server.handle_request(request)),
            Err(e) => {
                tracing::error!("Failed to parse request: {}", e);
                Some(JsonRpcResponse::failure(None, JsonRpcError::parse_error(e)))
            }
        };

        // Notifications don't get responses
        let Some(resp) = response else {
            continue;
        };

        let response_json = match serde_json::to_string(&resp) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!("Failed to serialize response: {}", e);
                continue;
            }
        };

        tracing::debug!("Sending: {}", response_json);

        writeln!(stdout_lock, "{}", response_json).context("Failed to write response")?;
        stdout_lock.flush().context("Failed to flush stdout")?;
    }

    tracing::info!("DocDeck MCP server shutting down");
    Ok(())
}
