//! MCP Server Entry Point
//!
//! This is the main entry point for the MCP server. It resolves configuration,
//! initializes logging, and starts the server with the configured transport.

use anyhow::Result;
use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use mempool_mcp_server::core::{CliArgs, Config, McpServer, TransportService};

#[tokio::main]
async fn main() -> Result<()> {
    // Resolve configuration from CLI arguments, environment, and defaults
    let cli = CliArgs::parse();
    let config = Config::resolve(&cli)?;

    // Initialize logging
    init_logging(&config.logging.level);

    info!("Starting {} v{}", config.server.name, config.server.version);

    // Report resolved values and where they came from (suppressed in stdio mode)
    config.log_summary();

    // Create the MCP server
    let server = McpServer::new(config.clone());

    info!("Server initialized");

    // Create and run the transport service
    let transport = TransportService::new(config.transport);
    transport.run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Configures tracing with the specified log level. All diagnostic output
/// goes to stderr; stdout is owned exclusively by the stdio transport so
/// that only protocol frames ever reach it.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}
