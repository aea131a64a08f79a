//! Searchable fields service - Main entry point
//!
//! Serves the searchable field tools over MCP on stdin/stdout. Logs go to stderr.

use anyhow::Result;
use searchable_fields::server::{run_server, SearchableService};
use searchable_fields::Config;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can seed the filter
    let config = Config::from_env();
    let fallback_level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());

    // Initialize logging (stderr only to avoid polluting stdout/MCP communication)
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&fallback_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        modes = ?config.default_modes,
        strict = config.default_strict,
        max_value_chars = config.max_value_chars,
        "Starting searchable fields MCP server"
    );

    let server = SearchableService::new(config);
    let metrics = server.metrics().clone();

    // Run the server (this will block until the client disconnects)
    info!("Starting MCP server with stdio transport");
    run_server(server).await?;

    info!(metrics = ?metrics.summary(), "Searchable fields MCP server shutdown complete");
    Ok(())
}
