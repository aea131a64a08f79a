//! MCP server for searchable field generation.
//!
//! Exposes the index builder, query builder and generators as MCP tools over
//! stdio.

pub mod handlers;

pub use handlers::{
    GenerateGramsParams, GeneratePrefixesParams, MakeSearchableParams, SearchByParams,
    SearchableService,
};

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Run the server with stdio transport.
///
/// Communicates via stdin/stdout using the MCP protocol and returns once the
/// client disconnects.
///
/// # Arguments
/// * `server` - The configured SearchableService instance
///
/// # Returns
/// An error if the server fails to start or encounters a fatal error
pub async fn run_server(server: SearchableService) -> Result<()> {
    let metrics = server.metrics().clone();

    let service = server.serve(stdio()).await?;
    service.waiting().await?;

    tracing::info!(
        requests = metrics.requests_total(),
        errors = metrics.request_errors_total(),
        "Client disconnected"
    );
    Ok(())
}
