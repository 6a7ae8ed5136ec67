//! MCP Server Entry Point
//!
//! Initializes logging, loads configuration, and serves the `overengineer`
//! tool over stdin/stdout.

use anyhow::Result;
use tracing::info;

use overengineer_mcp_server::core::{Config, McpServer, StdioTransport, init_logging};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment
    let config = Config::from_env();

    // Logging must be up before the transport claims stdout
    init_logging(&config.logging)?;

    info!("Starting {} v{}", config.server.name, config.server.version);

    let server = McpServer::new(config);

    info!("Server initialized with tools: {:?}", server.tool_names());

    StdioTransport::run(server).await?;

    info!("Server shutting down");

    Ok(())
}
