//! Tool caller entry point.
//!
//! Starts the server as a subprocess, lists its tools, calls `overengineer`
//! once and prints the result. Any failure ends the process with an error.

use anyhow::Result;
use tracing::info;

use overengineer_mcp_server::client::{ClientConfig, ClientResult, ToolCaller};
use overengineer_mcp_server::core::init_logging;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ClientConfig::from_env();

    init_logging(&config.logging)?;

    info!("Spawning server: {}", config.server_command.display());

    let caller = ToolCaller::spawn(&config).await?;

    let outcome = run(&caller, &config.idea).await;
    caller.close_with(outcome).await?;
    Ok(())
}

async fn run(caller: &ToolCaller, idea: &str) -> ClientResult<()> {
    let tools = caller.list_tool_names().await?;
    println!("Tools: {:?}", tools);

    let report = caller.overengineer(idea).await?;
    println!("\nResult:\n{}", report);

    Ok(())
}
