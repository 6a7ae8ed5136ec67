//! Client configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::core::config::LoggingConfig;

/// File name of the server executable built by this crate.
pub const SERVER_BINARY: &str = "overengineer_mcp_server";

/// Idea sent when none is configured.
pub const DEFAULT_IDEA: &str = "make tea";

/// Configuration for the tool caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Executable used to start the server.
    pub server_command: PathBuf,

    /// Arguments passed to the server executable.
    pub server_args: Vec<String>,

    /// Idea passed to the `overengineer` tool.
    pub idea: String,

    /// Logging configuration for the client process.
    pub logging: LoggingConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_command: default_server_command(),
            server_args: Vec::new(),
            idea: DEFAULT_IDEA.to_string(),
            logging: LoggingConfig::default(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Recognised: `MCP_CLIENT_SERVER_COMMAND`, `MCP_CLIENT_SERVER_ARGS`
    /// (whitespace separated), `MCP_CLIENT_IDEA`, plus the `MCP_LOG_*`
    /// logging variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(command) = std::env::var("MCP_CLIENT_SERVER_COMMAND") {
            if !command.trim().is_empty() {
                config.server_command = PathBuf::from(command);
            }
        }

        if let Ok(args) = std::env::var("MCP_CLIENT_SERVER_ARGS") {
            config.server_args = args.split_whitespace().map(str::to_string).collect();
        }

        if let Ok(idea) = std::env::var("MCP_CLIENT_IDEA") {
            config.idea = idea;
        }

        config.logging.apply_env();

        config
    }
}

/// The server binary next to the running executable, or a bare name resolved
/// through `PATH` when the executable location is unknown.
fn default_server_command() -> PathBuf {
    let file_name = format!("{}{}", SERVER_BINARY, std::env::consts::EXE_SUFFIX);

    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(&file_name)))
        .unwrap_or_else(|| PathBuf::from(file_name))
}
