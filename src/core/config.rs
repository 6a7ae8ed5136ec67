//! Configuration management for the MCP server and its client.
//!
//! Configuration is populated from defaults, then overridden by environment
//! variables (optionally loaded from a `.env` file).

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,

    /// Where diagnostics are written.
    pub sink: LogSink,
}

/// Destination for diagnostic output.
///
/// Stdout carries the JSON-RPC stream, so it is deliberately not an option.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "path", rename_all = "lowercase")]
pub enum LogSink {
    /// Standard error (default).
    #[default]
    Stderr,

    /// Append to a file.
    File(PathBuf),
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            with_timestamps: true,
            sink: LogSink::Stderr,
        }
    }
}

impl LoggingConfig {
    /// Apply `MCP_LOG_*` environment overrides.
    pub fn apply_env(&mut self) {
        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            self.level = level;
        }

        if let Ok(path) = std::env::var("MCP_LOG_FILE") {
            if !path.trim().is_empty() {
                self.sink = LogSink::File(PathBuf::from(path));
            }
        }

        if let Ok(value) = std::env::var("MCP_LOG_TIMESTAMPS") {
            self.with_timestamps = parse_flag(&value, true);
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "overengineer-everything".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        config.logging.apply_env();

        config
    }
}

/// Parse a boolean-ish environment value, falling back to `default`.
pub(crate) fn parse_flag(value: &str, default: bool) -> bool {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => default,
    }
}
