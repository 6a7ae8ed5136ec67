//! Client error types.

use thiserror::Error;

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors surfaced by the tool caller. None of them are retried.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server process could not be started.
    #[error("Failed to spawn server `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The MCP initialize exchange failed.
    #[error("Handshake failed: {0}")]
    Handshake(String),

    /// A request failed at the protocol level (unknown tool, bad params, closed pipe).
    #[error("Request failed: {0}")]
    Request(String),

    /// The tool ran but reported an error result.
    #[error("Tool `{tool}` returned an error: {message}")]
    ToolFailed { tool: String, message: String },

    /// The tool result had no text content block to print.
    #[error("Tool `{0}` returned no text content")]
    NoTextContent(String),

    /// Arguments could not be encoded into a request.
    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] serde_json::Error),

    /// Shutting the session down failed.
    #[error("Shutdown failed: {0}")]
    Shutdown(String),
}

impl ClientError {
    /// Create a spawn error.
    pub fn spawn(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::Spawn {
            command: command.into(),
            source,
        }
    }

    /// Create a handshake error.
    pub fn handshake(msg: impl Into<String>) -> Self {
        Self::Handshake(msg.into())
    }

    /// Create a request error.
    pub fn request(msg: impl Into<String>) -> Self {
        Self::Request(msg.into())
    }
}
