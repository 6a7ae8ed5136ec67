//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the MCP server,
//! including error handling, configuration, logging, server lifecycle
//! management and the stdio transport.

pub mod config;
pub mod error;
pub mod logging;
pub mod server;
pub mod transport;

pub use config::{Config, LogSink, LoggingConfig};
pub use error::{Error, Result};
pub use logging::init_logging;
pub use server::McpServer;
pub use transport::{StdioTransport, TransportError};
