//! Overengineer MCP Server Library
//!
//! A single-tool Model Context Protocol server that turns a simple idea into
//! an absurdly over-engineered system design, plus the client that drives it
//! over stdio.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, logging, the server handler and
//!   the stdio transport
//! - **domains**: business logic
//!   - **report**: the fixed-shape architecture document
//!   - **tools**: the `overengineer` tool and its router
//! - **client**: spawns the server as a child process and calls its tools
//!
//! # Example
//!
//! ```rust,no_run
//! use overengineer_mcp_server::client::{ClientConfig, ToolCaller};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let caller = ToolCaller::spawn(&ClientConfig::default()).await?;
//!     println!("{}", caller.overengineer("make tea").await?);
//!     caller.shutdown().await?;
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
