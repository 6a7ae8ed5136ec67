//! Transport layer for the MCP server.
//!
//! Only the standard input/output transport is provided. Framing and the
//! session handshake are handled by rmcp; this layer wires the server handler
//! to the process streams and reports how the session ended.

mod error;
pub mod stdio;

pub use error::{TransportError, TransportResult};
pub use stdio::StdioTransport;
