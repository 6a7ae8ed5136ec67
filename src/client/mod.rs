//! Tool caller: the client half of the stdio protocol.
//!
//! Spawns the server as a child process, performs the MCP handshake, lists
//! tools and calls them. The child and its pipes belong to the session and
//! are released when the session is shut down or dropped.

mod caller;
mod config;
mod error;

pub use caller::ToolCaller;
pub use config::{ClientConfig, DEFAULT_IDEA, SERVER_BINARY};
pub use error::{ClientError, ClientResult};
