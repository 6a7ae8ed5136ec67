//! Tool definitions module.
//!
//! Each tool is defined in its own file.

pub mod overengineer;

pub use overengineer::{OverengineerParams, OverengineerTool};
