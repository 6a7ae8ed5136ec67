//! Domains module containing business logic organized by bounded contexts.
//!
//! - **report**: the over-engineered architecture document
//! - **tools**: MCP tools that can be executed by clients

pub mod report;
pub mod tools;
