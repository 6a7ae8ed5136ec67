//! Tool Router - builds the rmcp ToolRouter.
//!
//! Each tool knows how to create its own route; this module only collects them.
//! The router is the single dispatch path for tool calls.

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::OverengineerTool;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>() -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new().with_route(OverengineerTool::create_route())
}
