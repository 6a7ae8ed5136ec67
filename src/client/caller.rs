//! MCP client session over a child process.

use rmcp::{
    RoleClient, ServiceExt,
    model::{CallToolRequestParam, CallToolResult, RawContent, Tool},
    service::RunningService,
    transport::{ConfigureCommandExt, TokioChildProcess},
};
use tokio::process::Command;
use tracing::{debug, info, instrument, warn};

use super::config::ClientConfig;
use super::error::{ClientError, ClientResult};
use crate::domains::tools::definitions::OverengineerTool;

/// An MCP client connected to a server process.
pub struct ToolCaller {
    service: RunningService<RoleClient, ()>,
}

impl ToolCaller {
    /// Spawn the configured server and complete the MCP handshake.
    #[instrument(skip_all, fields(command = %config.server_command.display()))]
    pub async fn spawn(config: &ClientConfig) -> ClientResult<Self> {
        let command = config.server_command.display().to_string();

        let transport = TokioChildProcess::new(Command::new(&config.server_command).configure(
            |cmd| {
                cmd.args(&config.server_args);
            },
        ))
        .map_err(|e| ClientError::spawn(&command, e))?;

        let service = ()
            .serve(transport)
            .await
            .map_err(|e| ClientError::handshake(e.to_string()))?;

        info!("Connected to {}", command);
        Ok(Self { service })
    }

    /// List available tools from the server.
    pub async fn list_tools(&self) -> ClientResult<Vec<Tool>> {
        let response = self
            .service
            .list_tools(Default::default())
            .await
            .map_err(|e| ClientError::request(e.to_string()))?;
        Ok(response.tools)
    }

    /// Names of the tools the server exposes, in listing order.
    pub async fn list_tool_names(&self) -> ClientResult<Vec<String>> {
        let tools = self.list_tools().await?;
        Ok(tools.into_iter().map(|t| t.name.to_string()).collect())
    }

    /// Call a tool with the given name and arguments.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Map<String, serde_json::Value>,
    ) -> ClientResult<CallToolResult> {
        let params: CallToolRequestParam = serde_json::from_value(serde_json::json!({
            "name": name,
            "arguments": arguments,
        }))?;

        debug!("Calling tool {}", name);
        self.service
            .call_tool(params)
            .await
            .map_err(|e| ClientError::request(e.to_string()))
    }

    /// Call a tool and return the text of its first content block.
    pub async fn call_text(
        &self,
        name: &str,
        arguments: serde_json::Map<String, serde_json::Value>,
    ) -> ClientResult<String> {
        let result = self.call_tool(name, arguments).await?;
        let text = first_text(&result);

        if result.is_error.unwrap_or(false) {
            return Err(ClientError::ToolFailed {
                tool: name.to_string(),
                message: text.unwrap_or_default(),
            });
        }

        text.ok_or_else(|| ClientError::NoTextContent(name.to_string()))
    }

    /// Call the `overengineer` tool and return the JSON report text.
    pub async fn overengineer(&self, idea: &str) -> ClientResult<String> {
        let mut arguments = serde_json::Map::new();
        arguments.insert("idea".to_string(), serde_json::Value::from(idea));
        self.call_text(OverengineerTool::NAME, arguments).await
    }

    /// Close the session and terminate the server process.
    pub async fn shutdown(self) -> ClientResult<()> {
        let reason = self
            .service
            .cancel()
            .await
            .map_err(|e| ClientError::Shutdown(e.to_string()))?;
        debug!("Session closed: {:?}", reason);
        Ok(())
    }

    /// Shut the session down, then return `outcome`.
    ///
    /// A failure in `outcome` is reported even when shutdown also fails.
    pub async fn close_with<T>(self, outcome: ClientResult<T>) -> ClientResult<T> {
        let closed = self.shutdown().await;
        settle(outcome, closed)
    }
}

/// Merge a session outcome with its shutdown result. The session error wins.
fn settle<T>(outcome: ClientResult<T>, closed: ClientResult<()>) -> ClientResult<T> {
    match (outcome, closed) {
        (Err(e), Err(close_err)) => {
            warn!("Session did not close cleanly: {}", close_err);
            Err(e)
        }
        (Err(e), Ok(())) => Err(e),
        (Ok(value), closed) => closed.map(|()| value),
    }
}

/// Text of the first content block, if it is a text block.
fn first_text(result: &CallToolResult) -> Option<String> {
    result.content.first().and_then(|content| match &content.raw {
        RawContent::Text(text) => Some(text.text.clone()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::Content;

    #[test]
    fn test_first_text() {
        let result = CallToolResult::success(vec![Content::text("{}"), Content::text("later")]);
        assert_eq!(first_text(&result).as_deref(), Some("{}"));
    }

    #[test]
    fn test_settle_keeps_session_error_over_shutdown_error() {
        let result: ClientResult<()> = settle(
            Err(ClientError::request("tool not found")),
            Err(ClientError::Shutdown("join failed".to_string())),
        );
        assert!(matches!(result, Err(ClientError::Request(msg)) if msg == "tool not found"));
    }

    #[test]
    fn test_settle_reports_shutdown_error_after_success() {
        let result = settle(Ok(7), Err(ClientError::Shutdown("join failed".to_string())));
        assert!(matches!(result, Err(ClientError::Shutdown(_))));
    }

    #[test]
    fn test_settle_clean() {
        let result = settle(Ok("report"), Ok(()));
        assert_eq!(result.unwrap(), "report");
    }

    #[test]
    fn test_first_text_empty() {
        let result = CallToolResult::success(vec![]);
        assert!(first_text(&result).is_none());
    }
}
