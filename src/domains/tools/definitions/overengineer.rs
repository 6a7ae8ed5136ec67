//! Overengineer tool definition.
//!
//! Turns a simple idea into an absurdly over-engineered system design and
//! returns it as a single pretty-printed JSON text block.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{error, info, instrument};

use crate::domains::report::OverengineeringReport;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the overengineer tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct OverengineerParams {
    /// The simple thing you want to do.
    #[schemars(description = "The simple thing you want to do (e.g., \"make tea\", \"water plants\").")]
    pub idea: String,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Overengineer tool - the only tool this server exposes.
pub struct OverengineerTool;

impl OverengineerTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "overengineer";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Turn a simple idea into an absurdly over-engineered system design.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(idea_len = params.idea.len()))]
    pub fn execute(params: &OverengineerParams) -> CallToolResult {
        info!("Overengineer tool called");

        let report = OverengineeringReport::generate(&params.idea);
        match report.to_pretty_json() {
            Ok(json) => {
                info!("Generated report at {}", report.generated_at);
                CallToolResult::success(vec![Content::text(json)])
            }
            Err(e) => {
                error!("Failed to serialize report: {}", e);
                CallToolResult::error(vec![Content::text(format!(
                    "Failed to serialize report: {}",
                    e
                ))])
            }
        }
    }

    /// Decode raw JSON arguments into tool parameters.
    pub fn parse_arguments(
        arguments: serde_json::Map<String, serde_json::Value>,
    ) -> Result<OverengineerParams, serde_json::Error> {
        serde_json::from_value(serde_json::Value::Object(arguments))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<OverengineerParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the stdio server.
    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            async move {
                let params = Self::parse_arguments(args)
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params))
            }
            .boxed()
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    fn text_of(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        }
    }

    #[test]
    fn test_execute_returns_single_text_block() {
        let params = OverengineerParams {
            idea: "make tea".to_string(),
        };
        let result = OverengineerTool::execute(&params);
        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(result.content.len(), 1);

        let parsed: serde_json::Value = serde_json::from_str(text_of(&result)).unwrap();
        assert_eq!(parsed["input"], "make tea");
        assert_eq!(
            parsed["vision"],
            "Enterprise-grade make tea platform (multi-tenant, globally distributed)."
        );
    }

    #[test]
    fn test_parse_arguments() {
        let args = serde_json::json!({ "idea": "water plants" });
        let params = OverengineerTool::parse_arguments(args.as_object().unwrap().clone()).unwrap();
        assert_eq!(params.idea, "water plants");
    }

    #[test]
    fn test_parse_arguments_missing_idea() {
        let result = OverengineerTool::parse_arguments(serde_json::Map::new());
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_arguments_wrong_type() {
        let args = serde_json::json!({ "idea": 42 });
        let result = OverengineerTool::parse_arguments(args.as_object().unwrap().clone());
        assert!(result.is_err());
    }

    #[test]
    fn test_tool_metadata() {
        let tool = OverengineerTool::to_tool();
        assert_eq!(tool.name, "overengineer");
        assert!(tool.description.is_some());

        let schema = serde_json::Value::Object((*tool.input_schema).clone());
        assert_eq!(schema["properties"]["idea"]["type"], "string");
        assert_eq!(schema["required"], serde_json::json!(["idea"]));
    }
}
