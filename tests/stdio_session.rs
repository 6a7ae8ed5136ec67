//! End-to-end tests over the stdio transport.
//!
//! Each test spawns the real server binary as a child process and talks to
//! it through `ToolCaller`, exactly as the client binary does.

use std::path::PathBuf;

use chrono::DateTime;
use overengineer_mcp_server::client::{ClientConfig, ClientError, ToolCaller};

fn server_config() -> ClientConfig {
    let mut config = ClientConfig::default();
    config.server_command = PathBuf::from(env!("CARGO_BIN_EXE_overengineer_mcp_server"));
    config
}

async fn connect() -> ToolCaller {
    ToolCaller::spawn(&server_config())
        .await
        .expect("server should start and complete the handshake")
}

fn without_varying_fields(mut value: serde_json::Value) -> serde_json::Value {
    let obj = value.as_object_mut().unwrap();
    obj.remove("input");
    obj.remove("vision");
    obj.remove("generated_at");
    value
}

// =============================================================================
// Tool Listing
// =============================================================================

#[tokio::test]
async fn test_lists_exactly_one_tool() {
    let caller = connect().await;

    let names = caller.list_tool_names().await.unwrap();
    assert_eq!(names, vec!["overengineer".to_string()]);

    let tools = caller.list_tools().await.unwrap();
    let schema = serde_json::Value::Object((*tools[0].input_schema).clone());
    assert_eq!(schema["properties"]["idea"]["type"], "string");

    caller.shutdown().await.unwrap();
}

// =============================================================================
// Tool Calls
// =============================================================================

#[tokio::test]
async fn test_make_tea_end_to_end() {
    let caller = connect().await;

    let text = caller.overengineer("make tea").await.unwrap();
    let report: serde_json::Value = serde_json::from_str(&text).unwrap();

    assert_eq!(report["input"], "make tea");
    assert_eq!(
        report["vision"],
        "Enterprise-grade make tea platform (multi-tenant, globally distributed)."
    );
    assert_eq!(
        report["layers"],
        serde_json::json!([
            "Presentation Layer",
            "Application Orchestration Layer",
            "Domain Layer",
            "Infrastructure Layer",
            "Observability & Governance Layer"
        ])
    );
    assert_eq!(
        report["microservices"],
        serde_json::json!([
            "gateway-service",
            "orchestrator-service",
            "policy-service",
            "telemetry-service",
            "audit-service",
            "ml-insights-service"
        ])
    );
    assert!(text.starts_with("{\n  \"input\""));

    caller.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_fixed_fields_and_timestamps_across_calls() {
    let caller = connect().await;

    let first: serde_json::Value =
        serde_json::from_str(&caller.overengineer("water plants").await.unwrap()).unwrap();
    let second: serde_json::Value =
        serde_json::from_str(&caller.overengineer("feed the cat \"now\"").await.unwrap())
            .unwrap();

    assert_eq!(second["input"], "feed the cat \"now\"");
    assert!(
        second["vision"]
            .as_str()
            .unwrap()
            .contains("feed the cat \"now\"")
    );

    let first_at = first["generated_at"].as_str().unwrap().to_string();
    let second_at = second["generated_at"].as_str().unwrap().to_string();
    assert!(first_at.ends_with('Z'));
    assert!(second_at.ends_with('Z'));
    let first_at = DateTime::parse_from_rfc3339(&first_at).unwrap();
    let second_at = DateTime::parse_from_rfc3339(&second_at).unwrap();
    assert!(first_at <= second_at);

    assert_eq!(without_varying_fields(first), without_varying_fields(second));

    caller.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_non_ascii_idea_arrives_escaped() {
    let caller = connect().await;

    let text = caller.overengineer("日本茶").await.unwrap();
    assert!(text.is_ascii());
    assert!(text.contains("\\u65e5\\u672c\\u8336"));

    let report: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(report["input"], "日本茶");

    caller.shutdown().await.unwrap();
}

// =============================================================================
// Error Propagation
// =============================================================================

#[tokio::test]
async fn test_unknown_tool_is_a_request_error() {
    let caller = connect().await;

    let result = caller.call_text("underengineer", serde_json::Map::new()).await;
    assert!(matches!(result, Err(ClientError::Request(_))));

    caller.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_close_with_returns_the_call_error() {
    let caller = connect().await;

    let outcome = caller.call_text("underengineer", serde_json::Map::new()).await;
    let result = caller.close_with(outcome).await;
    assert!(matches!(result, Err(ClientError::Request(_))));
}

#[tokio::test]
async fn test_missing_idea_is_a_request_error() {
    let caller = connect().await;

    let result = caller.call_text("overengineer", serde_json::Map::new()).await;
    assert!(matches!(result, Err(ClientError::Request(_))));

    caller.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_missing_server_binary_fails_fast() {
    let mut config = ClientConfig::default();
    config.server_command = PathBuf::from("/nonexistent/overengineer_mcp_server");

    let result = ToolCaller::spawn(&config).await;
    assert!(result.is_err());
}
