//! Overengineering report domain.
//!
//! The report is a fixed-shape document: everything except the caller's idea,
//! the vision sentence built from it, and the generation timestamp is a
//! constant. Field order in the serialized JSON follows struct declaration
//! order.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Fixed Content
// ============================================================================

/// Architecture layers, outermost first.
pub const LAYERS: [&str; 5] = [
    "Presentation Layer",
    "Application Orchestration Layer",
    "Domain Layer",
    "Infrastructure Layer",
    "Observability & Governance Layer",
];

/// Services every idea apparently needs.
pub const MICROSERVICES: [&str; 6] = [
    "gateway-service",
    "orchestrator-service",
    "policy-service",
    "telemetry-service",
    "audit-service",
    "ml-insights-service",
];

/// Events published on the bus, in lifecycle order.
pub const EVENTS: [&str; 5] = [
    "IdeaReceived",
    "PlanGenerated",
    "DependencyResolved",
    "ExecutionSimulated",
    "PostmortemPublished",
];

pub const NAMESPACES: [&str; 4] = ["prod", "staging", "dev", "tea-lab"];

pub const RISK_REGISTER: [&str; 3] = [
    "Overfitting tea flavor model to a single mug",
    "Distributed tracing becomes the product",
    "Incident response team required for kettle upgrades",
];

// ============================================================================
// Report Model
// ============================================================================

/// The document returned by the `overengineer` tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverengineeringReport {
    /// The idea exactly as the caller supplied it.
    pub input: String,
    pub vision: String,
    pub layers: Vec<String>,
    pub microservices: Vec<String>,
    pub event_bus: EventBus,
    pub data: DataPlatform,
    pub kubernetes: KubernetesPlan,
    pub slo: ServiceLevelObjectives,
    pub risk_register: Vec<String>,
    /// ISO-8601 UTC timestamp with a trailing `Z`.
    pub generated_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventBus {
    #[serde(rename = "type")]
    pub kind: String,
    pub events: Vec<String>,
    pub guarantees: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataPlatform {
    pub primary_db: String,
    pub cache: String,
    pub warehouse: String,
    pub feature_store: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KubernetesPlan {
    pub namespaces: Vec<String>,
    pub deployment: String,
    pub autoscaling: String,
    pub secrets: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceLevelObjectives {
    pub availability: String,
    pub p95_latency: String,
    pub error_budget_policy: String,
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

impl OverengineeringReport {
    /// Build the report for `idea`, stamped with the current UTC time.
    pub fn generate(idea: &str) -> Self {
        Self::generate_at(idea, Utc::now())
    }

    /// Build the report for `idea` with an explicit generation time.
    pub fn generate_at(idea: &str, at: DateTime<Utc>) -> Self {
        Self {
            input: idea.to_string(),
            vision: vision_for(idea),
            layers: owned(&LAYERS),
            microservices: owned(&MICROSERVICES),
            event_bus: EventBus {
                kind: "Kafka (because of course)".to_string(),
                events: owned(&EVENTS),
                guarantees: "Exactly-once-ish (hand-wavy)".to_string(),
            },
            data: DataPlatform {
                primary_db: "PostgreSQL (core truth)".to_string(),
                cache: "Redis (because latency)".to_string(),
                warehouse: "Iceberg (because analytics)".to_string(),
                feature_store: "Feast (because ML)".to_string(),
            },
            kubernetes: KubernetesPlan {
                namespaces: owned(&NAMESPACES),
                deployment: "Helm + GitOps".to_string(),
                autoscaling: "HPA on 'steam_rate' metric".to_string(),
                secrets: "External Secrets + Vault (naturally)".to_string(),
            },
            slo: ServiceLevelObjectives {
                availability: "99.99%".to_string(),
                p95_latency: "42ms".to_string(),
                error_budget_policy: "Freeze innovation when budget burns".to_string(),
            },
            risk_register: owned(&RISK_REGISTER),
            generated_at: format_timestamp(at),
        }
    }

    /// Serialize with two-space indentation and ASCII-only output.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self).map(|json| escape_non_ascii(&json))
    }
}

/// Rewrite every non-ASCII character as a `\uXXXX` escape.
///
/// Non-ASCII text can only occur inside JSON string literals, so escaping the
/// serialized document is equivalent to escaping each string. Characters
/// above U+FFFF become UTF-16 surrogate pairs.
pub fn escape_non_ascii(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    let mut units = [0u16; 2];

    for c in json.chars() {
        if c.is_ascii() {
            out.push(c);
        } else {
            for unit in c.encode_utf16(&mut units) {
                out.push_str(&format!("\\u{:04x}", unit));
            }
        }
    }

    out
}

/// The one templated sentence in the report.
pub fn vision_for(idea: &str) -> String {
    format!("Enterprise-grade {idea} platform (multi-tenant, globally distributed).")
}

/// Format a UTC instant as ISO-8601 with microseconds and a `Z` suffix.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

// ============================================================================
// Tests
// ============================================================================
