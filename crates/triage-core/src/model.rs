use serde::{Deserialize, Serialize};

/// Known-good label subsets. Severity and category are open vocabularies:
/// the AI path can emit values outside these lists and they are stored
/// verbatim; display and aggregation mark them as unrecognized instead of
/// rejecting them.
pub const KNOWN_SEVERITIES: &[&str] = &["minor", "major", "blocker"];
pub const KNOWN_CATEGORIES: &[&str] = &["build", "test", "infra", "performance"];

pub fn is_known_severity(s: &str) -> bool {
    KNOWN_SEVERITIES.contains(&s)
}

pub fn is_known_category(s: &str) -> bool {
    KNOWN_CATEGORIES.contains(&s)
}

/// One analyzed build. Rows are append-only: created once, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildFailure {
    pub id: i64,
    pub job_name: String,
    pub build_number: i64,
    pub node_name: String,
    pub category: String,
    pub severity: String,
    pub summary: String,
    pub created_at: String,
}

/// Insertion payload. `created_at: None` lets the store stamp insertion time.
#[derive(Debug, Clone, Default)]
pub struct NewFailure {
    pub job_name: String,
    pub build_number: i64,
    pub node_name: String,
    pub category: String,
    pub severity: String,
    pub summary: String,
    pub created_at: Option<String>,
}

/// First-pass verdict from the keyword rules. `confident` is true only when
/// a specific keyword group matched rather than the fallthrough default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleVerdict {
    pub severity: String,
    pub category: String,
    pub confident: bool,
}

/// Labels extracted from the model's free-text report. Field-independent:
/// a missing category never invalidates a present severity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedLabels {
    pub severity: Option<String>,
    pub category: Option<String>,
}

/// Reconciled final labels for one triage run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub severity: String,
    pub category: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompletionResponse {
    pub text: String,
    pub provider: String,
    pub model: String,
    #[serde(default)]
    pub meta: serde_json::Value,
}
