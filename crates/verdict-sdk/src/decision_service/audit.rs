//! Audit events
//!
//! One record per successful evaluation, emitted as a structured `tracing`
//! event under the `verdict::audit` target. Nothing is persisted; routing
//! the target to a sink is the subscriber's job.

use serde::Serialize;
use verdict_core::{Fact, Reason};
use verdict_runtime::ExecutionResult;

/// Log target audit events are emitted under
pub const AUDIT_TARGET: &str = "verdict::audit";

/// What one evaluation did
#[derive(Debug, Clone, Serialize)]
pub struct AuditRecord {
    pub evaluation_id: String,
    pub rule_set: String,
    /// Facts after enrichment
    pub facts: Vec<Fact>,
    pub fired_rules: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped_rules: Vec<String>,
    pub reasons: Vec<Reason>,
    pub response_code: Option<String>,
}

impl AuditRecord {
    pub fn new(
        evaluation_id: impl Into<String>,
        rule_set: impl Into<String>,
        facts: Vec<Fact>,
        result: &ExecutionResult,
    ) -> Self {
        Self {
            evaluation_id: evaluation_id.into(),
            rule_set: rule_set.into(),
            facts,
            fired_rules: result.fired_rules.clone(),
            skipped_rules: result.skipped_rules.clone(),
            reasons: result.reasons.clone(),
            response_code: result.response_code().map(str::to_string),
        }
    }

    /// Emit this record under the given audit log name
    pub fn emit(&self, audit_log: &str) {
        match serde_json::to_string(self) {
            Ok(record) => tracing::info!(
                target: AUDIT_TARGET,
                audit_log = %audit_log,
                evaluation_id = %self.evaluation_id,
                rule_set = %self.rule_set,
                "{}",
                record
            ),
            Err(e) => tracing::warn!(
                "Failed to serialize audit record {}: {}",
                self.evaluation_id,
                e
            ),
        }
    }
}
