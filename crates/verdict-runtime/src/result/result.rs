//! Execution result types

use serde::{Deserialize, Serialize};
use verdict_core::{Reason, RuleCategory};

/// Overall response code and the rule category that set it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub code: String,
    pub category: RuleCategory,
}

/// A field write performed by an enrichment action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrichment {
    pub rule_id: String,
    pub fact_index: usize,
    pub field: String,
    pub value: String,
}

/// Outcome of firing one activation set
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Reasons in firing order
    pub reasons: Vec<Reason>,

    /// Response classification, if a filter or validation rule set one
    pub classification: Option<Classification>,

    /// Fired rule IDs, one entry per activation
    pub fired_rules: Vec<String>,

    /// Rule IDs suppressed because their fact was already filtered
    pub skipped_rules: Vec<String>,

    /// Field writes in firing order
    pub enrichments: Vec<Enrichment>,
}

impl ExecutionResult {
    /// Create a new execution result
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_reason(&mut self, reason: Reason) {
        self.reasons.push(reason);
    }

    /// Set the classification unless one of equal or higher precedence is
    /// already present. Returns whether the classification changed.
    pub fn classify(&mut self, code: impl Into<String>, category: RuleCategory) -> bool {
        if let Some(current) = &self.classification {
            if current.category.precedence() >= category.precedence() {
                return false;
            }
        }
        self.classification = Some(Classification {
            code: code.into(),
            category,
        });
        true
    }

    /// Mark a rule as fired
    pub fn mark_rule_fired(&mut self, rule_id: String) {
        self.fired_rules.push(rule_id);
    }

    pub fn mark_rule_skipped(&mut self, rule_id: String) {
        self.skipped_rules.push(rule_id);
    }

    pub fn record_enrichment(&mut self, enrichment: Enrichment) {
        self.enrichments.push(enrichment);
    }

    pub fn response_code(&self) -> Option<&str> {
        self.classification.as_ref().map(|c| c.code.as_str())
    }

    pub fn has_reason(&self, message: &str) -> bool {
        self.reasons.iter().any(|reason| reason.message == message)
    }
}
