//! Rule-set validation
//!
//! Checks a rule-set before it is registered so that rule/fact mismatches
//! are caught when the service is built rather than on a live call.
//!
//! # Example
//!
//! ```rust,ignore
//! use verdict_sdk::{RuleSetValidator, RuleSet};
//!
//! let result = RuleSetValidator::validate(&rule_set);
//! for error in &result.errors {
//!     println!("{}", error);
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use verdict_core::{Action, Business, Rule, RuleCategory, RuleSet, Template};

/// Severity level for validation diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    Error,
    Warning,
}

/// A single diagnostic message from validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Severity level
    pub severity: DiagnosticSeverity,

    /// Error/warning code (e.g., "E001", "W001")
    pub code: String,

    /// Human-readable message
    pub message: String,

    /// Offending rule, if the diagnostic is about one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_id: Option<String>,
}

impl Diagnostic {
    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: DiagnosticSeverity::Error,
            code: code.into(),
            message: message.into(),
            rule_id: None,
        }
    }

    pub fn warning(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: DiagnosticSeverity::Warning,
            code: code.into(),
            message: message.into(),
            rule_id: None,
        }
    }

    pub fn with_rule(mut self, rule_id: impl Into<String>) -> Self {
        self.rule_id = Some(rule_id.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.rule_id {
            Some(rule_id) => write!(f, "[{}] rule '{}': {}", self.code, rule_id, self.message),
            None => write!(f, "[{}] {}", self.code, self.message),
        }
    }
}

/// Outcome of validating one rule-set
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub errors: Vec<Diagnostic>,
    pub warnings: Vec<Diagnostic>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn push(&mut self, diagnostic: Diagnostic) {
        match diagnostic.severity {
            DiagnosticSeverity::Error => self.errors.push(diagnostic),
            DiagnosticSeverity::Warning => self.warnings.push(diagnostic),
        }
    }
}

pub struct RuleSetValidator;

impl RuleSetValidator {
    /// Validate every rule of the rule-set
    pub fn validate(rule_set: &RuleSet) -> ValidationResult {
        let mut result = ValidationResult::default();
        let mut seen = HashSet::new();

        if rule_set.name.trim().is_empty() {
            result.push(Diagnostic::error("E001", "rule set name is empty"));
        }

        for rule in &rule_set.rules {
            if rule.id.trim().is_empty() {
                result.push(Diagnostic::error("E001", "rule id is empty"));
            } else if !seen.insert(rule.id.as_str()) {
                result.push(Diagnostic::error("E002", "duplicate rule id").with_rule(&rule.id));
            }
            Self::validate_rule(rule, &mut result);
        }

        result
    }

    fn validate_rule(rule: &Rule, result: &mut ValidationResult) {
        for field in rule.when.fields() {
            Self::check_field(rule, field, result);
        }

        if rule.then.is_empty() {
            result.push(Diagnostic::warning("W001", "rule has no actions").with_rule(&rule.id));
        }

        let mut enriches = false;
        for action in &rule.then {
            match action {
                Action::Reason { message, .. } => Self::check_template(rule, message, result),
                Action::Classify { code } => {
                    if rule.category == RuleCategory::Enrichment {
                        result.push(
                            Diagnostic::error(
                                "E005",
                                format!(
                                    "enrichment rule cannot classify the response as '{}'",
                                    code
                                ),
                            )
                            .with_rule(&rule.id),
                        );
                    }
                    if code.trim().is_empty() {
                        result.push(
                            Diagnostic::error("E006", "classification code is empty")
                                .with_rule(&rule.id),
                        );
                    }
                }
                Action::Enrich { field, value } => {
                    enriches = true;
                    Self::check_field(rule, field, result);
                    Self::check_template(rule, value, result);
                }
            }
        }

        if rule.category == RuleCategory::Enrichment && !enriches && !rule.then.is_empty() {
            result.push(
                Diagnostic::warning("W002", "enrichment rule has no enrich action")
                    .with_rule(&rule.id),
            );
        }
    }

    fn check_template(rule: &Rule, template: &Template, result: &mut ValidationResult) {
        match template.placeholders() {
            Ok(fields) => {
                for field in fields {
                    Self::check_field(rule, field, result);
                }
            }
            Err(e) => result.push(Diagnostic::error("E004", e.to_string()).with_rule(&rule.id)),
        }
    }

    /// Only the Business shape is known ahead of time; record shapes are
    /// checked when a call supplies them.
    fn check_field(rule: &Rule, field: &str, result: &mut ValidationResult) {
        if rule.fact_type == Business::FACT_TYPE && !Business::FIELDS.contains(&field) {
            result.push(
                Diagnostic::error(
                    "E003",
                    format!("unknown field '{}' on {}", field, Business::FACT_TYPE),
                )
                .with_rule(&rule.id),
            );
        }
    }
}
