//! SDK error types

use crate::validator::Diagnostic;
use thiserror::Error;

/// SDK error type
#[derive(Error, Debug)]
pub enum SdkError {
    /// Requested rule-set name is not registered
    #[error("Unknown rule set: {0}")]
    UnknownRuleSet(String),

    /// Rule-set rejected by build-time validation
    #[error("Invalid rule set '{rule_set}': {}", join_diagnostics(.errors))]
    InvalidRuleSet {
        rule_set: String,
        errors: Vec<Diagnostic>,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Runtime error (rule action or condition defects)
    #[error("Runtime error: {0}")]
    Runtime(#[from] verdict_runtime::RuntimeError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML configuration error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl SdkError {
    /// True for a rule action that does not fit its fact
    pub fn is_rule_action_error(&self) -> bool {
        matches!(
            self,
            SdkError::Runtime(verdict_runtime::RuntimeError::RuleActionError { .. })
        )
    }

    /// Stable label for metrics and audit events
    pub fn kind(&self) -> &'static str {
        match self {
            SdkError::UnknownRuleSet(_) => "unknown_rule_set",
            SdkError::InvalidRuleSet { .. } => "invalid_rule_set",
            SdkError::Config(_) => "config",
            SdkError::Runtime(e) => e.kind(),
            SdkError::Io(_) => "io",
            SdkError::Yaml(_) => "yaml",
        }
    }
}

fn join_diagnostics(errors: &[Diagnostic]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;
