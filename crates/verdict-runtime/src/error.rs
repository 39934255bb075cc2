//! Runtime error types

use thiserror::Error;
use verdict_core::CoreError;

/// Runtime error
///
/// Both rule errors are configuration defects: the rule and the fact shape
/// it was paired with do not fit together.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RuntimeError {
    /// A rule action cannot be applied to the matched fact
    #[error("Rule action error in '{rule_id}' on {fact_type}: {source}")]
    RuleActionError {
        rule_id: String,
        fact_type: String,
        #[source]
        source: CoreError,
    },

    /// A rule condition references something the fact does not have
    #[error("Rule condition error in '{rule_id}' on {fact_type}: {source}")]
    RuleConditionError {
        rule_id: String,
        fact_type: String,
        #[source]
        source: CoreError,
    },

    /// Activation points at a fact outside the store
    #[error("Fact index out of bounds: {0}")]
    FactIndexOutOfBounds(usize),
}

impl RuntimeError {
    pub fn action(rule_id: &str, fact_type: &str, source: CoreError) -> Self {
        RuntimeError::RuleActionError {
            rule_id: rule_id.to_string(),
            fact_type: fact_type.to_string(),
            source,
        }
    }

    pub fn condition(rule_id: &str, fact_type: &str, source: CoreError) -> Self {
        RuntimeError::RuleConditionError {
            rule_id: rule_id.to_string(),
            fact_type: fact_type.to_string(),
            source,
        }
    }

    /// Stable label for metrics
    pub fn kind(&self) -> &'static str {
        match self {
            RuntimeError::RuleActionError { .. } => "rule_action",
            RuntimeError::RuleConditionError { .. } => "rule_condition",
            RuntimeError::FactIndexOutOfBounds(_) => "fact_index",
        }
    }
}

/// Result type for runtime operations
pub type Result<T> = std::result::Result<T, RuntimeError>;
