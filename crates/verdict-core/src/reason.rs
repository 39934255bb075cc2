//! Reasons attached to a decision

use crate::ast::RuleCategory;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Explains a filter or validation outcome.
///
/// Two reasons are equal when their messages are equal; the code and the
/// originating rule are informational.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reason {
    /// Human-readable message (e.g. "zipcode is empty")
    pub message: String,

    /// Optional machine-readable code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Rule that attached this reason
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule_id: Option<String>,

    /// Category of the rule that attached this reason
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<RuleCategory>,
}

impl Reason {
    /// Create a reason with only a message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
            rule_id: None,
            category: None,
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_rule(mut self, rule_id: impl Into<String>, category: RuleCategory) -> Self {
        self.rule_id = Some(rule_id.into());
        self.category = Some(category);
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl PartialEq for Reason {
    fn eq(&self, other: &Self) -> bool {
        self.message == other.message
    }
}

impl Eq for Reason {}

impl Hash for Reason {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.message.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_equality_is_by_message() {
        let attached = Reason::new("zipcode is empty")
            .with_code("V001")
            .with_rule("zip_code_empty", RuleCategory::Validation);

        assert_eq!(attached, Reason::new("zipcode is empty"));
        assert_ne!(attached, Reason::new("address line 1 is null"));
    }

    #[test]
    fn test_contains_lookup() {
        let reasons = vec![
            Reason::new("zipcode is empty").with_code("V001"),
            Reason::new("address line 1 is null").with_code("V002"),
        ];
        assert!(reasons.contains(&Reason::new("address line 1 is null")));
    }

    #[test]
    fn test_hash_follows_message() {
        let mut set = HashSet::new();
        set.insert(Reason::new("business filtered: from Kansas").with_code("F001"));
        set.insert(Reason::new("business filtered: from Kansas"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_serde_skips_empty_metadata() {
        let json = serde_json::to_string(&Reason::new("zipcode is empty")).unwrap();
        assert_eq!(json, r#"{"message":"zipcode is empty"}"#);
    }
}
