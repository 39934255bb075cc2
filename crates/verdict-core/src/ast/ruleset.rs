//! Rule-set AST definitions
//!
//! A rule-set is the unit callers name when they ask for a decision.
//! Rule order is declaration order and is significant.

use super::rule::Rule;
use serde::{Deserialize, Serialize};

/// A named, ordered group of rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleSet {
    /// Key the rule-set is registered under (e.g. "VerifySupplier")
    pub name: String,

    /// Optional description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Rules in declaration order
    #[serde(default)]
    pub rules: Vec<Rule>,
}

impl RuleSet {
    /// Create a new rule-set
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            rules: Vec::new(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Append a rule
    pub fn add_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Replace all rules
    pub fn with_rules(mut self, rules: Vec<Rule>) -> Self {
        self.rules = rules;
        self
    }

    /// Look up a rule by ID
    pub fn rule(&self, id: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.id == id)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Action, Condition};

    #[test]
    fn test_ruleset_creation() {
        let ruleset = RuleSet::new("VerifySupplier")
            .with_description("Supplier onboarding checks")
            .add_rule(
                Rule::filter("kansas", "Business")
                    .when(Condition::equals("state_code", "KS"))
                    .then(Action::classify("filtered")),
            )
            .add_rule(Rule::validation("zip_code_empty", "Business"));

        assert_eq!(ruleset.name, "VerifySupplier");
        assert_eq!(ruleset.len(), 2);
        assert!(!ruleset.is_empty());
        assert_eq!(ruleset.rules[0].id, "kansas");
        assert!(ruleset.rule("zip_code_empty").is_some());
        assert!(ruleset.rule("missing").is_none());
    }

    #[test]
    fn test_with_rules_replaces() {
        let ruleset = RuleSet::new("Empty")
            .add_rule(Rule::validation("a", "Business"))
            .with_rules(vec![]);
        assert!(ruleset.is_empty());
    }
}
