//! Rule registry
//!
//! Maps rule-set names to rule-sets. Populated by the builder, then frozen:
//! a built service only ever reads it, so it is shared across threads
//! without locking.

use crate::error::{Result, SdkError};
use std::collections::HashMap;
use verdict_core::RuleSet;

#[derive(Debug, Clone, Default)]
pub struct RuleRegistry {
    rule_sets: HashMap<String, RuleSet>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a rule-set under its name; names must be unique
    pub(crate) fn register(&mut self, rule_set: RuleSet) -> Result<()> {
        if self.rule_sets.contains_key(&rule_set.name) {
            return Err(SdkError::Config(format!(
                "rule set '{}' is registered twice",
                rule_set.name
            )));
        }
        self.rule_sets.insert(rule_set.name.clone(), rule_set);
        Ok(())
    }

    /// Resolve a rule-set by name
    pub fn resolve(&self, name: &str) -> Result<&RuleSet> {
        self.rule_sets
            .get(name)
            .ok_or_else(|| SdkError::UnknownRuleSet(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rule_sets.contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.rule_sets.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.rule_sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rule_sets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RuleSet> {
        self.rule_sets.values()
    }
}
