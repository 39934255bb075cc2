//! Rule AST definitions

use super::action::Action;
use super::condition::Condition;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Behavior family a rule belongs to.
///
/// The category decides classification precedence and whether the rule is
/// suppressed once its fact has been filtered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleCategory {
    Filter,
    Validation,
    Enrichment,
}

impl RuleCategory {
    /// Classification precedence; a higher value overrides a lower one
    pub fn precedence(&self) -> u8 {
        match self {
            RuleCategory::Filter => 2,
            RuleCategory::Validation => 1,
            RuleCategory::Enrichment => 0,
        }
    }
}

impl fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RuleCategory::Filter => "filter",
            RuleCategory::Validation => "validation",
            RuleCategory::Enrichment => "enrichment",
        };
        f.write_str(name)
    }
}

/// Rule definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    /// Unique rule ID within its rule-set
    pub id: String,

    /// Human-readable name
    pub name: String,

    /// Optional description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub category: RuleCategory,

    /// Fact type this rule matches (e.g. "Business")
    pub fact_type: String,

    /// Higher salience fires first; ties keep declaration order
    #[serde(default)]
    pub salience: i32,

    /// Condition over the matched fact
    #[serde(default)]
    pub when: Condition,

    /// Actions, performed in order
    pub then: Vec<Action>,
}

impl Rule {
    /// Create a new rule
    pub fn new(
        id: impl Into<String>,
        category: RuleCategory,
        fact_type: impl Into<String>,
    ) -> Self {
        let id = id.into();
        Rule {
            name: id.clone(),
            id,
            description: None,
            category,
            fact_type: fact_type.into(),
            salience: 0,
            when: Condition::Always,
            then: Vec::new(),
        }
    }

    pub fn filter(id: impl Into<String>, fact_type: impl Into<String>) -> Self {
        Self::new(id, RuleCategory::Filter, fact_type)
    }

    pub fn validation(id: impl Into<String>, fact_type: impl Into<String>) -> Self {
        Self::new(id, RuleCategory::Validation, fact_type)
    }

    pub fn enrichment(id: impl Into<String>, fact_type: impl Into<String>) -> Self {
        Self::new(id, RuleCategory::Enrichment, fact_type)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_salience(mut self, salience: i32) -> Self {
        self.salience = salience;
        self
    }

    /// Set the condition
    pub fn when(mut self, condition: Condition) -> Self {
        self.when = condition;
        self
    }

    /// Append an action
    pub fn then(mut self, action: Action) -> Self {
        self.then.push(action);
        self
    }
}
