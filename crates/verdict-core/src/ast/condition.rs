//! Rule conditions
//!
//! A closed set of typed predicates over the fields of a single fact.

use crate::types::Value;
use serde::{Deserialize, Serialize};

/// Predicate over one fact's fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Condition {
    /// Always satisfied
    Always,
    /// Field is null
    Null { field: String },
    /// Field is an empty string (null does not count)
    Empty { field: String },
    /// Field is null or empty
    Missing { field: String },
    /// Field is neither null nor empty
    Present { field: String },
    /// Field equals the value
    Equals { field: String, value: Value },
    /// Field differs from the value
    NotEquals { field: String, value: Value },
    /// Every nested condition holds (AND)
    All { conditions: Vec<Condition> },
    /// At least one nested condition holds (OR)
    Any { conditions: Vec<Condition> },
    /// The nested condition does not hold
    Not { condition: Box<Condition> },
}

impl Condition {
    pub fn always() -> Self {
        Condition::Always
    }

    pub fn null(field: impl Into<String>) -> Self {
        Condition::Null {
            field: field.into(),
        }
    }

    pub fn empty(field: impl Into<String>) -> Self {
        Condition::Empty {
            field: field.into(),
        }
    }

    pub fn missing(field: impl Into<String>) -> Self {
        Condition::Missing {
            field: field.into(),
        }
    }

    pub fn present(field: impl Into<String>) -> Self {
        Condition::Present {
            field: field.into(),
        }
    }

    pub fn equals(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Condition::Equals {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn not_equals(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Condition::NotEquals {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn all(conditions: Vec<Condition>) -> Self {
        Condition::All { conditions }
    }

    pub fn any(conditions: Vec<Condition>) -> Self {
        Condition::Any { conditions }
    }

    pub fn not(condition: Condition) -> Self {
        Condition::Not {
            condition: Box::new(condition),
        }
    }

    /// Fields referenced anywhere in this condition, in first-seen order
    pub fn fields(&self) -> Vec<&str> {
        let mut fields = Vec::new();
        self.collect_fields(&mut fields);
        fields
    }

    fn collect_fields<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Condition::Always => {}
            Condition::Null { field }
            | Condition::Empty { field }
            | Condition::Missing { field }
            | Condition::Present { field }
            | Condition::Equals { field, .. }
            | Condition::NotEquals { field, .. } => {
                if !out.contains(&field.as_str()) {
                    out.push(field);
                }
            }
            Condition::All { conditions } | Condition::Any { conditions } => {
                for condition in conditions {
                    condition.collect_fields(out);
                }
            }
            Condition::Not { condition } => condition.collect_fields(out),
        }
    }
}

impl Default for Condition {
    fn default() -> Self {
        Condition::Always
    }
}
