//! Generic declared-field fact

use crate::error::{CoreError, Result};
use crate::types::Value;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A named record whose shape is the set of fields it was created with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    fact_type: String,
    #[serde(default)]
    fields: BTreeMap<String, Value>,
}

impl Record {
    /// Create a record with no fields
    pub fn new(fact_type: impl Into<String>) -> Self {
        Self {
            fact_type: fact_type.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Declare a field with its initial value
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn fact_type(&self) -> &str {
        &self.fact_type
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Declared field names, sorted
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn field(&self, name: &str) -> Result<Value> {
        self.fields
            .get(name)
            .cloned()
            .ok_or_else(|| CoreError::field_not_found(&self.fact_type, name))
    }

    /// Overwrite a declared field. Undeclared fields are rejected, not added.
    pub fn set_field(&mut self, name: &str, value: Value) -> Result<()> {
        match self.fields.get_mut(name) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(CoreError::field_not_found(&self.fact_type, name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_fields() {
        let record = Record::new("Order")
            .with_field("amount", 120.0)
            .with_field("currency", "USD")
            .with_field("coupon", Value::Null);

        assert_eq!(record.field("amount").unwrap(), Value::Number(120.0));
        assert_eq!(record.field("coupon").unwrap(), Value::Null);
        assert_eq!(
            record.field_names().collect::<Vec<_>>(),
            vec!["amount", "coupon", "currency"]
        );
    }

    #[test]
    fn test_set_declared_field() {
        let mut record = Record::new("Order").with_field("status", "new");
        record.set_field("status", Value::from("held")).unwrap();
        assert_eq!(record.field("status").unwrap(), Value::from("held"));
    }

    #[test]
    fn test_undeclared_field_rejected() {
        let mut record = Record::new("Order");
        assert!(record.field("status").is_err());
        assert_eq!(
            record.set_field("status", Value::from("held")),
            Err(CoreError::field_not_found("Order", "status"))
        );
        assert!(!record.has_field("status"));
    }
}
