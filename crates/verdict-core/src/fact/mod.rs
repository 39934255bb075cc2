//! Fact definitions
//!
//! A fact is a typed record submitted for one evaluation. The set of fact
//! shapes is closed: rules address facts by type name and read or write
//! them through named fields, so no reflection is needed.

mod business;
mod record;

pub use business::Business;
pub use record::Record;

use crate::error::Result;
use crate::types::Value;
use serde::{Deserialize, Serialize};

/// A fact submitted for evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fact {
    /// Supplier business record
    Business(Business),
    /// Caller-declared record with an explicit field set
    Record(Record),
}

impl Fact {
    /// Type name rules use to select this fact
    pub fn fact_type(&self) -> &str {
        match self {
            Fact::Business(_) => Business::FACT_TYPE,
            Fact::Record(record) => record.fact_type(),
        }
    }

    /// Read a field; fails when the field is not part of this fact's shape
    pub fn field(&self, name: &str) -> Result<Value> {
        match self {
            Fact::Business(business) => business.field(name),
            Fact::Record(record) => record.field(name),
        }
    }

    /// Overwrite a field; fails when the field is not part of this fact's shape
    pub fn set_field(&mut self, name: &str, value: Value) -> Result<()> {
        match self {
            Fact::Business(business) => business.set_field(name, value),
            Fact::Record(record) => record.set_field(name, value),
        }
    }

    /// Check whether the field is part of this fact's shape
    pub fn has_field(&self, name: &str) -> bool {
        match self {
            Fact::Business(_) => Business::FIELDS.contains(&name),
            Fact::Record(record) => record.has_field(name),
        }
    }

    pub fn as_business(&self) -> Option<&Business> {
        match self {
            Fact::Business(business) => Some(business),
            Fact::Record(_) => None,
        }
    }

    pub fn as_business_mut(&mut self) -> Option<&mut Business> {
        match self {
            Fact::Business(business) => Some(business),
            Fact::Record(_) => None,
        }
    }
}

impl From<Business> for Fact {
    fn from(business: Business) -> Self {
        Fact::Business(business)
    }
}

impl From<Record> for Fact {
    fn from(record: Record) -> Self {
        Fact::Record(record)
    }
}
