//! Supplier business fact

use crate::error::{CoreError, Result};
use crate::types::Value;
use serde::{Deserialize, Serialize};

/// Supplier business record
///
/// Every field is optional: an unset field reads as `Value::Null`, which
/// rules distinguish from an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Business {
    pub name: Option<String>,
    pub state_code: Option<String>,
    pub zip_code: Option<String>,
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub federal_tax_id: Option<String>,
    pub city: Option<String>,
    pub phone_number: Option<String>,
}

impl Business {
    /// Fact type name rules refer to
    pub const FACT_TYPE: &'static str = "Business";

    /// Field names addressable by rules
    pub const FIELDS: [&'static str; 8] = [
        "name",
        "state_code",
        "zip_code",
        "address_line1",
        "address_line2",
        "federal_tax_id",
        "city",
        "phone_number",
    ];

    /// Create an empty business
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_state_code(mut self, state_code: impl Into<String>) -> Self {
        self.state_code = Some(state_code.into());
        self
    }

    pub fn with_zip_code(mut self, zip_code: impl Into<String>) -> Self {
        self.zip_code = Some(zip_code.into());
        self
    }

    pub fn with_address_line1(mut self, address_line1: impl Into<String>) -> Self {
        self.address_line1 = Some(address_line1.into());
        self
    }

    pub fn with_address_line2(mut self, address_line2: impl Into<String>) -> Self {
        self.address_line2 = Some(address_line2.into());
        self
    }

    pub fn with_federal_tax_id(mut self, federal_tax_id: impl Into<String>) -> Self {
        self.federal_tax_id = Some(federal_tax_id.into());
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn with_phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = Some(phone_number.into());
        self
    }

    /// Read a field by name
    pub fn field(&self, name: &str) -> Result<Value> {
        let slot = match name {
            "name" => &self.name,
            "state_code" => &self.state_code,
            "zip_code" => &self.zip_code,
            "address_line1" => &self.address_line1,
            "address_line2" => &self.address_line2,
            "federal_tax_id" => &self.federal_tax_id,
            "city" => &self.city,
            "phone_number" => &self.phone_number,
            _ => return Err(CoreError::field_not_found(Self::FACT_TYPE, name)),
        };
        Ok(Value::from(slot.clone()))
    }

    /// Write a field by name. Only strings and null are accepted.
    pub fn set_field(&mut self, name: &str, value: Value) -> Result<()> {
        let slot = self.slot_mut(name)?;
        *slot = match value {
            Value::Null => None,
            Value::String(s) => Some(s),
            other => {
                return Err(CoreError::TypeError(format!(
                    "{}.{} expects a string, got {}",
                    Self::FACT_TYPE,
                    name,
                    other.type_name()
                )))
            }
        };
        Ok(())
    }

    fn slot_mut(&mut self, name: &str) -> Result<&mut Option<String>> {
        match name {
            "name" => Ok(&mut self.name),
            "state_code" => Ok(&mut self.state_code),
            "zip_code" => Ok(&mut self.zip_code),
            "address_line1" => Ok(&mut self.address_line1),
            "address_line2" => Ok(&mut self.address_line2),
            "federal_tax_id" => Ok(&mut self.federal_tax_id),
            "city" => Ok(&mut self.city),
            "phone_number" => Ok(&mut self.phone_number),
            _ => Err(CoreError::field_not_found(Self::FACT_TYPE, name)),
        }
    }
}
