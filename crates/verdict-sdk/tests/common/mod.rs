//! Common test utilities for SDK integration tests

#![allow(dead_code)]

use verdict_sdk::{Business, DecisionService, DecisionServiceBuilder, Fact, RuleSet};

pub use verdict_sdk::rule_sets::{REQUIRED_FIELDS, VERIFY_SUPPLIER};

pub fn verify_supplier_rule_set() -> RuleSet {
    verdict_sdk::rule_sets::verify_supplier()
}

/// Service with the supplier rules registered under "VerifySupplier"
pub async fn verify_supplier_service() -> DecisionService {
    DecisionServiceBuilder::new()
        .audit_log_name("audit")
        .register_rule_set(verify_supplier_rule_set())
        .build()
        .await
        .expect("supplier rules should build")
}

/// A business with every field populated
pub fn complete_business(state_code: &str) -> Business {
    Business::new()
        .with_name("Acme Supply")
        .with_state_code(state_code)
        .with_zip_code("10002")
        .with_address_line1("1 Main St")
        .with_address_line2("Suite 200")
        .with_federal_tax_id("98765")
        .with_city("New York")
        .with_phone_number("555-0100")
}

pub fn business_fact(facts: &[Fact], index: usize) -> &Business {
    facts[index]
        .as_business()
        .expect("fact should be a business")
}
