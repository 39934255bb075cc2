//! Built-in rule-sets
//!
//! `VerifySupplier` filters Kansas suppliers, rejects businesses with null or
//! empty fields, and suffixes the federal tax id with the zip code.

use verdict_core::{Action, Condition, Rule, RuleSet};

/// Name `verify_supplier()` is registered under
pub const VERIFY_SUPPLIER: &str = "VerifySupplier";

/// Business fields with the label used in their validation messages
pub const REQUIRED_FIELDS: [(&str, &str); 8] = [
    ("name", "name"),
    ("state_code", "state code"),
    ("zip_code", "zipcode"),
    ("address_line1", "address line 1"),
    ("address_line2", "address line 2"),
    ("federal_tax_id", "federal tax id"),
    ("city", "city"),
    ("phone_number", "phone number"),
];

/// Supplier verification rules.
///
/// The Kansas filter carries salience 10 so it fires ahead of the
/// validations and suppresses them for the filtered business.
pub fn verify_supplier() -> RuleSet {
    let mut rule_set = RuleSet::new(VERIFY_SUPPLIER)
        .with_description("Filter, validate and enrich supplier businesses")
        .add_rule(
            Rule::filter("filter_kansas", "Business")
                .with_salience(10)
                .when(Condition::equals("state_code", "KS"))
                .then(Action::reason("business filtered: from Kansas"))
                .then(Action::classify("filtered")),
        );

    for (field, label) in REQUIRED_FIELDS {
        rule_set = rule_set
            .add_rule(
                Rule::validation(format!("{field}_null"), "Business")
                    .when(Condition::null(field))
                    .then(Action::reason(format!("{label} is null")))
                    .then(Action::classify("validation error")),
            )
            .add_rule(
                Rule::validation(format!("{field}_empty"), "Business")
                    .when(Condition::empty(field))
                    .then(Action::reason(format!("{label} is empty")))
                    .then(Action::classify("validation error")),
            );
    }

    rule_set.add_rule(
        Rule::enrichment("enrich_tax_id_with_zip", "Business")
            .with_description("System XYZ expects the tax id suffixed with the zipcode")
            .when(Condition::all(vec![
                Condition::present("federal_tax_id"),
                Condition::present("zip_code"),
            ]))
            .then(Action::enrich("federal_tax_id", "{federal_tax_id}-{zip_code}")),
    )
}
