//! Supplier verification example
//!
//! This example demonstrates:
//! - Building a DecisionService with a filter/validate/enrich rule-set
//! - Running it over a few supplier businesses
//! - Reading the response and the enriched facts
//!
//! Run with `RUST_LOG=verdict::audit=info` to see audit events.

use verdict_sdk::rule_sets::{verify_supplier, VERIFY_SUPPLIER};
use verdict_sdk::{Business, DecisionServiceBuilder, Fact, Metrics, RuleResponse};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("verdict_sdk=info".parse()?)
                .add_directive("verdict::audit=info".parse()?),
        )
        .init();

    println!("=== Supplier Verification Example ===\n");

    let service = DecisionServiceBuilder::new()
        .audit_log_name("audit")
        .register_rule_set(verify_supplier())
        .build()
        .await?;

    let suppliers = vec![
        (
            "Kansas supplier",
            Business::new().with_name("Prairie Parts").with_state_code("KS"),
        ),
        (
            "Incomplete supplier",
            Business::new()
                .with_name("test")
                .with_address_line2("addr line 2")
                .with_federal_tax_id("federalTaxId")
                .with_city("city")
                .with_phone_number("phoneNumber")
                .with_state_code("NY")
                .with_zip_code(""),
        ),
        (
            "Complete supplier",
            Business::new()
                .with_name("Acme Supply")
                .with_state_code("NY")
                .with_zip_code("10002")
                .with_address_line1("1 Main St")
                .with_address_line2("Suite 200")
                .with_federal_tax_id("98765")
                .with_city("New York")
                .with_phone_number("555-0100"),
        ),
    ];

    for (label, business) in suppliers {
        let mut facts = vec![Fact::from(business)];
        let response: RuleResponse = service.run_rules(&mut facts, VERIFY_SUPPLIER)?;

        println!("{}:", label);
        println!("  Response code: {:?}", response.response_code());
        for reason in response.reasons() {
            println!("  Reason: {}", reason.message);
        }
        if let Some(business) = response.business() {
            println!("  Business: {}", serde_json::to_string(business)?);
        }
        println!();
    }

    let metrics = service.metrics();
    println!("Metrics:");
    println!("  Evaluations: {}", metrics.counter("evaluations_total").get());
    println!("  Rules fired: {}", metrics.counter("rules_fired_total").get());
    println!("  Reasons: {}", metrics.counter("reasons_total").get());

    Ok(())
}
