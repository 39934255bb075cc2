//! Rule executor
//!
//! Fires an ordered activation set against the fact store. Firing happens in
//! two phases. Planning checks every action against its fact: enrich
//! targets and template placeholders must be fields of the fact shape, and
//! templates must parse. Applying then renders and commits each action in
//! activation order against the current fact, so an enrichment sees the
//! writes of the activations before it. A defective rule fails the call
//! during planning, before any fact is touched.

use crate::error::{Result, RuntimeError};
use crate::matcher::Activation;
use crate::result::{Enrichment, ExecutionResult};
use crate::store::FactStore;
use std::collections::HashSet;
use verdict_core::{Action, CoreError, Fact, Reason, RuleCategory, Template, Value};

/// Checked action, rendered when applied
#[derive(Debug)]
enum Effect<'r> {
    Reason {
        message: &'r Template,
        code: Option<&'r String>,
    },
    Classify(&'r str),
    Enrich {
        field: &'r str,
        value: &'r Template,
    },
}

#[derive(Debug)]
struct Planned<'a, 'r> {
    activation: &'a Activation<'r>,
    effects: Vec<Effect<'r>>,
}

pub struct RuleExecutor;

impl RuleExecutor {
    /// Fire activations in order, mutating facts in place
    pub fn fire(
        activations: &[Activation<'_>],
        store: &mut FactStore<'_>,
    ) -> Result<ExecutionResult> {
        let plan = activations
            .iter()
            .map(|activation| Self::plan(activation, store))
            .collect::<Result<Vec<_>>>()?;

        Self::apply(plan, store)
    }

    fn plan<'a, 'r>(
        activation: &'a Activation<'r>,
        store: &FactStore<'_>,
    ) -> Result<Planned<'a, 'r>> {
        let rule = activation.rule;
        let fact = Self::fact(store, activation.fact_index)?;
        let fail = |e: CoreError| RuntimeError::action(&rule.id, fact.fact_type(), e);

        let mut effects = Vec::with_capacity(rule.then.len());
        for action in &rule.then {
            let effect = match action {
                Action::Reason { message, code } => {
                    Self::check_template(message, fact).map_err(fail)?;
                    Effect::Reason {
                        message,
                        code: code.as_ref(),
                    }
                }
                Action::Classify { code } => Effect::Classify(code),
                Action::Enrich { field, value } => {
                    if !fact.has_field(field) {
                        return Err(fail(CoreError::field_not_found(
                            fact.fact_type(),
                            field.as_str(),
                        )));
                    }
                    Self::check_template(value, fact).map_err(fail)?;
                    Effect::Enrich { field, value }
                }
            };
            effects.push(effect);
        }

        Ok(Planned {
            activation,
            effects,
        })
    }

    /// The template parses and every placeholder names a field of the fact
    fn check_template(template: &Template, fact: &Fact) -> verdict_core::error::Result<()> {
        for field in template.placeholders()? {
            if !fact.has_field(field) {
                return Err(CoreError::field_not_found(fact.fact_type(), field));
            }
        }
        Ok(())
    }

    /// Render against the fact as it stands, including earlier enrichments
    fn render(template: &Template, fact: &Fact) -> verdict_core::error::Result<String> {
        template.render(|field| fact.field(field).map(|value| value.to_string()))
    }

    fn fact<'s>(store: &'s FactStore<'_>, index: usize) -> Result<&'s Fact> {
        store
            .get(index)
            .ok_or(RuntimeError::FactIndexOutOfBounds(index))
    }

    fn apply(plan: Vec<Planned<'_, '_>>, store: &mut FactStore<'_>) -> Result<ExecutionResult> {
        let mut result = ExecutionResult::new();
        let mut filtered: HashSet<usize> = HashSet::new();

        for Planned {
            activation,
            effects,
        } in plan
        {
            let rule = activation.rule;
            let fact_index = activation.fact_index;

            if rule.category == RuleCategory::Validation && filtered.contains(&fact_index) {
                tracing::debug!(
                    rule_id = %rule.id,
                    fact_index,
                    "Validation skipped for filtered fact"
                );
                result.mark_rule_skipped(rule.id.clone());
                continue;
            }

            for effect in effects {
                match effect {
                    Effect::Reason { message, code } => {
                        let fact = Self::fact(store, fact_index)?;
                        let message = Self::render(message, fact)
                            .map_err(|e| RuntimeError::action(&rule.id, fact.fact_type(), e))?;
                        let mut reason = Reason::new(message).with_rule(&rule.id, rule.category);
                        reason.code = code.cloned();
                        result.add_reason(reason);
                    }
                    Effect::Classify(code) => {
                        if !result.classify(code, rule.category) {
                            tracing::debug!(
                                rule_id = %rule.id,
                                code = %code,
                                "Classification kept from higher precedence rule"
                            );
                        }
                    }
                    Effect::Enrich { field, value } => {
                        let fact = Self::fact(store, fact_index)?;
                        let value = Self::render(value, fact)
                            .map_err(|e| RuntimeError::action(&rule.id, fact.fact_type(), e))?;
                        let fact = store
                            .get_mut(fact_index)
                            .ok_or(RuntimeError::FactIndexOutOfBounds(fact_index))?;
                        if let Err(e) = fact.set_field(field, Value::String(value.clone())) {
                            return Err(RuntimeError::action(&rule.id, fact.fact_type(), e));
                        }
                        result.record_enrichment(Enrichment {
                            rule_id: rule.id.clone(),
                            fact_index,
                            field: field.to_string(),
                            value,
                        });
                    }
                }
            }

            if rule.category == RuleCategory::Filter {
                filtered.insert(fact_index);
            }
            tracing::debug!(rule_id = %rule.id, fact_index, "Rule fired");
            result.mark_rule_fired(rule.id.clone());
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::RuleMatcher;
    use verdict_core::{Business, Condition, Record, Rule, RuleSet};

    fn fire(rule_set: &RuleSet, facts: &mut [Fact]) -> Result<ExecutionResult> {
        let mut store = FactStore::load(facts);
        let activations = RuleMatcher::match_rules(rule_set, &store)?;
        RuleExecutor::fire(&activations, &mut store)
    }

    fn tax_id_enrichment() -> Rule {
        Rule::enrichment("tax_id_zip", "Business")
            .when(Condition::all(vec![
                Condition::present("federal_tax_id"),
                Condition::present("zip_code"),
            ]))
            .then(Action::enrich("federal_tax_id", "{federal_tax_id}-{zip_code}"))
    }

    #[test]
    fn test_enrichment_writes_back() {
        let rule_set = RuleSet::new("Enrich").add_rule(tax_id_enrichment());
        let mut facts: Vec<Fact> = vec![Business::new()
            .with_federal_tax_id("98765")
            .with_zip_code("10002")
            .into()];

        let result = fire(&rule_set, &mut facts).unwrap();

        assert_eq!(
            facts[0].as_business().unwrap().federal_tax_id.as_deref(),
            Some("98765-10002")
        );
        assert_eq!(result.enrichments.len(), 1);
        assert_eq!(result.enrichments[0].value, "98765-10002");
        assert!(result.reasons.is_empty());
        assert!(result.classification.is_none());
    }

    #[test]
    fn test_reason_per_activation_without_dedup() {
        let rule_set = RuleSet::new("Dup").add_rule(
            Rule::validation("name_null", "Business")
                .when(Condition::null("name"))
                .then(Action::reason("name is null")),
        );
        let mut facts: Vec<Fact> = vec![Business::new().into(), Business::new().into()];

        let result = fire(&rule_set, &mut facts).unwrap();
        assert_eq!(result.reasons.len(), 2);
        assert_eq!(result.fired_rules, vec!["name_null", "name_null"]);
    }

    #[test]
    fn test_templated_reason_carries_rule_metadata() {
        let rule_set = RuleSet::new("Filter").add_rule(
            Rule::filter("state", "Business")
                .when(Condition::equals("state_code", "KS"))
                .then(Action::reason_with_code("business filtered: from {state_code}", "F001")),
        );
        let mut facts: Vec<Fact> = vec![Business::new().with_state_code("KS").into()];

        let result = fire(&rule_set, &mut facts).unwrap();
        let reason = &result.reasons[0];
        assert_eq!(reason.message, "business filtered: from KS");
        assert_eq!(reason.code.as_deref(), Some("F001"));
        assert_eq!(reason.rule_id.as_deref(), Some("state"));
        assert_eq!(reason.category, Some(RuleCategory::Filter));
    }

    #[test]
    fn test_filter_suppresses_later_validation_for_same_fact() {
        let rule_set = RuleSet::new("VerifySupplier")
            .add_rule(
                Rule::filter("kansas", "Business")
                    .when(Condition::equals("state_code", "KS"))
                    .then(Action::reason("business filtered: from Kansas"))
                    .then(Action::classify("filtered")),
            )
            .add_rule(
                Rule::validation("zip_null", "Business")
                    .when(Condition::null("zip_code"))
                    .then(Action::reason("zipcode is null"))
                    .then(Action::classify("validation error")),
            );
        let mut facts: Vec<Fact> = vec![
            Business::new().with_state_code("KS").into(),
            Business::new().with_state_code("NY").into(),
        ];

        let result = fire(&rule_set, &mut facts).unwrap();

        assert_eq!(result.response_code(), Some("filtered"));
        assert_eq!(result.skipped_rules, vec!["zip_null"]);
        assert_eq!(
            result.reasons,
            vec![
                Reason::new("business filtered: from Kansas"),
                Reason::new("zipcode is null"),
            ]
        );
    }

    #[test]
    fn test_enrichment_still_applies_to_filtered_fact() {
        let rule_set = RuleSet::new("VerifySupplier")
            .add_rule(
                Rule::filter("kansas", "Business")
                    .when(Condition::equals("state_code", "KS"))
                    .then(Action::classify("filtered")),
            )
            .add_rule(tax_id_enrichment());
        let mut facts: Vec<Fact> = vec![Business::new()
            .with_state_code("KS")
            .with_federal_tax_id("11111")
            .with_zip_code("66002")
            .into()];

        let result = fire(&rule_set, &mut facts).unwrap();
        assert_eq!(result.response_code(), Some("filtered"));
        assert_eq!(
            facts[0].as_business().unwrap().federal_tax_id.as_deref(),
            Some("11111-66002")
        );
    }

    #[test]
    fn test_action_on_missing_field_fails_without_mutation() {
        let rule_set = RuleSet::new("Broken")
            .add_rule(tax_id_enrichment())
            .add_rule(
                Rule::enrichment("country", "Business")
                    .then(Action::enrich("country", "US")),
            );
        let original = Business::new()
            .with_federal_tax_id("98765")
            .with_zip_code("10002");
        let mut facts: Vec<Fact> = vec![original.clone().into()];

        let err = fire(&rule_set, &mut facts).unwrap_err();

        assert!(matches!(
            err,
            RuntimeError::RuleActionError { ref rule_id, .. } if rule_id == "country"
        ));
        assert_eq!(facts[0].as_business(), Some(&original));
    }

    #[test]
    fn test_reason_template_with_unknown_field_fails() {
        let rule_set = RuleSet::new("Broken").add_rule(
            Rule::validation("bad_message", "Business").then(Action::reason("missing {country}")),
        );
        let mut facts: Vec<Fact> = vec![Business::new().into()];

        let err = fire(&rule_set, &mut facts).unwrap_err();
        assert!(matches!(err, RuntimeError::RuleActionError { .. }));
    }

    #[test]
    fn test_enrich_record_fact() {
        let rule_set = RuleSet::new("Orders").add_rule(
            Rule::enrichment("order_label", "Order")
                .when(Condition::present("id"))
                .then(Action::enrich("label", "order #{id}")),
        );
        let mut facts: Vec<Fact> = vec![Record::new("Order")
            .with_field("id", 42.0)
            .with_field("label", Value::Null)
            .into()];

        fire(&rule_set, &mut facts).unwrap();
        assert_eq!(facts[0].field("label").unwrap(), Value::from("order #42"));
    }

    #[test]
    fn test_no_activations_yields_empty_result() {
        let rule_set = RuleSet::new("Empty");
        let mut facts: Vec<Fact> = vec![Business::new().into()];

        let result = fire(&rule_set, &mut facts).unwrap();
        assert_eq!(result, ExecutionResult::new());
    }

    #[test]
    fn test_chained_enrichments_see_earlier_writes() {
        let rule_set = RuleSet::new("Chained")
            .add_rule(tax_id_enrichment())
            .add_rule(
                Rule::enrichment("country_prefix", "Business")
                    .when(Condition::present("federal_tax_id"))
                    .then(Action::enrich("federal_tax_id", "US{federal_tax_id}")),
            );
        let mut facts: Vec<Fact> = vec![Business::new()
            .with_federal_tax_id("98765")
            .with_zip_code("10002")
            .into()];

        let result = fire(&rule_set, &mut facts).unwrap();

        let values: Vec<&str> = result.enrichments.iter().map(|e| e.value.as_str()).collect();
        assert_eq!(values, vec!["98765-10002", "US98765-10002"]);
        assert_eq!(
            facts[0].as_business().unwrap().federal_tax_id.as_deref(),
            Some("US98765-10002")
        );
    }

    #[test]
    fn test_reason_reports_enriched_value() {
        let rule_set = RuleSet::new("Report")
            .add_rule(tax_id_enrichment())
            .add_rule(
                Rule::validation("report", "Business")
                    .then(Action::reason("tax id is {federal_tax_id}")),
            );
        let mut facts: Vec<Fact> = vec![Business::new()
            .with_federal_tax_id("98765")
            .with_zip_code("10002")
            .into()];

        let result = fire(&rule_set, &mut facts).unwrap();
        assert!(result.has_reason("tax id is 98765-10002"));
    }

    #[test]
    fn test_enrich_large_number() {
        let rule_set = RuleSet::new("Orders").add_rule(
            Rule::enrichment("amount_label", "Order")
                .when(Condition::present("amount"))
                .then(Action::enrich("label", "{amount}")),
        );
        let mut facts: Vec<Fact> = vec![Record::new("Order")
            .with_field("amount", 1e20)
            .with_field("label", Value::Null)
            .into()];

        fire(&rule_set, &mut facts).unwrap();
        assert_eq!(
            facts[0].field("label").unwrap(),
            Value::from("100000000000000000000")
        );
    }
}
