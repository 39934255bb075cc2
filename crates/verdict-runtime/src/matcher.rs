//! Rule matcher
//!
//! Computes which rules of a rule-set are satisfied by which facts. Each
//! satisfied (rule, fact) pair becomes one [`Activation`] carrying the field
//! values the condition looked at.

use crate::error::{Result, RuntimeError};
use crate::store::FactStore;
use std::cmp::Reverse;
use std::collections::BTreeMap;
use verdict_core::{Condition, Fact, Rule, RuleSet, Value};

/// Field values captured from a fact when its rule matched
pub type Bindings = BTreeMap<String, Value>;

/// A rule matched against one specific fact, pending firing
#[derive(Debug, Clone)]
pub struct Activation<'r> {
    pub rule: &'r Rule,

    /// Declaration index of the rule within its rule-set
    pub rule_index: usize,

    /// Insertion index of the matched fact
    pub fact_index: usize,

    pub bindings: Bindings,
}

pub struct RuleMatcher;

impl RuleMatcher {
    /// Match every rule of the rule-set against the store.
    ///
    /// Activations are ordered by salience (highest first), then rule
    /// declaration order, then fact insertion order.
    pub fn match_rules<'r>(
        rule_set: &'r RuleSet,
        store: &FactStore<'_>,
    ) -> Result<Vec<Activation<'r>>> {
        let mut activations = Vec::new();

        for (rule_index, rule) in rule_set.rules.iter().enumerate() {
            for (fact_index, fact) in store.of_type(&rule.fact_type) {
                let bindings = Self::bind(rule, fact)?;
                if !Self::holds(&rule.when, &bindings) {
                    continue;
                }

                tracing::debug!(
                    rule_id = %rule.id,
                    fact_index,
                    "Rule activated"
                );
                activations.push(Activation {
                    rule,
                    rule_index,
                    fact_index,
                    bindings,
                });
            }
        }

        // Stable: equal salience keeps declaration then fact order
        activations.sort_by_key(|activation| Reverse(activation.rule.salience));

        tracing::debug!(
            rule_set = %rule_set.name,
            facts = store.len(),
            activations = activations.len(),
            "Matching complete"
        );
        Ok(activations)
    }

    /// Evaluate a condition directly against a fact
    pub fn evaluate(rule: &Rule, fact: &Fact) -> Result<bool> {
        let bindings = Self::bind(rule, fact)?;
        Ok(Self::holds(&rule.when, &bindings))
    }

    /// Read every field the condition references. Fields are read even when
    /// a branch would short-circuit, so a bad field name always surfaces.
    fn bind(rule: &Rule, fact: &Fact) -> Result<Bindings> {
        rule.when
            .fields()
            .into_iter()
            .map(|field| {
                fact.field(field)
                    .map(|value| (field.to_string(), value))
                    .map_err(|e| RuntimeError::condition(&rule.id, fact.fact_type(), e))
            })
            .collect()
    }

    fn holds(condition: &Condition, bindings: &Bindings) -> bool {
        match condition {
            Condition::Always => true,
            Condition::Null { field } => bindings.get(field).map_or(true, Value::is_null),
            Condition::Empty { field } => {
                matches!(bindings.get(field), Some(Value::String(s)) if s.is_empty())
            }
            Condition::Missing { field } => bindings.get(field).map_or(true, Value::is_empty),
            Condition::Present { field } => bindings.get(field).map_or(false, Value::is_present),
            Condition::Equals { field, value } => bindings.get(field) == Some(value),
            Condition::NotEquals { field, value } => bindings.get(field) != Some(value),
            Condition::All { conditions } => conditions.iter().all(|c| Self::holds(c, bindings)),
            Condition::Any { conditions } => conditions.iter().any(|c| Self::holds(c, bindings)),
            Condition::Not { condition } => !Self::holds(condition, bindings),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verdict_core::{Action, Business, Record};

    fn kansas_filter() -> Rule {
        Rule::filter("kansas", "Business")
            .when(Condition::equals("state_code", "KS"))
            .then(Action::reason("business filtered: from Kansas"))
    }

    #[test]
    fn test_equality_condition() {
        let rule = kansas_filter();
        let ks: Fact = Business::new().with_state_code("KS").into();
        let ny: Fact = Business::new().with_state_code("NY").into();
        let unset: Fact = Business::new().into();

        assert!(RuleMatcher::evaluate(&rule, &ks).unwrap());
        assert!(!RuleMatcher::evaluate(&rule, &ny).unwrap());
        assert!(!RuleMatcher::evaluate(&rule, &unset).unwrap());
    }

    #[test]
    fn test_null_versus_empty() {
        let null_rule = Rule::validation("zip_null", "Business").when(Condition::null("zip_code"));
        let empty_rule =
            Rule::validation("zip_empty", "Business").when(Condition::empty("zip_code"));
        let missing_rule =
            Rule::validation("zip_missing", "Business").when(Condition::missing("zip_code"));

        let null_zip: Fact = Business::new().into();
        let empty_zip: Fact = Business::new().with_zip_code("").into();

        assert!(RuleMatcher::evaluate(&null_rule, &null_zip).unwrap());
        assert!(!RuleMatcher::evaluate(&null_rule, &empty_zip).unwrap());
        assert!(!RuleMatcher::evaluate(&empty_rule, &null_zip).unwrap());
        assert!(RuleMatcher::evaluate(&empty_rule, &empty_zip).unwrap());
        assert!(RuleMatcher::evaluate(&missing_rule, &null_zip).unwrap());
        assert!(RuleMatcher::evaluate(&missing_rule, &empty_zip).unwrap());
    }

    #[test]
    fn test_compound_condition_binds_values() {
        let rule = Rule::enrichment("tax_id_zip", "Business").when(Condition::all(vec![
            Condition::present("zip_code"),
            Condition::present("federal_tax_id"),
        ]));
        let mut facts: Vec<Fact> = vec![
            Business::new().with_zip_code("10002").with_federal_tax_id("98765").into(),
            Business::new().with_zip_code("10002").into(),
        ];
        let rule_set = RuleSet::new("Enrich").add_rule(rule);
        let store = FactStore::load(&mut facts);

        let activations = RuleMatcher::match_rules(&rule_set, &store).unwrap();
        assert_eq!(activations.len(), 1);
        assert_eq!(activations[0].fact_index, 0);
        assert_eq!(
            activations[0].bindings.get("federal_tax_id"),
            Some(&Value::from("98765"))
        );
        assert_eq!(
            activations[0].bindings.get("zip_code"),
            Some(&Value::from("10002"))
        );
    }

    #[test]
    fn test_order_is_rule_then_fact() {
        let rule_set = RuleSet::new("Order")
            .add_rule(Rule::validation("first", "Business"))
            .add_rule(Rule::validation("second", "Business"));
        let mut facts: Vec<Fact> = vec![Business::new().into(), Business::new().into()];
        let store = FactStore::load(&mut facts);

        let order: Vec<(&str, usize)> = RuleMatcher::match_rules(&rule_set, &store)
            .unwrap()
            .iter()
            .map(|a| (a.rule.id.as_str(), a.fact_index))
            .collect();
        assert_eq!(
            order,
            vec![("first", 0), ("first", 1), ("second", 0), ("second", 1)]
        );
    }

    #[test]
    fn test_salience_overrides_declaration_order() {
        let rule_set = RuleSet::new("Salience")
            .add_rule(Rule::validation("late", "Business"))
            .add_rule(Rule::filter("early", "Business").with_salience(10))
            .add_rule(Rule::validation("last", "Business").with_salience(-1));
        let mut facts: Vec<Fact> = vec![Business::new().into()];
        let store = FactStore::load(&mut facts);

        let ids: Vec<&str> = RuleMatcher::match_rules(&rule_set, &store)
            .unwrap()
            .iter()
            .map(|a| a.rule.id.as_str())
            .collect();
        assert_eq!(ids, vec!["early", "late", "last"]);
    }

    #[test]
    fn test_rules_only_match_their_fact_type() {
        let rule_set = RuleSet::new("Mixed").add_rule(kansas_filter());
        let mut facts: Vec<Fact> = vec![
            Record::new("Order").with_field("state_code", "KS").into(),
            Business::new().with_state_code("KS").into(),
        ];
        let store = FactStore::load(&mut facts);

        let activations = RuleMatcher::match_rules(&rule_set, &store).unwrap();
        assert_eq!(activations.len(), 1);
        assert_eq!(activations[0].fact_index, 1);
    }

    #[test]
    fn test_unknown_condition_field_is_an_error() {
        let rule = Rule::validation("country", "Business")
            .when(Condition::any(vec![Condition::always(), Condition::null("country")]));
        let fact: Fact = Business::new().into();

        let err = RuleMatcher::evaluate(&rule, &fact).unwrap_err();
        assert!(matches!(
            err,
            RuntimeError::RuleConditionError { ref rule_id, .. } if rule_id == "country"
        ));
    }

    #[test]
    fn test_no_facts_no_activations() {
        let rule_set = RuleSet::new("VerifySupplier").add_rule(kansas_filter());
        let mut facts: Vec<Fact> = Vec::new();
        let store = FactStore::load(&mut facts);
        assert!(RuleMatcher::match_rules(&rule_set, &store).unwrap().is_empty());
    }
}
