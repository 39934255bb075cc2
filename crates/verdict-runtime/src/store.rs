//! Fact store
//!
//! Holds the working set of facts for one evaluation. The store borrows the
//! caller's slice mutably, so enrichment is visible to the caller after the
//! call returns.

use verdict_core::{Business, Fact};

pub struct FactStore<'a> {
    facts: &'a mut [Fact],
}

impl<'a> FactStore<'a> {
    /// Load the caller's facts
    pub fn load(facts: &'a mut [Fact]) -> Self {
        Self { facts }
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Fact> {
        self.facts.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Fact> {
        self.facts.get_mut(index)
    }

    /// Facts with their insertion index
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Fact)> {
        self.facts.iter().enumerate()
    }

    /// Facts of one type with their insertion index
    pub fn of_type<'s>(
        &'s self,
        fact_type: &'s str,
    ) -> impl Iterator<Item = (usize, &'s Fact)> + 's {
        self.iter().filter(move |(_, fact)| fact.fact_type() == fact_type)
    }

    /// First Business fact, the primary fact of a supplier decision
    pub fn primary_business(&self) -> Option<&Business> {
        self.facts.iter().find_map(Fact::as_business)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verdict_core::{Record, Value};

    #[test]
    fn test_empty_store() {
        let mut facts: Vec<Fact> = Vec::new();
        let store = FactStore::load(&mut facts);
        assert!(store.is_empty());
        assert!(store.primary_business().is_none());
    }

    #[test]
    fn test_of_type_keeps_insertion_order() {
        let mut facts: Vec<Fact> = vec![
            Record::new("Order").with_field("id", "o-1").into(),
            Business::new().with_name("first").into(),
            Business::new().with_name("second").into(),
        ];
        let store = FactStore::load(&mut facts);

        let indices: Vec<usize> = store.of_type("Business").map(|(idx, _)| idx).collect();
        assert_eq!(indices, vec![1, 2]);
        assert_eq!(
            store.primary_business().and_then(|b| b.name.as_deref()),
            Some("first")
        );
    }

    #[test]
    fn test_mutation_reaches_caller() {
        let mut facts: Vec<Fact> = vec![Business::new().with_zip_code("10002").into()];
        {
            let mut store = FactStore::load(&mut facts);
            store
                .get_mut(0)
                .unwrap()
                .set_field("zip_code", Value::from("10003"))
                .unwrap();
        }
        assert_eq!(
            facts[0].as_business().unwrap().zip_code.as_deref(),
            Some("10003")
        );
    }
}
