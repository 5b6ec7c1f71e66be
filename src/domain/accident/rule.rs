//! Rules (violated articles) and the per-accident rule set.

use std::collections::btree_map::{self, Entry};
use std::collections::BTreeMap;

use crate::domain::foundation::RuleId;

/// A reference entity naming a violated regulation or article.
///
/// Rules are pre-seeded and shared between accidents.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rule {
    pub id: RuleId,
    pub name: String,
}

impl Rule {
    pub fn new(id: RuleId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Set of rules unique by id, iterated in ascending id order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet(BTreeMap<RuleId, Rule>);

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `rule` unless a rule with the same id is already present.
    ///
    /// Returns `true` if the rule was added.
    pub fn insert(&mut self, rule: Rule) -> bool {
        match self.0.entry(rule.id) {
            Entry::Vacant(slot) => {
                slot.insert(rule);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    pub fn contains(&self, id: RuleId) -> bool {
        self.0.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.0.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = RuleId> + '_ {
        self.0.keys().copied()
    }
}

impl FromIterator<Rule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        let mut set = RuleSet::new();
        for rule in iter {
            set.insert(rule);
        }
        set
    }
}

impl IntoIterator for RuleSet {
    type Item = Rule;
    type IntoIter = btree_map::IntoValues<RuleId, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(id: i32) -> Rule {
        Rule::new(RuleId::new(id), format!("Article {}", id))
    }

    #[test]
    fn insert_ignores_duplicate_ids() {
        let mut set = RuleSet::new();
        assert!(set.insert(rule(1)));
        assert!(!set.insert(Rule::new(RuleId::new(1), "Other name")));
        assert_eq!(set.len(), 1);
        assert_eq!(set.iter().next().unwrap().name, "Article 1");
    }

    #[test]
    fn iterates_in_id_order() {
        let set: RuleSet = vec![rule(3), rule(1), rule(2)].into_iter().collect();
        let ids: Vec<i32> = set.ids().map(|id| id.value()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn empty_set_reports_empty() {
        let set = RuleSet::new();
        assert!(set.is_empty());
        assert!(!set.contains(RuleId::new(1)));
    }
}
