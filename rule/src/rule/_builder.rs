use std::collections::BTreeMap;

use sophia_api::term::{Term, TermKind};

use super::Rule;
use crate::pattern::Pattern;
use crate::placeholder::PlaceholderName;

/// A builder for [`Rule`]s.
///
/// Antecedents, consequents and constraints are kept in the order they are added.
#[derive(Clone, Debug, Default)]
pub struct RuleBuilder {
    name: Option<Box<str>>,
    antecedents: Vec<Pattern>,
    consequents: Vec<Pattern>,
    constraints: BTreeMap<PlaceholderName, TermKind>,
}

impl RuleBuilder {
    /// Set the name of the rule, used in diagnostics.
    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Add an antecedent `(s, p, o)`.
    pub fn antecedent<S: Term, P: Term, O: Term>(mut self, s: S, p: P, o: O) -> Self {
        self.antecedents.push(Pattern::new(s, p, o));
        self
    }

    /// Add a consequent `(s, p, o)`.
    pub fn consequent<S: Term, P: Term, O: Term>(mut self, s: S, p: P, o: O) -> Self {
        self.consequents.push(Pattern::new(s, p, o));
        self
    }

    /// Constrain the kind of term that `name` should be bound to.
    ///
    /// A later constraint on the same placeholder replaces the earlier one.
    pub fn constraint(mut self, name: PlaceholderName, kind: TermKind) -> Self {
        self.constraints.insert(name, kind);
        self
    }

    /// Build the rule.
    pub fn build(self) -> Rule {
        Rule {
            name: self.name,
            antecedents: self.antecedents,
            consequents: self.consequents,
            constraints: self.constraints,
        }
    }
}

impl From<Rule> for RuleBuilder {
    fn from(rule: Rule) -> Self {
        RuleBuilder {
            name: rule.name,
            antecedents: rule.antecedents,
            consequents: rule.consequents,
            constraints: rule.constraints,
        }
    }
}
