//! I define [`Rule`], an entailment rule made of antecedent and consequent [patterns](Pattern).
//!
//! A rule with one antecedent is matched against one statement,
//! a rule with two antecedents against two statements, given in any order.
//! On success, the bindings of the match are substituted into every consequent.
use std::collections::BTreeMap;
use std::fmt;

use sophia_api::quad::Quad;
use sophia_api::term::TermKind;
use sophia_api::triple::Triple;
use sophia_term::ArcTerm;

use crate::bindings::Bindings;
use crate::pattern::Pattern;
use crate::placeholder::PlaceholderName;
use crate::unify;
use crate::{MatchFail, MatchResult};

mod _builder;
pub use _builder::*;

/// An entailment rule.
///
/// Rules are built once with a [`RuleBuilder`], and are immutable afterwards;
/// they can be shared across threads and matched concurrently.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    name: Option<Box<str>>,
    antecedents: Vec<Pattern>,
    consequents: Vec<Pattern>,
    constraints: BTreeMap<PlaceholderName, TermKind>,
}

impl Rule {
    /// Start building a new rule.
    pub fn builder() -> RuleBuilder {
        RuleBuilder::default()
    }

    /// Start building a rule extending this one.
    ///
    /// Antecedents, consequents and constraints added to the builder
    /// are appended after those of `self`.
    pub fn extend(&self) -> RuleBuilder {
        RuleBuilder::from(self.clone())
    }

    /// The name of this rule, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The antecedents of this rule, in declaration order.
    pub fn antecedents(&self) -> &[Pattern] {
        &self.antecedents
    }

    /// The consequents of this rule, in declaration order.
    pub fn consequents(&self) -> &[Pattern] {
        &self.consequents
    }

    /// The type constraints of this rule.
    ///
    /// NB: constraints are not checked by the matcher.
    pub fn constraints(&self) -> &BTreeMap<PlaceholderName, TermKind> {
        &self.constraints
    }

    /// See [`unify::unitary_match`].
    pub fn unitary_match<T: Triple>(antecedent: &Pattern, statement: T) -> MatchResult<Bindings> {
        unify::unitary_match(antecedent, statement)
    }

    /// Substitute `bindings` into `consequents`.
    ///
    /// Fails with [`MatchFail::Underdetermined`] if any resulting triple
    /// still contains a placeholder.
    pub fn substitute(
        consequents: &[Pattern],
        bindings: &Bindings,
    ) -> MatchResult<Vec<[ArcTerm; 3]>> {
        consequents
            .iter()
            .map(|c| {
                let triple = c.with_substitutions(bindings);
                match triple.first_placeholder() {
                    Some(name) => Err(MatchFail::Underdetermined(name)),
                    None => Ok(triple.into_triple()),
                }
            })
            .collect()
    }

    /// The antecedents, sorted by decreasing specificity.
    ///
    /// Antecedents with the same specificity keep their declaration order.
    pub fn antecedents_by_specificity(&self) -> Vec<&Pattern> {
        let mut ret: Vec<_> = self.antecedents.iter().collect();
        ret.sort_by_key(|a| a.generality());
        ret
    }

    /// Match this rule against `statements`, and return the derived triples.
    ///
    /// The number of statements must be the number of antecedents (1 or 2).
    /// With two antecedents, the statements can be given in any order.
    pub fn apply<I>(&self, statements: I) -> MatchResult<Vec<[ArcTerm; 3]>>
    where
        I: IntoIterator,
        I::Item: Triple,
    {
        let statements: Vec<_> = statements.into_iter().map(Pattern::from_triple).collect();
        self.apply_patterns(&statements)
    }

    /// Match this rule against the triples of `statements`, ignoring their graph name.
    ///
    /// See [`Rule::apply`].
    pub fn apply_quads<I>(&self, statements: I) -> MatchResult<Vec<[ArcTerm; 3]>>
    where
        I: IntoIterator,
        I::Item: Quad,
    {
        let statements: Vec<_> = statements.into_iter().map(Pattern::from_quad).collect();
        self.apply_patterns(&statements)
    }

    /// Match this rule against `statements`, and return the derived triples.
    ///
    /// See [`Rule::apply`].
    pub fn apply_patterns(&self, statements: &[Pattern]) -> MatchResult<Vec<[ArcTerm; 3]>> {
        let bindings = self.match_bindings(statements)?;
        let derived = Self::substitute(&self.consequents, &bindings)
            .inspect_err(|err| log::debug!("{self}: {err}"))?;
        log::debug!("{self}: derived {derived:?}");
        Ok(derived)
    }

    /// Match the antecedents of this rule against `statements`,
    /// and return the resulting bindings.
    pub fn match_bindings(&self, statements: &[Pattern]) -> MatchResult<Bindings> {
        if self.antecedents.len() != statements.len() {
            return Err(MatchFail::Arity {
                expected: self.antecedents.len(),
                found: statements.len(),
            });
        }
        let ranked = self.antecedents_by_specificity();
        match (&ranked[..], statements) {
            ([a], [s]) => unify::unitary_match(a, s.as_triple())
                .inspect_err(|err| log::trace!("{self}: {err}")),
            ([a1, a2], [s1, s2]) => Self::match_pair(a1, a2, s1, s2)
                .or_else(|err| {
                    log::trace!("{self}: first ordering failed: {err}");
                    Self::match_pair(a1, a2, s2, s1)
                })
                .map_err(|err| {
                    log::trace!("{self}: second ordering failed: {err}");
                    MatchFail::NoOrdering
                }),
            _ => Err(MatchFail::UnsupportedRule(self.antecedents.len())),
        }
    }

    /// Match `a1` with `s1`, then `a2` with `s2` under the bindings of the first match.
    fn match_pair(
        a1: &Pattern,
        a2: &Pattern,
        s1: &Pattern,
        s2: &Pattern,
    ) -> MatchResult<Bindings> {
        let b1 = unify::unitary_match(a1, s1.as_triple())?;
        let a2 = a2.with_substitutions(&b1);
        let s2 = s2.with_substitutions(&b1);
        let b2 = unify::unitary_match(&a2, s2.as_triple())?;
        Ok(b2.merge(b1))
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => f.write_str(name),
            None => f.write_str("anonymous rule"),
        }
    }
}
