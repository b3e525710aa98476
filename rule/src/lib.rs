//! This crate provides entailment rules over RDF triples,
//! built on the [Sophia] toolkit.
//!
//! An entailment [`Rule`] is made of one or two antecedent [patterns](Pattern)
//! and a list of consequent patterns.
//! Patterns are triples where some slots are [placeholders](placeholder),
//! such as `?aaa`, `"aaa"` or `_:aaa`.
//! Matching a rule against as many statements as it has antecedents
//! yields the bindings of its placeholders,
//! which are then substituted into the consequents to produce the entailed triples.
//!
//! ```
//! use entail_rule::{placeholder::PlaceholderName::*, Rule};
//! use sophia_api::ns::{rdf, rdfs};
//! use sophia_api::term::{FromTerm, IriRef};
//! use sophia_term::ArcTerm;
//!
//! let domain = Rule::builder()
//!     .name("domain")
//!     .antecedent(Aaa.var(), rdfs::domain, Xxx.var())
//!     .antecedent(Uuu.var(), Aaa.var(), Yyy.var())
//!     .consequent(Uuu.var(), rdf::type_, Xxx.var())
//!     .build();
//!
//! let iri = |txt: &'static str| ArcTerm::from_term(IriRef::new_unchecked(txt));
//! let statements = [
//!     [iri("x:tom"), iri("x:likes"), iri("x:jerry")],
//!     [iri("x:likes"), ArcTerm::from_term(rdfs::domain), iri("x:Person")],
//! ];
//! let derived = domain.apply(statements).unwrap();
//! assert_eq!(derived, vec![[iri("x:tom"), ArcTerm::from_term(rdf::type_), iri("x:Person")]]);
//! ```
//!
//! Matching never fails with a panic:
//! every way to not derive anything is reported as a [`MatchFail`].
//!
//! [Sophia]: https://docs.rs/sophia/latest/sophia/
#![deny(missing_docs)]

mod _error;
pub use _error::*;

pub mod bindings;
pub mod pattern;
pub mod placeholder;
pub mod rule;
pub mod unify;

pub use bindings::Bindings;
pub use pattern::Pattern;
pub use rule::{Rule, RuleBuilder};

#[cfg(test)]
fn test_setup() {
    TEST_SETUP.call_once(|| {
        env_logger::init();
    });
}

#[cfg(test)]
static TEST_SETUP: std::sync::Once = std::sync::Once::new();
