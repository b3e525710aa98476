//! This crate provides the [RDF] and [RDFS] entailment patterns
//! of [RDF 1.1 Semantics] as [`Rule`](entail_rule::Rule)s.
//!
//! Only the patterns that can be expressed with one or two triple antecedents
//! are provided. Each rule is declared once, as a static value,
//! and can be shared by any number of threads.
//!
//! ```
//! use entail_ruleset::rdfs::RDFS9;
//! use sophia_api::ns::{rdf, rdfs};
//! use sophia_api::term::{FromTerm, IriRef};
//! use sophia_term::ArcTerm;
//!
//! let iri = |txt: &'static str| ArcTerm::from_term(IriRef::new_unchecked(txt));
//! let derived = RDFS9
//!     .apply([
//!         [iri("x:Cat"), ArcTerm::from_term(rdfs::subClassOf), iri("x:Animal")],
//!         [iri("x:tom"), ArcTerm::from_term(rdf::type_), iri("x:Cat")],
//!     ])
//!     .unwrap();
//! assert_eq!(derived, vec![[iri("x:tom"), ArcTerm::from_term(rdf::type_), iri("x:Animal")]]);
//! ```
//!
//! [RDF]: https://www.w3.org/TR/rdf11-mt/#patterns-of-rdf-entailment-informative
//! [RDFS]: https://www.w3.org/TR/rdf11-mt/#patterns-of-rdfs-entailment-informative
//! [RDF 1.1 Semantics]: https://www.w3.org/TR/rdf11-mt/
#![deny(missing_docs)]

pub mod rdf;
pub mod rdfs;


#[cfg(test)]
fn test_setup() {
    TEST_SETUP.call_once(|| {
        env_logger::init();
    });
}

#[cfg(test)]
static TEST_SETUP: std::sync::Once = std::sync::Once::new();
