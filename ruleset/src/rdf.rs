//! I define the [RDF entailment patterns](https://www.w3.org/TR/rdf11-mt/#patterns-of-rdf-entailment-informative)
//! that can be expressed as [`Rule`]s.
//!
//! `rdf2` (well-typed literals have their datatype as `rdf:type`) is not included,
//! since a literal's datatype cannot be captured by a placeholder.
use entail_rule::placeholder::PlaceholderName::*;
use entail_rule::Rule;
use lazy_static::lazy_static;
use sophia_api::ns::rdf;
use sophia_api::term::TermKind;

lazy_static! {
    /// `rdf1`: any predicate is a property.
    ///
    /// `uuu aaa yyy` ⇒ `aaa rdf:type rdf:Property`
    pub static ref RDF1: Rule = Rule::builder()
        .name("rdf1")
        .antecedent(Uuu.var(), Aaa.var(), Yyy.var())
        .consequent(Aaa.var(), rdf::type_, rdf::Property)
        .constraint(Aaa, TermKind::Iri)
        .build();
}
