//! I define [`Pattern`], a triple whose slots may hold [placeholders](crate::placeholder).
use sophia_api::quad::Quad;
use sophia_api::term::{FromTerm, Term};
use sophia_api::triple::Triple;
use sophia_term::ArcTerm;

use crate::bindings::Bindings;
use crate::placeholder::{canonical_name, is_placeholder, PlaceholderName};

/// A triple used as a rule antecedent or consequent,
/// where any slot may be a placeholder or a ground term.
///
/// Statements handed to a rule are also turned into patterns,
/// so that a still-templated statement can be matched and substituted.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Pattern([ArcTerm; 3]);

impl Pattern {
    /// Build a pattern from its three slots.
    pub fn new<S: Term, P: Term, O: Term>(s: S, p: P, o: O) -> Self {
        Pattern([
            ArcTerm::from_term(s),
            ArcTerm::from_term(p),
            ArcTerm::from_term(o),
        ])
    }

    /// Copy the three slots of `triple`.
    pub fn from_triple<T: Triple>(triple: T) -> Self {
        Self::new(triple.s(), triple.p(), triple.o())
    }

    /// Copy the subject, predicate and object of `quad`; the graph name is ignored.
    pub fn from_quad<Q: Quad>(quad: Q) -> Self {
        Self::new(quad.s(), quad.p(), quad.o())
    }

    /// The slots of this pattern, as a [`Triple`] borrowing its terms.
    pub fn as_triple(&self) -> [&ArcTerm; 3] {
        [&self.0[0], &self.0[1], &self.0[2]]
    }

    /// The slots of this pattern, as a [`Triple`].
    pub fn into_triple(self) -> [ArcTerm; 3] {
        self.0
    }

    /// The number of slots holding a placeholder (0 to 3).
    pub fn generality(&self) -> usize {
        self.0.iter().filter(|t| is_placeholder(*t)).count()
    }

    /// The number of ground slots, i.e. `3 - generality`.
    pub fn specificity(&self) -> usize {
        3 - self.generality()
    }

    /// Whether any slot is a placeholder.
    pub fn has_placeholder(&self) -> bool {
        self.0.iter().any(is_placeholder)
    }

    /// The canonical name of the first placeholder in this pattern, if any.
    pub fn first_placeholder(&self) -> Option<PlaceholderName> {
        self.0.iter().find_map(canonical_name)
    }

    /// Replace every placeholder bound in `bindings` by its value.
    ///
    /// Ground slots, and placeholders absent from `bindings`, are left unchanged.
    /// This never fails, but the result may still contain placeholders.
    pub fn with_substitutions(&self, bindings: &Bindings) -> Pattern {
        Pattern(self.0.clone().map(|slot| {
            match canonical_name(&slot).and_then(|name| bindings.get(name)) {
                Some(value) => value.clone(),
                None => slot,
            }
        }))
    }
}

impl From<[ArcTerm; 3]> for Pattern {
    fn from(spo: [ArcTerm; 3]) -> Self {
        Pattern(spo)
    }
}

impl From<Pattern> for [ArcTerm; 3] {
    fn from(pattern: Pattern) -> Self {
        pattern.0
    }
}

#[cfg(test)]
mod test {
    use sophia_api::ns::{rdf, rdfs};
    use sophia_api::term::{BnodeId, IriRef};
    use test_case::test_case;

    use super::*;
    use crate::placeholder::PlaceholderName::*;

    fn iri(txt: &'static str) -> ArcTerm {
        ArcTerm::from_term(IriRef::new_unchecked(txt))
    }

    #[test_case(Pattern::new(Aaa.var(), rdfs::domain, Xxx.var()), 2; "two variables")]
    #[test_case(Pattern::new(Uuu.var(), Aaa.var(), Yyy.var()), 3; "only variables")]
    #[test_case(Pattern::new(Uuu.bnode(), Aaa.literal(), Yyy.var()), 3; "mixed flavors")]
    #[test_case(Pattern::new(iri("x:s"), rdf::type_, Xxx.literal()), 1; "one literal placeholder")]
    #[test_case(Pattern::new(iri("x:s"), rdf::type_, rdf::Property), 0; "ground")]
    #[test_case(Pattern::new(BnodeId::new_unchecked("b"), rdf::type_, "www"), 0; "unreserved bnode and literal")]
    fn generality_and_specificity(p: Pattern, generality: usize) {
        assert_eq!(p.generality(), generality);
        assert_eq!(p.specificity(), 3 - generality);
        assert_eq!(p.generality() + p.specificity(), 3);
        assert_eq!(p.has_placeholder(), generality > 0);
    }

    #[test]
    fn sort_by_specificity() {
        let a1 = Pattern::new(Aaa.var(), rdfs::domain, Xxx.var());
        let a2 = Pattern::new(Uuu.var(), Aaa.var(), Yyy.var());
        assert_eq!([a1.specificity(), a2.specificity()], [1, 0]);

        let mut sorted = vec![&a1, &a2];
        sorted.sort_by_key(|p| p.specificity());
        assert_eq!(sorted, vec![&a2, &a1]);
    }

    #[test]
    fn substitute_mapping() {
        let p = Pattern::new(Aaa.var(), Xxx.var(), iri("x:Person"));
        let b: Bindings = [(Aaa, iri("x:friend")), (Xxx, iri("x:knows"))]
            .into_iter()
            .collect();
        assert_eq!(
            p.with_substitutions(&b),
            Pattern::new(iri("x:friend"), iri("x:knows"), iri("x:Person")),
        );
    }

    #[test]
    fn substitute_across_flavors() {
        let p = Pattern::new(Aaa.bnode(), Aaa.literal(), Aaa.var());
        let b: Bindings = [(Aaa, iri("x:a"))].into_iter().collect();
        let q = p.with_substitutions(&b);
        assert_eq!(q, Pattern::new(iri("x:a"), iri("x:a"), iri("x:a")));
        assert!(!q.has_placeholder());
    }

    #[test]
    fn substitute_leaves_unbound_placeholders() {
        let p = Pattern::new(Aaa.var(), rdf::type_, Zzz.var());
        let b: Bindings = [(Aaa, iri("x:a"))].into_iter().collect();
        let q = p.with_substitutions(&b);
        assert_eq!(q, Pattern::new(iri("x:a"), rdf::type_, Zzz.var()));
        assert_eq!(q.first_placeholder(), Some(Zzz));
    }

    #[test]
    fn substitute_ground_pattern_is_identity() {
        let p = Pattern::new(iri("x:aaa"), rdf::type_, "aaaa");
        let b: Bindings = [(Aaa, iri("x:a")), (Bbb, iri("x:b"))]
            .into_iter()
            .collect();
        assert_eq!(p.with_substitutions(&b), p);
        assert_eq!(p.with_substitutions(&Bindings::new()), p);
    }

    #[test]
    fn from_quad_ignores_graph_name() {
        let quad = (
            [iri("x:s"), iri("x:p"), iri("x:o")],
            Some(iri("x:g")),
        );
        assert_eq!(
            Pattern::from_quad(quad),
            Pattern::new(iri("x:s"), iri("x:p"), iri("x:o")),
        );
    }
}
