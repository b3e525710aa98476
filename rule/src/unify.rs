//! I implement the unitary match: unifying one [`Pattern`] with one statement.
use sophia_api::term::{FromTerm, Term};
use sophia_api::triple::Triple;
use sophia_term::ArcTerm;

use crate::bindings::Bindings;
use crate::pattern::Pattern;
use crate::placeholder::canonical_name;
use crate::{MatchFail, MatchResult, Position};

/// Unify `pattern` with `statement`, slot by slot in subject-predicate-object order.
///
/// * A placeholder seen for the first time is bound to the statement's term.
/// * A placeholder already bound must meet the same term again.
/// * A ground slot must be equal to the statement's term.
///
/// Any failing slot aborts the whole unification: no partial bindings are returned.
/// On success, the bindings may be empty (if `pattern` is ground).
pub fn unitary_match<T: Triple>(pattern: &Pattern, statement: T) -> MatchResult<Bindings> {
    let mut bound = Bindings::new();
    let slots = pattern.as_triple();
    let values = [statement.s(), statement.p(), statement.o()];
    for ((position, slot), value) in Position::SPO.into_iter().zip(slots).zip(values) {
        match canonical_name(slot) {
            Some(name) => match bound.get(name) {
                None => {
                    bound.insert(name, ArcTerm::from_term(value));
                }
                Some(previous) => {
                    if !Term::eq(previous, value) {
                        log::trace!("{position}: {name} is already bound to {previous:?}");
                        return Err(MatchFail::InconsistentBinding(position, name));
                    }
                }
            },
            None => {
                if !Term::eq(slot, value) {
                    return Err(MatchFail::GroundMismatch(position));
                }
            }
        }
    }
    Ok(bound)
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

    #[test]
    fn binds_every_placeholder() {
        let antecedent = Pattern::new(Uuu.var(), Aaa.var(), Yyy.var());
        let statement = [iri("x:joe"), iri("x:jerk"), ArcTerm::from_term("schmuck")];
        let b = unitary_match(&antecedent, statement).unwrap();
        assert_eq!(b.len(), 3);
        assert_eq!(b.get(Uuu), Some(&iri("x:joe")));
        assert_eq!(b.get(Aaa), Some(&iri("x:jerk")));
        assert_eq!(b.get(Yyy), Some(&ArcTerm::from_term("schmuck")));
    }

    #[test]
    fn ground_slots_must_be_equal() {
        let antecedent = Pattern::new(Aaa.var(), rdfs::domain, Xxx.var());
        let statement = [iri("x:annoys"), ArcTerm::from_term(rdfs::subPropertyOf), iri("x:Person")];
        assert_eq!(
            unitary_match(&antecedent, statement),
            Err(MatchFail::GroundMismatch(Position::Predicate)),
        );
    }

    #[test]
    fn ground_pattern_yields_empty_bindings() {
        let antecedent = Pattern::new(iri("x:s"), rdf::type_, iri("x:C"));
        let statement = [iri("x:s"), ArcTerm::from_term(rdf::type_), iri("x:C")];
        assert_eq!(unitary_match(&antecedent, statement), Ok(Bindings::new()));
    }

    #[test_case(iri("x:a"), iri("x:a"), true; "equal slots")]
    #[test_case(iri("x:a"), iri("x:b"), false; "different slots")]
    #[test_case(ArcTerm::from_term("a"), ArcTerm::from_term("a"), true; "equal literals")]
    #[test_case(ArcTerm::from_term(BnodeId::new_unchecked("b")), iri("x:b"), false; "bnode and iri")]
    fn reused_variable(s: ArcTerm, o: ArcTerm, exp: bool) {
        let antecedent = Pattern::new(Xxx.var(), iri("x:knows"), Xxx.var());
        let statement = [s.clone(), iri("x:knows"), o];
        let res = unitary_match(&antecedent, statement);
        assert_eq!(res.is_ok(), exp);
        if exp {
            assert_eq!(res.unwrap().get(Xxx), Some(&s));
        } else {
            assert_eq!(res, Err(MatchFail::InconsistentBinding(Position::Object, Xxx)));
        }
    }

    #[test]
    fn reused_variable_across_flavors() {
        let antecedent = Pattern::new(Xxx.bnode(), iri("x:knows"), Xxx.literal());
        let ok = [iri("x:a"), iri("x:knows"), iri("x:a")];
        let ko = [iri("x:a"), iri("x:knows"), iri("x:b")];
        assert!(unitary_match(&antecedent, ok).is_ok());
        assert_eq!(
            unitary_match(&antecedent, ko),
            Err(MatchFail::InconsistentBinding(Position::Object, Xxx)),
        );
    }

    #[test]
    fn first_failure_aborts() {
        let antecedent = Pattern::new(iri("x:s"), Aaa.var(), iri("x:o"));
        let statement = [iri("x:other"), iri("x:p"), iri("x:o")];
        assert_eq!(
            unitary_match(&antecedent, statement),
            Err(MatchFail::GroundMismatch(Position::Subject)),
        );
    }

    #[test]
    fn templated_statement_binds_placeholder() {
        let antecedent = Pattern::new(Aaa.var(), rdf::type_, iri("x:C"));
        let statement = Pattern::new(Uuu.var(), rdf::type_, iri("x:C"));
        let b = unitary_match(&antecedent, statement.as_triple()).unwrap();
        assert_eq!(b.get(Aaa), Some(&ArcTerm::from_term(Uuu.var())));
    }
}
