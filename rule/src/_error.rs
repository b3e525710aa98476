use std::fmt;

use thiserror::Error;

use crate::placeholder::PlaceholderName;

/// The outcome of any matching or substitution step.
pub type MatchResult<T> = Result<T, MatchFail>;

/// The reason why a rule did not derive anything.
///
/// All variants mean the same thing to the caller (no derivation);
/// they only differ for diagnostic purposes.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MatchFail {
    /// The number of statements differs from the number of antecedents
    #[error("Expected {expected} statement(s), got {found}")]
    Arity {
        /// number of antecedents of the rule
        expected: usize,
        /// number of statements supplied
        found: usize,
    },
    /// Only rules with one or two antecedents can be matched
    #[error("Unsupported rule with {0} antecedents")]
    UnsupportedRule(usize),
    /// A ground slot of the pattern differs from the statement
    #[error("Ground term mismatch in {0}")]
    GroundMismatch(Position),
    /// A placeholder is bound to a different term by an earlier slot
    #[error("Inconsistent binding of {1} in {0}")]
    InconsistentBinding(Position, PlaceholderName),
    /// Neither assignment of the two statements to the antecedents matches
    #[error("No ordering of the statements matches the antecedents")]
    NoOrdering,
    /// A consequent still contains a placeholder after substitution
    #[error("Consequent under-determined: {0} is not bound by the antecedents")]
    Underdetermined(PlaceholderName),
}

/// A slot of a triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Position {
    /// The subject
    Subject,
    /// The predicate
    Predicate,
    /// The object
    Object,
}

impl Position {
    /// The three positions, in triple order.
    pub const SPO: [Position; 3] = [Position::Subject, Position::Predicate, Position::Object];
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Subject => f.write_str("subject"),
            Position::Predicate => f.write_str("predicate"),
            Position::Object => f.write_str("object"),
        }
    }
}
