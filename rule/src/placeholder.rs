//! I define the reserved [placeholders](Placeholder) that act as variables in rule patterns.
//!
//! There are nine [canonical names](PlaceholderName),
//! each of which can be written in three different flavors:
//! * as a variable (`?aaa`),
//! * as a plain literal (`"aaa"`),
//! * as a blank node (`_:aaa`).
//!
//! The three flavors of a given name are *not* equal as RDF terms,
//! but they always denote the same variable:
//! bindings are keyed by [`PlaceholderName`], never by the term itself.
use std::fmt;
use std::str::FromStr;

use sophia_api::term::{BnodeId, FromTerm, Term, TermKind, VarName};

/// The nine canonical names of placeholders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PlaceholderName {
    /// `aaa`
    Aaa,
    /// `bbb`
    Bbb,
    /// `ccc`
    Ccc,
    /// `ddd`
    Ddd,
    /// `uuu`
    Uuu,
    /// `vvv`
    Vvv,
    /// `xxx`
    Xxx,
    /// `yyy`
    Yyy,
    /// `zzz`
    Zzz,
}

impl PlaceholderName {
    /// All placeholder names, in declaration order.
    pub const ALL: [PlaceholderName; 9] = [
        PlaceholderName::Aaa,
        PlaceholderName::Bbb,
        PlaceholderName::Ccc,
        PlaceholderName::Ddd,
        PlaceholderName::Uuu,
        PlaceholderName::Vvv,
        PlaceholderName::Xxx,
        PlaceholderName::Yyy,
        PlaceholderName::Zzz,
    ];

    /// The textual form of this name.
    pub fn as_str(self) -> &'static str {
        match self {
            PlaceholderName::Aaa => "aaa",
            PlaceholderName::Bbb => "bbb",
            PlaceholderName::Ccc => "ccc",
            PlaceholderName::Ddd => "ddd",
            PlaceholderName::Uuu => "uuu",
            PlaceholderName::Vvv => "vvv",
            PlaceholderName::Xxx => "xxx",
            PlaceholderName::Yyy => "yyy",
            PlaceholderName::Zzz => "zzz",
        }
    }

    /// This name as a variable term (`?aaa`).
    pub fn var(self) -> VarName<&'static str> {
        VarName::new_unchecked(self.as_str())
    }

    /// This name as a plain literal term (`"aaa"`).
    pub fn literal(self) -> &'static str {
        self.as_str()
    }

    /// This name as a blank node term (`_:aaa`).
    pub fn bnode(self) -> BnodeId<&'static str> {
        BnodeId::new_unchecked(self.as_str())
    }

    /// Build the term of this name in the given `flavor`.
    pub fn to_term<T: FromTerm>(self, flavor: Flavor) -> T {
        match flavor {
            Flavor::Bare => T::from_term(self.var()),
            Flavor::Literal => T::from_term(self.literal()),
            Flavor::Node => T::from_term(self.bnode()),
        }
    }
}

impl fmt::Display for PlaceholderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlaceholderName {
    type Err = UnknownPlaceholder;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PlaceholderName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| UnknownPlaceholder(s.to_string()))
    }
}

/// This error is raised when parsing a string that is not a placeholder name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a placeholder name")]
pub struct UnknownPlaceholder(pub String);

/// The three ways a placeholder can be written as an RDF term.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Flavor {
    /// A variable, e.g. `?aaa`
    Bare,
    /// A plain literal, e.g. `"aaa"`
    Literal,
    /// A blank node, e.g. `_:aaa`
    Node,
}

impl Flavor {
    /// All flavors.
    pub const ALL: [Flavor; 3] = [Flavor::Bare, Flavor::Literal, Flavor::Node];
}

/// A placeholder recognized in a term: its flavor and its canonical name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Placeholder {
    /// A placeholder written as a variable
    Bare(PlaceholderName),
    /// A placeholder written as a plain literal
    Literal(PlaceholderName),
    /// A placeholder written as a blank node
    Node(PlaceholderName),
}

impl Placeholder {
    /// Recognize `term` as one of the 27 placeholder values, if it is one.
    pub fn recognize<T: Term>(term: T) -> Option<Self> {
        let (flavor, wrap): (Flavor, fn(PlaceholderName) -> Placeholder) = match term.kind() {
            TermKind::Variable => (Flavor::Bare, Placeholder::Bare),
            TermKind::Literal => (Flavor::Literal, Placeholder::Literal),
            TermKind::BlankNode => (Flavor::Node, Placeholder::Node),
            _ => return None,
        };
        PlaceholderName::ALL
            .into_iter()
            .find(|name| match flavor {
                Flavor::Bare => Term::eq(&term, name.var()),
                Flavor::Literal => Term::eq(&term, name.literal()),
                Flavor::Node => Term::eq(&term, name.bnode()),
            })
            .map(wrap)
    }

    /// Iterate over the 27 placeholders.
    pub fn all() -> impl Iterator<Item = Placeholder> {
        Flavor::ALL.into_iter().flat_map(|flavor| {
            PlaceholderName::ALL
                .into_iter()
                .map(move |name| Placeholder::new(name, flavor))
        })
    }

    /// The placeholder with the given `name` and `flavor`.
    pub fn new(name: PlaceholderName, flavor: Flavor) -> Self {
        match flavor {
            Flavor::Bare => Placeholder::Bare(name),
            Flavor::Literal => Placeholder::Literal(name),
            Flavor::Node => Placeholder::Node(name),
        }
    }

    /// The identity of this placeholder, shared by its three flavors.
    pub fn canonical_name(&self) -> PlaceholderName {
        match self {
            Placeholder::Bare(name) | Placeholder::Literal(name) | Placeholder::Node(name) => *name,
        }
    }

    /// How this placeholder is written.
    pub fn flavor(&self) -> Flavor {
        match self {
            Placeholder::Bare(_) => Flavor::Bare,
            Placeholder::Literal(_) => Flavor::Literal,
            Placeholder::Node(_) => Flavor::Node,
        }
    }

    /// The term for this placeholder.
    pub fn to_term<T: FromTerm>(&self) -> T {
        self.canonical_name().to_term(self.flavor())
    }
}

/// Whether `term` is one of the 27 placeholder values.
pub fn is_placeholder<T: Term>(term: T) -> bool {
    Placeholder::recognize(term).is_some()
}

/// The canonical name of `term`, if it is a placeholder.
pub fn canonical_name<T: Term>(term: T) -> Option<PlaceholderName> {
    Placeholder::recognize(term).map(|ph| ph.canonical_name())
}
