//! I define [`Bindings`], the assignment of terms to placeholders produced by a match.
use std::collections::btree_map::{self, BTreeMap};

use sophia_term::ArcTerm;

use crate::placeholder::PlaceholderName;

/// A mapping from placeholder names to the terms they are bound to.
///
/// A fresh [`Bindings`] is built by every match attempt,
/// and is never shared between two attempts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Bindings(BTreeMap<PlaceholderName, ArcTerm>);

impl Bindings {
    /// An empty binding map.
    pub fn new() -> Self {
        Self::default()
    }

    /// The term bound to `name`, if any.
    pub fn get(&self, name: PlaceholderName) -> Option<&ArcTerm> {
        self.0.get(&name)
    }

    /// Whether `name` is bound.
    pub fn contains(&self, name: PlaceholderName) -> bool {
        self.0.contains_key(&name)
    }

    /// Bind `name` to `term`, returning the previous value if any.
    pub fn insert(&mut self, name: PlaceholderName, term: ArcTerm) -> Option<ArcTerm> {
        self.0.insert(name, term)
    }

    /// The number of bound placeholders.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether nothing is bound.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over bindings, ordered by placeholder name.
    pub fn iter(&self) -> btree_map::Iter<'_, PlaceholderName, ArcTerm> {
        self.0.iter()
    }

    /// Merge `other` into `self`.
    ///
    /// When both maps bind the same placeholder, the value from `other` wins.
    /// The matcher calls `second.merge(first)`,
    /// so that the bindings of the first (more specific) match are authoritative.
    pub fn merge(mut self, other: Bindings) -> Bindings {
        self.0.extend(other.0);
        self
    }
}

impl FromIterator<(PlaceholderName, ArcTerm)> for Bindings {
    fn from_iter<I: IntoIterator<Item = (PlaceholderName, ArcTerm)>>(iter: I) -> Self {
        Bindings(iter.into_iter().collect())
    }
}

impl IntoIterator for Bindings {
    type Item = (PlaceholderName, ArcTerm);
    type IntoIter = btree_map::IntoIter<PlaceholderName, ArcTerm>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Bindings {
    type Item = (&'a PlaceholderName, &'a ArcTerm);
    type IntoIter = btree_map::Iter<'a, PlaceholderName, ArcTerm>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
