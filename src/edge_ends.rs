use std::{fmt::Debug, hash::Hash};

use derivative::Derivative;

use crate::kind::GraphKind;

/// The two endpoints of an edge, kept in the orientation the edge was
/// created with. Undirected consumers treat the pair symmetrically through
/// [`EdgeEnds::has_both`] and [`EdgeEnds::key`].
#[derive(Derivative)]
#[derivative(
    Clone(bound = "T: Clone"),
    Copy(bound = "T: Copy"),
    Debug(bound = "T: Debug"),
    Hash(bound = "T: Hash"),
    PartialEq(bound = "T: PartialEq"),
    Eq(bound = "T: Eq")
)]
pub struct EdgeEnds<T> {
    source: T,
    target: T,
}

impl<T> EdgeEnds<T> {
    pub fn new(source: T, target: T) -> Self {
        Self { source, target }
    }

    pub fn source(&self) -> &T {
        &self.source
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn values(&self) -> (&T, &T) {
        (&self.source, &self.target)
    }

    pub fn reversed(self) -> Self {
        Self {
            source: self.target,
            target: self.source,
        }
    }
}

impl<T: Eq> EdgeEnds<T> {
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }

    /// Returns true if this edge joins `a` to `b` under `kind`.
    pub fn has_both(&self, kind: GraphKind, a: &T, b: &T) -> bool {
        kind.connects(self.values(), a, b)
    }

    pub fn touches(&self, value: &T) -> bool {
        self.source == *value || self.target == *value
    }
}

impl<T: Ord + Clone> EdgeEnds<T> {
    /// A key that is equal for two edges exactly when they may not coexist
    /// in a graph of the given kind.
    pub fn key(&self, kind: GraphKind) -> (T, T) {
        if kind.is_directed() {
            (self.source.clone(), self.target.clone())
        } else {
            sort_pair(self.source.clone(), self.target.clone())
        }
    }
}

fn sort_pair<K: Ord>(a: K, b: K) -> (K, K) {
    if a <= b { (a, b) } else { (b, a) }
}
