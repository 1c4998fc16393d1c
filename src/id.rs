use std::{fmt::Debug, marker::PhantomData};

use derivative::Derivative;

use crate::graph_id::GraphId;

/// Names the kind of entity an [`Id`] refers to.
pub trait IdKind {
    const NAME: &'static str;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VertexKind {}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EdgeKind {}

impl IdKind for VertexKind {
    const NAME: &'static str = "VertexId";
}

impl IdKind for EdgeKind {
    const NAME: &'static str = "EdgeId";
}

/// An opaque, never-reused identifier issued by a graph.
///
/// Ordering follows creation order. The issuing graph is recorded so that a
/// graph can refuse ids it did not issue, but it takes no part in
/// comparisons or hashing.
#[derive(Derivative)]
#[derivative(
    Clone(bound = ""),
    Copy(bound = ""),
    PartialEq(bound = ""),
    Eq(bound = ""),
    Hash(bound = ""),
    PartialOrd(bound = ""),
    Ord(bound = "")
)]
pub struct Id<K> {
    index: usize,
    #[derivative(PartialEq = "ignore", PartialOrd = "ignore", Ord = "ignore", Hash = "ignore")]
    graph_id: GraphId,
    #[derivative(PartialEq = "ignore", PartialOrd = "ignore", Ord = "ignore", Hash = "ignore")]
    _kind: PhantomData<K>,
}

pub type VertexId = Id<VertexKind>;
pub type EdgeId = Id<EdgeKind>;

impl<K> Id<K> {
    pub(crate) fn new(index: usize, graph_id: GraphId) -> Self {
        Self {
            index,
            graph_id,
            _kind: PhantomData,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn graph_id(&self) -> GraphId {
        self.graph_id
    }
}

impl<K: IdKind> Debug for Id<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", K::NAME, self.index)
    }
}

/// Hands out consecutive ids for one graph lineage.
#[derive(Clone, Debug)]
pub(crate) struct IdAllocator<K> {
    next: usize,
    graph_id: GraphId,
    _kind: PhantomData<K>,
}

impl<K> IdAllocator<K> {
    pub fn new(graph_id: GraphId) -> Self {
        Self {
            next: 0,
            graph_id,
            _kind: PhantomData,
        }
    }

    pub fn allocate(&mut self) -> Id<K> {
        let id = Id::new(self.next, self.graph_id);
        self.next += 1;
        id
    }

    pub fn issued(&self, id: &Id<K>) -> bool {
        id.graph_id == self.graph_id && id.index < self.next
    }
}
