use std::sync::atomic::{AtomicUsize, Ordering};

/// Process-wide counter for graph identities. Wrapping around would only let
/// ids from two unrelated graphs be mistaken for each other, which is
/// harmless in practice.
static GRAPH_ID_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Identifies the graph lineage that issued a vertex or edge id.
///
/// Clones of a graph share its `GraphId`, so ids taken from a snapshot stay
/// valid in the graph that replaces it.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub struct GraphId(usize);

impl GraphId {
    pub fn new() -> Self {
        GraphId(GRAPH_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for GraphId {
    fn default() -> Self {
        Self::new()
    }
}
