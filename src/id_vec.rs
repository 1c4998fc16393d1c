use std::collections::BTreeMap;

use crate::id::{Id, IdAllocator};
use crate::graph_id::GraphId;

/// Storage for values keyed by ids the store itself issues.
///
/// Ids are never reused, so iterating in key order is iterating in insertion
/// order, even after removals or a [`clear`](IdVec::clear).
#[derive(Clone, Debug)]
pub(crate) struct IdVec<K, T> {
    ids: IdAllocator<K>,
    slots: BTreeMap<usize, T>,
}

impl<K, T> IdVec<K, T> {
    pub fn new(graph_id: GraphId) -> Self {
        Self {
            ids: IdAllocator::new(graph_id),
            slots: BTreeMap::new(),
        }
    }

    /// Inserts a value built from its freshly allocated id.
    pub fn insert_with(&mut self, f: impl FnOnce(Id<K>) -> T) -> Id<K> {
        let id = self.ids.allocate();
        self.slots.insert(id.index(), f(id));
        id
    }

    pub fn get(&self, id: Id<K>) -> Option<&T> {
        if !self.ids.issued(&id) {
            return None;
        }
        self.slots.get(&id.index())
    }

    pub fn get_mut(&mut self, id: Id<K>) -> Option<&mut T> {
        if !self.ids.issued(&id) {
            return None;
        }
        self.slots.get_mut(&id.index())
    }

    pub fn remove(&mut self, id: Id<K>) -> Option<T> {
        if !self.ids.issued(&id) {
            return None;
        }
        self.slots.remove(&id.index())
    }

    /// Removes every value for which `keep` returns false, returning them in
    /// insertion order.
    pub fn extract_unless(&mut self, mut keep: impl FnMut(&T) -> bool) -> Vec<T> {
        let doomed: Vec<usize> = self
            .slots
            .iter()
            .filter(|(_, value)| !keep(value))
            .map(|(&index, _)| index)
            .collect();
        doomed
            .into_iter()
            .filter_map(|index| self.slots.remove(&index))
            .collect()
    }

    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.slots.values()
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> + '_ {
        self.slots.values_mut()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Drops every value. The id counter keeps running.
    pub fn clear(&mut self) {
        self.slots.clear();
    }
}
