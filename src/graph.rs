//! The graph model: vertices with unique names, edges between them, and the
//! rules that keep the two consistent.
//!
//! Edges hold the [`VertexId`]s of their endpoints, never names, so renaming
//! a vertex is a single update and no edge can be left pointing at a stale
//! name. Names are resolved on the way out, by [`Graph::edge_names`] and
//! [`Graph::snapshot`].
//!
//! A [`Graph`] is an ordinary owned value. Callers that want to keep the
//! previous state around, or to apply an operation all-or-nothing, clone it
//! first; ids stay valid across clones.

use std::collections::HashMap;

use crate::{
    config::{GraphConfig, SelfLoopPolicy},
    cycle::{Cycle, Snapshot},
    edge_ends::EdgeEnds,
    error::GraphError,
    graph_id::GraphId,
    id::{EdgeId, EdgeKind, VertexId, VertexKind},
    id_vec::IdVec,
    kind::GraphKind,
    matrix::AdjacencyMatrix,
    naming::{generate_unique_name, is_valid_name},
    vertex::{Edge, Position, Vertex},
};

#[derive(Clone, Debug)]
pub struct Graph {
    id: GraphId,
    config: GraphConfig,
    vertices: IdVec<VertexKind, Vertex>,
    edges: IdVec<EdgeKind, Edge>,
    names: HashMap<String, VertexId>,
}

impl Default for Graph {
    fn default() -> Self {
        Self::with_config(GraphConfig::default())
    }
}

impl Graph {
    pub fn new(kind: GraphKind) -> Self {
        Self::with_config(GraphConfig::new(kind))
    }

    pub fn with_config(config: GraphConfig) -> Self {
        let id = GraphId::new();
        Self {
            id,
            config,
            vertices: IdVec::new(id),
            edges: IdVec::new(id),
            names: HashMap::new(),
        }
    }

    pub fn id(&self) -> GraphId {
        self.id
    }

    pub fn kind(&self) -> GraphKind {
        self.config.kind
    }

    pub fn is_directed(&self) -> bool {
        self.kind().is_directed()
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    // Vertices

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id)
    }

    pub fn vertex_id(&self, name: &str) -> Option<VertexId> {
        self.names.get(name).copied()
    }

    pub fn vertex_by_name(&self, name: &str) -> Option<&Vertex> {
        self.vertex_id(name).and_then(|id| self.vertex(id))
    }

    pub fn name_of(&self, id: VertexId) -> Option<&str> {
        self.vertex(id).map(Vertex::name)
    }

    /// Vertices in creation order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.vertices.values()
    }

    /// Vertex names in creation order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.vertices().map(Vertex::name)
    }

    pub fn degree(&self, id: VertexId) -> Option<usize> {
        self.vertex(id).map(Vertex::degree)
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    // Edges

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id)
    }

    /// Edges in creation order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.values()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// The current `(source, target)` names of an edge.
    pub fn edge_names(&self, id: EdgeId) -> Option<(&str, &str)> {
        let edge = self.edge(id)?;
        self.ends_names(&edge.ends)
    }

    fn ends_names(&self, ends: &EdgeEnds<VertexId>) -> Option<(&str, &str)> {
        Some((self.name_of(*ends.source())?, self.name_of(*ends.target())?))
    }

    /// The edge joining `a` to `b`, in either orientation when undirected.
    pub fn edge_between(&self, a: &str, b: &str) -> Option<&Edge> {
        let a = self.vertex_id(a)?;
        let b = self.vertex_id(b)?;
        let kind = self.kind();
        self.edges().find(|edge| edge.ends.has_both(kind, &a, &b))
    }

    pub fn has_edge_between(&self, a: &str, b: &str) -> bool {
        self.edge_between(a, b).is_some()
    }

    // Vertex mutations

    /// Adds a vertex with the first free name of the naming sequence.
    pub fn add_vertex(&mut self, position: Position) -> VertexId {
        let name = generate_unique_name(self.names.keys().map(String::as_str));
        self.insert_vertex(name, position)
    }

    /// Adds a vertex with a caller-chosen name.
    pub fn add_named_vertex(&mut self, name: &str, position: Position) -> Result<VertexId, GraphError> {
        if !is_valid_name(name) {
            return Err(GraphError::InvalidName(name.to_string()));
        }
        if self.names.contains_key(name) {
            return Err(GraphError::DuplicateName(name.to_string()));
        }
        Ok(self.insert_vertex(name.to_string(), position))
    }

    fn insert_vertex(&mut self, name: String, position: Position) -> VertexId {
        let id = self.vertices.insert_with(|id| Vertex {
            id,
            name: name.clone(),
            position,
            degree: 0,
        });
        tracing::debug!(?id, %name, "vertex added");
        self.names.insert(name, id);
        id
    }

    /// Renames a vertex. Every incident edge reports the new name from then
    /// on. Renaming a vertex to its current name succeeds.
    pub fn rename_vertex(&mut self, id: VertexId, new_name: &str) -> Result<(), GraphError> {
        if self.vertex(id).is_none() {
            return Err(GraphError::UnknownVertex(id));
        }
        if !is_valid_name(new_name) {
            return Err(GraphError::InvalidName(new_name.to_string()));
        }
        match self.vertex_id(new_name) {
            Some(other) if other != id => {
                return Err(GraphError::DuplicateName(new_name.to_string()));
            }
            Some(_) => return Ok(()),
            None => {}
        }

        let Some(vertex) = self.vertices.get_mut(id) else {
            return Err(GraphError::UnknownVertex(id));
        };
        let old_name = std::mem::replace(&mut vertex.name, new_name.to_string());
        self.names.remove(&old_name);
        self.names.insert(new_name.to_string(), id);
        tracing::debug!(?id, %old_name, %new_name, "vertex renamed");
        Ok(())
    }

    /// Moves a vertex. Returns false if there is no such vertex.
    pub fn move_vertex(&mut self, id: VertexId, position: Position) -> bool {
        match self.vertices.get_mut(id) {
            Some(vertex) => {
                vertex.position = position;
                true
            }
            None => false,
        }
    }

    /// Removes a vertex and every edge touching it. Does nothing and returns
    /// `None` if there is no such vertex.
    pub fn delete_vertex(&mut self, id: VertexId) -> Option<Vertex> {
        let vertex = self.vertices.remove(id)?;
        self.names.remove(&vertex.name);
        let removed = self.edges.extract_unless(|edge| !edge.ends.touches(&id));
        self.recompute_degrees();
        tracing::debug!(?id, name = %vertex.name, edges_removed = removed.len(), "vertex deleted");
        Some(vertex)
    }

    // Edge mutations

    /// Adds an edge between the vertices named `source` and `target`,
    /// creating either vertex first if no vertex has that name yet. Created
    /// vertices take the requested name verbatim and a random position in
    /// the configured spawn area.
    ///
    /// Nothing changes if the call fails.
    pub fn add_edge(
        &mut self,
        source: &str,
        target: &str,
        policy: SelfLoopPolicy,
    ) -> Result<EdgeId, GraphError> {
        if source == target && !policy.allows_self_loops() {
            return Err(GraphError::SelfLoopRejected(source.to_string()));
        }
        if let Some(empty) = [source, target].into_iter().find(|name| name.is_empty()) {
            return Err(GraphError::InvalidName(empty.to_string()));
        }
        if self.has_edge_between(source, target) {
            return Err(GraphError::EdgeExists {
                from: source.to_string(),
                to: target.to_string(),
            });
        }

        let source_id = self.vertex_or_spawn(source);
        let target_id = self.vertex_or_spawn(target);
        let id = self.edges.insert_with(|id| Edge {
            id,
            ends: EdgeEnds::new(source_id, target_id),
        });
        self.recompute_degrees();
        tracing::debug!(?id, from = source, to = target, "edge added");
        Ok(id)
    }

    /// Adds an edge between two existing vertices.
    pub fn connect(
        &mut self,
        source: VertexId,
        target: VertexId,
        policy: SelfLoopPolicy,
    ) -> Result<EdgeId, GraphError> {
        let source_name = self
            .name_of(source)
            .ok_or(GraphError::UnknownVertex(source))?
            .to_string();
        let target_name = self
            .name_of(target)
            .ok_or(GraphError::UnknownVertex(target))?
            .to_string();
        self.add_edge(&source_name, &target_name, policy)
    }

    fn vertex_or_spawn(&mut self, name: &str) -> VertexId {
        if let Some(id) = self.vertex_id(name) {
            return id;
        }
        let position = self
            .config
            .spawn_area
            .random_position(&mut rand::thread_rng());
        self.insert_vertex(name.to_string(), position)
    }

    /// Removes an edge. Does nothing and returns `None` if there is no such
    /// edge.
    pub fn remove_edge(&mut self, id: EdgeId) -> Option<Edge> {
        let edge = self.edges.remove(id)?;
        self.recompute_degrees();
        tracing::debug!(?id, "edge removed");
        Some(edge)
    }

    /// Removes the edge joining `source` to `target`, in either orientation
    /// when undirected.
    pub fn remove_edge_between(&mut self, source: &str, target: &str) -> Result<Edge, GraphError> {
        let not_found = || GraphError::EdgeNotFound {
            from: source.to_string(),
            to: target.to_string(),
        };
        let id = self.edge_between(source, target).ok_or_else(not_found)?.id;
        self.remove_edge(id).ok_or_else(not_found)
    }

    /// Swaps the endpoints of a directed edge.
    ///
    /// Returns `Ok(false)` without changing anything when the graph is
    /// undirected or the edge does not exist. Fails if the reversed edge
    /// already exists on its own.
    pub fn reverse_edge(&mut self, id: EdgeId) -> Result<bool, GraphError> {
        if !self.is_directed() {
            tracing::debug!(?id, "ignoring reversal in undirected graph");
            return Ok(false);
        }
        let Some(edge) = self.edges.get(id) else {
            return Ok(false);
        };
        let reversed = edge.ends.reversed();
        if self
            .edges()
            .any(|other| other.id != id && other.ends == reversed)
        {
            let (from, to) = self.ends_names(&reversed).unwrap_or_default();
            return Err(GraphError::EdgeExists {
                from: from.to_string(),
                to: to.to_string(),
            });
        }

        if let Some(edge) = self.edges.get_mut(id) {
            edge.ends = reversed;
        }
        self.recompute_degrees();
        tracing::debug!(?id, "edge reversed");
        Ok(true)
    }

    /// Removes every vertex and edge. Ids handed out before are never reused.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edges.clear();
        self.names.clear();
        tracing::debug!(graph = ?self.id, "graph cleared");
    }

    fn recompute_degrees(&mut self) {
        let mut degrees: HashMap<VertexId, usize> = HashMap::with_capacity(self.vertices.len());
        for edge in self.edges.values() {
            *degrees.entry(*edge.ends.source()).or_default() += 1;
            *degrees.entry(*edge.ends.target()).or_default() += 1;
        }
        for vertex in self.vertices.values_mut() {
            vertex.degree = degrees.get(&vertex.id).copied().unwrap_or(0);
        }
    }

    // Queries

    /// The graph by name: vertex names in creation order and edge endpoint
    /// names in edge creation order.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            kind: self.kind(),
            vertices: self.names().map(str::to_string).collect(),
            edges: self
                .edges()
                .filter_map(|edge| self.ends_names(&edge.ends))
                .map(|(source, target)| (source.to_string(), target.to_string()))
                .collect(),
        }
    }

    /// Finds one cycle in the graph, or returns an empty [`Cycle`].
    pub fn find_cycle(&self) -> Cycle {
        self.snapshot().find_cycle()
    }

    pub fn adjacency_matrix(&self) -> AdjacencyMatrix {
        AdjacencyMatrix::from_snapshot(&self.snapshot())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALLOW: SelfLoopPolicy = SelfLoopPolicy::Allow;

    fn origin() -> Position {
        Position::default()
    }

    fn edge_name_pairs(graph: &Graph) -> Vec<(String, String)> {
        graph.snapshot().edges
    }

    #[test]
    fn test_new_graph_is_empty() {
        let graph = Graph::new(GraphKind::Undirected);
        assert!(graph.is_empty());
        assert_eq!(graph.num_edges(), 0);
        assert_eq!(graph.kind(), GraphKind::Undirected);
        assert!(graph.find_cycle().is_empty());
    }

    #[test]
    fn test_add_vertex_uses_naming_sequence() {
        let mut graph = Graph::new(GraphKind::Directed);
        let a = graph.add_vertex(origin());
        let b = graph.add_vertex(origin());
        assert_eq!(graph.name_of(a), Some("A"));
        assert_eq!(graph.name_of(b), Some("B"));

        graph.delete_vertex(a);
        let again = graph.add_vertex(origin());
        assert_eq!(graph.name_of(again), Some("A"));
        assert_ne!(again, a);
    }

    #[test]
    fn test_add_named_vertex() {
        let mut graph = Graph::new(GraphKind::Directed);
        let x = graph.add_named_vertex("X", Position::new(1.0, 2.0));
        assert!(x.is_ok());
        assert_eq!(
            graph.add_named_vertex("X", origin()),
            Err(GraphError::DuplicateName("X".into()))
        );
        assert_eq!(
            graph.add_named_vertex("XY", origin()),
            Err(GraphError::InvalidName("XY".into()))
        );
        assert_eq!(graph.num_vertices(), 1);
        assert_eq!(graph.add_vertex(origin()), graph.vertex_id("A").unwrap());
    }

    #[test]
    fn test_rename_vertex_updates_edges() {
        let mut graph = Graph::new(GraphKind::Directed);
        graph.add_edge("A", "B", ALLOW).unwrap();
        graph.add_edge("C", "A", ALLOW).unwrap();
        graph.add_edge("A", "A", ALLOW).unwrap();
        let a = graph.vertex_id("A").unwrap();

        graph.rename_vertex(a, "Z").unwrap();
        assert_eq!(graph.num_edges(), 3);
        assert_eq!(graph.vertex_id("A"), None);
        assert_eq!(graph.vertex_id("Z"), Some(a));
        assert_eq!(
            edge_name_pairs(&graph),
            vec![
                ("Z".to_string(), "B".to_string()),
                ("C".to_string(), "Z".to_string()),
                ("Z".to_string(), "Z".to_string()),
            ]
        );
    }

    #[test]
    fn test_rename_vertex_failures() {
        let mut graph = Graph::new(GraphKind::Directed);
        let a = graph.add_vertex(origin());
        graph.add_vertex(origin());
        assert_eq!(
            graph.rename_vertex(a, "B"),
            Err(GraphError::DuplicateName("B".into()))
        );
        assert_eq!(
            graph.rename_vertex(a, "1000"),
            Err(GraphError::InvalidName("1000".into()))
        );
        assert_eq!(graph.rename_vertex(a, "A"), Ok(()));
        assert_eq!(graph.name_of(a), Some("A"));

        graph.delete_vertex(a);
        assert_eq!(
            graph.rename_vertex(a, "Q"),
            Err(GraphError::UnknownVertex(a))
        );
    }

    #[test]
    fn test_rename_is_case_sensitive() {
        let mut graph = Graph::new(GraphKind::Directed);
        let a = graph.add_vertex(origin());
        graph.add_vertex(origin());
        assert_eq!(graph.rename_vertex(a, "b"), Ok(()));
        assert_eq!(graph.names().collect::<Vec<_>>(), vec!["b", "B"]);
    }

    #[test]
    fn test_delete_vertex_cascades_to_incident_edges_only() {
        let mut graph = Graph::new(GraphKind::Directed);
        graph.add_edge("A", "B", ALLOW).unwrap();
        graph.add_edge("B", "C", ALLOW).unwrap();
        graph.add_edge("C", "D", ALLOW).unwrap();
        graph.add_edge("B", "B", ALLOW).unwrap();
        let b = graph.vertex_id("B").unwrap();

        let removed = graph.delete_vertex(b).unwrap();
        assert_eq!(removed.name(), "B");
        assert_eq!(
            edge_name_pairs(&graph),
            vec![("C".to_string(), "D".to_string())]
        );
        assert_eq!(graph.degree(graph.vertex_id("A").unwrap()), Some(0));
        assert_eq!(graph.delete_vertex(b), None);
    }

    #[test]
    fn test_add_edge_spawns_missing_vertices() {
        let mut graph = Graph::new(GraphKind::Directed);
        graph.add_edge("foo", "bar", ALLOW).unwrap();
        assert_eq!(graph.names().collect::<Vec<_>>(), vec!["foo", "bar"]);
        let area = graph.config().spawn_area.clone();
        for vertex in graph.vertices() {
            assert!(area.x.contains(&vertex.position().x));
            assert!(area.y.contains(&vertex.position().y));
        }
    }

    #[test]
    fn test_add_edge_rejects_duplicates() {
        let mut graph = Graph::new(GraphKind::Directed);
        graph.add_edge("A", "B", ALLOW).unwrap();
        assert_eq!(
            graph.add_edge("A", "B", ALLOW),
            Err(GraphError::EdgeExists {
                from: "A".into(),
                to: "B".into()
            })
        );
        assert!(graph.add_edge("B", "A", ALLOW).is_ok());
        assert_eq!(graph.num_edges(), 2);

        let mut graph = Graph::new(GraphKind::Undirected);
        graph.add_edge("A", "B", ALLOW).unwrap();
        assert!(graph.add_edge("B", "A", ALLOW).is_err());
        assert_eq!(graph.num_edges(), 1);
    }

    #[test]
    fn test_self_loop_policy() {
        let mut graph = Graph::new(GraphKind::Directed);
        assert_eq!(
            graph.add_edge("A", "A", SelfLoopPolicy::Reject),
            Err(GraphError::SelfLoopRejected("A".into()))
        );
        assert!(graph.is_empty());

        graph.add_edge("A", "A", ALLOW).unwrap();
        assert_eq!(graph.num_vertices(), 1);
        assert_eq!(graph.degree(graph.vertex_id("A").unwrap()), Some(2));
        assert_eq!(graph.find_cycle().names(), ["A"]);
    }

    #[test]
    fn test_failed_add_edge_changes_nothing() {
        let mut graph = Graph::new(GraphKind::Directed);
        graph.add_edge("A", "B", ALLOW).unwrap();
        assert!(graph.add_edge("", "C", ALLOW).is_err());
        assert!(graph.add_edge("A", "B", ALLOW).is_err());
        assert_eq!(graph.num_vertices(), 2);
        assert_eq!(graph.vertex_id("C"), None);
    }

    #[test]
    fn test_connect_by_id() {
        let mut graph = Graph::new(GraphKind::Directed);
        let a = graph.add_vertex(origin());
        let b = graph.add_vertex(origin());
        let e = graph.connect(a, b, ALLOW).unwrap();
        assert_eq!(graph.edge_names(e), Some(("A", "B")));
        graph.delete_vertex(b);
        assert_eq!(
            graph.connect(a, b, ALLOW),
            Err(GraphError::UnknownVertex(b))
        );
    }

    #[test]
    fn test_remove_edge() {
        let mut graph = Graph::new(GraphKind::Directed);
        let e = graph.add_edge("A", "B", ALLOW).unwrap();
        assert!(graph.remove_edge(e).is_some());
        assert!(graph.remove_edge(e).is_none());
        assert_eq!(graph.num_edges(), 0);
        assert_eq!(graph.num_vertices(), 2);
    }

    #[test]
    fn test_remove_edge_between() {
        let mut graph = Graph::new(GraphKind::Directed);
        graph.add_edge("A", "B", ALLOW).unwrap();
        assert_eq!(
            graph.remove_edge_between("B", "A").map(|e| e.id()),
            Err(GraphError::EdgeNotFound {
                from: "B".into(),
                to: "A".into()
            })
        );
        assert!(graph.remove_edge_between("A", "B").is_ok());

        let mut graph = Graph::new(GraphKind::Undirected);
        graph.add_edge("A", "B", ALLOW).unwrap();
        assert!(graph.remove_edge_between("B", "A").is_ok());
        assert_eq!(graph.num_edges(), 0);
        assert!(graph.remove_edge_between("A", "Q").is_err());
    }

    #[test]
    fn test_reverse_edge() {
        let mut graph = Graph::new(GraphKind::Directed);
        let e = graph.add_edge("A", "B", ALLOW).unwrap();
        assert_eq!(graph.reverse_edge(e), Ok(true));
        assert_eq!(graph.edge_names(e), Some(("B", "A")));
        assert_eq!(graph.reverse_edge(e), Ok(true));
        assert_eq!(graph.edge_names(e), Some(("A", "B")));
    }

    #[test]
    fn test_reverse_edge_onto_existing_edge_fails() {
        let mut graph = Graph::new(GraphKind::Directed);
        let e = graph.add_edge("A", "B", ALLOW).unwrap();
        graph.add_edge("B", "A", ALLOW).unwrap();
        assert_eq!(
            graph.reverse_edge(e),
            Err(GraphError::EdgeExists {
                from: "B".into(),
                to: "A".into()
            })
        );
        assert_eq!(graph.edge_names(e), Some(("A", "B")));

        let s = graph.add_edge("C", "C", ALLOW).unwrap();
        assert_eq!(graph.reverse_edge(s), Ok(true));
    }

    #[test]
    fn test_reverse_edge_is_noop_when_undirected() {
        let mut graph = Graph::new(GraphKind::Undirected);
        let e = graph.add_edge("A", "B", ALLOW).unwrap();
        assert_eq!(graph.reverse_edge(e), Ok(false));
        assert_eq!(graph.edge_names(e), Some(("A", "B")));
    }

    #[test]
    fn test_degrees_follow_edge_mutations() {
        let mut graph = Graph::new(GraphKind::Undirected);
        let ab = graph.add_edge("A", "B", ALLOW).unwrap();
        graph.add_edge("A", "C", ALLOW).unwrap();
        graph.add_edge("A", "A", ALLOW).unwrap();
        let degree = |g: &Graph, name| g.vertex_by_name(name).map(Vertex::degree);
        assert_eq!(degree(&graph, "A"), Some(4));
        assert_eq!(degree(&graph, "B"), Some(1));

        graph.remove_edge(ab);
        assert_eq!(degree(&graph, "A"), Some(3));
        assert_eq!(degree(&graph, "B"), Some(0));
    }

    #[test]
    fn test_clear_never_reuses_ids() {
        let mut graph = Graph::new(GraphKind::Directed);
        let e = graph.add_edge("A", "B", ALLOW).unwrap();
        let a = graph.vertex_id("A").unwrap();
        graph.clear();
        assert!(graph.is_empty());
        assert_eq!(graph.num_edges(), 0);

        let e2 = graph.add_edge("A", "B", ALLOW).unwrap();
        assert_ne!(e, e2);
        assert_ne!(graph.vertex_id("A"), Some(a));
        assert!(graph.edge(e).is_none());
    }

    #[test]
    fn test_ids_from_other_graphs_are_unknown() {
        let mut ours = Graph::new(GraphKind::Directed);
        let mut theirs = Graph::new(GraphKind::Directed);
        ours.add_vertex(origin());
        let foreign = theirs.add_vertex(origin());
        assert!(ours.vertex(foreign).is_none());
        assert!(ours.delete_vertex(foreign).is_none());
        assert_eq!(ours.num_vertices(), 1);
    }

    #[test]
    fn test_clones_share_ids() {
        let mut graph = Graph::new(GraphKind::Directed);
        let a = graph.add_vertex(origin());
        let mut next = graph.clone();
        next.rename_vertex(a, "Q").unwrap();
        assert_eq!(graph.name_of(a), Some("A"));
        assert_eq!(next.name_of(a), Some("Q"));
    }

    #[test]
    fn test_move_vertex() {
        let mut graph = Graph::new(GraphKind::Directed);
        let a = graph.add_vertex(origin());
        assert!(graph.move_vertex(a, Position::new(5.0, 6.0)));
        assert_eq!(graph.vertex(a).map(Vertex::position), Some(Position::new(5.0, 6.0)));
        graph.delete_vertex(a);
        assert!(!graph.move_vertex(a, origin()));
    }

    #[test]
    fn test_snapshot_and_find_cycle() {
        let mut graph = Graph::new(GraphKind::Directed);
        graph.add_edge("A", "B", ALLOW).unwrap();
        graph.add_edge("B", "C", ALLOW).unwrap();
        assert!(graph.find_cycle().is_empty());
        let e = graph.add_edge("C", "A", ALLOW).unwrap();
        assert_eq!(graph.find_cycle().names(), ["A", "B", "C"]);
        graph.reverse_edge(e).unwrap();
        assert!(graph.find_cycle().is_empty());
    }
}
