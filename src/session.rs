//! An editing session: the current graph plus what the user has selected and
//! which cycle is highlighted.
//!
//! Every editing call reports back with a [`Notice`] meant to be shown to the
//! user as is. Mutations run against a copy of the graph and the copy replaces
//! the current graph only when the operation succeeds, so a failed call never
//! leaves a partial change behind.

use std::fmt;

use crate::{
    command::EdgeInput,
    config::GraphConfig,
    cycle::Cycle,
    error::GraphError,
    graph::Graph,
    id::{EdgeId, VertexId},
    kind::GraphKind,
    vertex::Position,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NoticeLevel {
    Success,
    Info,
    Error,
}

/// A user-facing outcome message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, message)
    }

    fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        let notice = Self {
            level,
            message: message.into(),
        };
        tracing::debug!(?level, text = %notice.message, "notice");
        notice
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

impl From<GraphError> for Notice {
    fn from(error: GraphError) -> Self {
        Notice::error(error.to_string())
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.level {
            NoticeLevel::Success => "ok",
            NoticeLevel::Info => "info",
            NoticeLevel::Error => "error",
        };
        write!(f, "[{tag}] {}", self.message)
    }
}

/// The single selected item. Selecting a vertex drops an edge selection and
/// vice versa.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Selection {
    Vertex(VertexId),
    Edge(EdgeId),
}

#[derive(Clone, Debug, Default)]
pub struct Session {
    graph: Graph,
    selection: Option<Selection>,
    /// Vertices of the last detected cycle, in cycle order.
    highlight: Vec<VertexId>,
}

impl Session {
    pub fn new(kind: GraphKind) -> Self {
        Self::with_config(GraphConfig::new(kind))
    }

    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            graph: Graph::with_config(config),
            selection: None,
            highlight: Vec::new(),
        }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn kind(&self) -> GraphKind {
        self.graph.kind()
    }

    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    /// The cycle found by the last [`detect_cycles`](Self::detect_cycles),
    /// under the vertices' current names. Deleted vertices drop out.
    pub fn highlight(&self) -> Cycle {
        Cycle::new(
            self.highlight
                .iter()
                .filter_map(|&id| self.graph.name_of(id))
                .map(str::to_string)
                .collect(),
        )
    }

    /// Runs `op` on a copy of the graph and keeps the copy if `op` succeeds.
    fn commit<T>(
        &mut self,
        op: impl FnOnce(&mut Graph) -> Result<T, GraphError>,
    ) -> Result<T, GraphError> {
        let mut next = self.graph.clone();
        let value = op(&mut next)?;
        self.graph = next;
        self.prune_selection();
        Ok(value)
    }

    fn prune_selection(&mut self) {
        let alive = match self.selection {
            Some(Selection::Vertex(id)) => self.graph.vertex(id).is_some(),
            Some(Selection::Edge(id)) => self.graph.edge(id).is_some(),
            None => true,
        };
        if !alive {
            self.selection = None;
        }
    }

    // Vertices

    pub fn create_vertex_at(&mut self, position: Position) -> Notice {
        let created = self.commit(|graph| {
            let id = graph.add_vertex(position);
            Ok(graph.name_of(id).unwrap_or_default().to_string())
        });
        match created {
            Ok(name) => Notice::success(format!("Node \"{name}\" created!")),
            Err(err) => err.into(),
        }
    }

    pub fn create_named_vertex(&mut self, name: &str, position: Position) -> Notice {
        match self.commit(|graph| graph.add_named_vertex(name, position)) {
            Ok(_) => Notice::success(format!("Node \"{name}\" created!")),
            Err(err) => err.into(),
        }
    }

    /// Selects a vertex. Returns false, leaving the selection alone, if there
    /// is no such vertex.
    pub fn select_vertex(&mut self, id: VertexId) -> bool {
        if self.graph.vertex(id).is_none() {
            return false;
        }
        self.selection = Some(Selection::Vertex(id));
        true
    }

    pub fn select_edge(&mut self, id: EdgeId) -> bool {
        if self.graph.edge(id).is_none() {
            return false;
        }
        self.selection = Some(Selection::Edge(id));
        true
    }

    pub fn deselect(&mut self) {
        self.selection = None;
    }

    pub fn rename_vertex(&mut self, id: VertexId, name: &str) -> Notice {
        match self.commit(|graph| graph.rename_vertex(id, name)) {
            Ok(()) => Notice::success(format!("Node renamed to \"{name}\"")),
            Err(err) => err.into(),
        }
    }

    /// Deletes a vertex and its edges. A successful delete clears the
    /// selection, whatever was selected.
    pub fn delete_vertex(&mut self, id: VertexId) -> Notice {
        match self.commit(|graph| Ok(graph.delete_vertex(id))) {
            Ok(Some(vertex)) => {
                self.selection = None;
                Notice::success(format!("Node \"{}\" deleted!", vertex.name()))
            }
            Ok(None) => Notice::info("Node not found."),
            Err(err) => err.into(),
        }
    }

    pub fn move_vertex(&mut self, id: VertexId, position: Position) -> bool {
        self.graph.move_vertex(id, position)
    }

    // Edges

    /// Joins two existing vertices, as when clicking one and then the other.
    pub fn connect(&mut self, source: VertexId, target: VertexId) -> Notice {
        let label = match (self.graph.name_of(source), self.graph.name_of(target)) {
            (Some(from), Some(to)) => edge_label(from, to),
            (None, _) => return GraphError::UnknownVertex(source).into(),
            (_, None) => return GraphError::UnknownVertex(target).into(),
        };
        let policy = self.graph.config().canvas_self_loops;
        match self.commit(|graph| graph.connect(source, target, policy)) {
            Ok(_) => Notice::success(format!("Edge created: {label}")),
            Err(err) => err.into(),
        }
    }

    /// Adds an edge typed as `source target`, creating missing vertices.
    pub fn create_edge_from_input(&mut self, text: &str) -> Notice {
        let input = match EdgeInput::parse(text) {
            Ok(input) => input,
            Err(err) => return err.into(),
        };
        let policy = self.graph.config().manual_self_loops;
        match self.commit(|graph| graph.add_edge(&input.source, &input.target, policy)) {
            Ok(_) => Notice::success(format!(
                "Edge created: {}",
                edge_label(&input.source, &input.target)
            )),
            Err(err) => err.into(),
        }
    }

    /// Removes the edge typed as `source target`.
    pub fn delete_edge_from_input(&mut self, text: &str) -> Notice {
        let input = match EdgeInput::parse(text) {
            Ok(input) => input,
            Err(err) => return err.into(),
        };
        match self.commit(|graph| graph.remove_edge_between(&input.source, &input.target)) {
            Ok(_) => {
                self.selection = None;
                Notice::success("Edge deleted!")
            }
            Err(err) => err.into(),
        }
    }

    pub fn delete_edge(&mut self, id: EdgeId) -> Notice {
        match self.commit(|graph| Ok(graph.remove_edge(id))) {
            Ok(Some(_)) => {
                self.selection = None;
                Notice::success("Edge deleted!")
            }
            Ok(None) => Notice::info("Edge not found."),
            Err(err) => err.into(),
        }
    }

    pub fn reverse_edge(&mut self, id: EdgeId) -> Notice {
        if !self.graph.is_directed() {
            return Notice::info("Edges in an undirected graph have no direction.");
        }
        match self.commit(|graph| graph.reverse_edge(id)) {
            Ok(true) => Notice::success("Edge direction flipped!"),
            Ok(false) => Notice::info("Edge not found."),
            Err(err) => err.into(),
        }
    }

    // Whole graph

    /// Looks for a cycle and highlights its vertices. The highlight is kept
    /// by vertex id, so it follows renames and never marks a later vertex
    /// that happens to reuse a deleted vertex's name.
    pub fn detect_cycles(&mut self) -> Notice {
        let cycle = self.graph.find_cycle();
        self.highlight = cycle
            .names()
            .iter()
            .filter_map(|name| self.graph.vertex_id(name))
            .collect();
        if cycle.is_empty() {
            Notice::info("No cycles detected.")
        } else {
            Notice::success(format!("Cycle detected: {cycle}"))
        }
    }

    pub fn clear(&mut self) -> Notice {
        self.graph.clear();
        self.selection = None;
        self.highlight.clear();
        Notice::success("Graph cleared!")
    }

    /// Starts over with an empty graph of `kind`. Other settings carry over.
    pub fn change_kind(&mut self, kind: GraphKind) -> Notice {
        let config = GraphConfig {
            kind,
            ..self.graph.config().clone()
        };
        *self = Self::with_config(config);
        Notice::info(format!("Started a new {kind} graph."))
    }

    pub fn is_vertex_highlighted(&self, id: VertexId) -> bool {
        self.graph.vertex(id).is_some() && self.highlight.contains(&id)
    }

    /// True when both endpoints of the edge lie on the highlighted cycle.
    pub fn is_edge_highlighted(&self, id: EdgeId) -> bool {
        self.graph.edge(id).is_some_and(|edge| {
            self.is_vertex_highlighted(edge.source()) && self.is_vertex_highlighted(edge.target())
        })
    }
}

fn edge_label(source: &str, target: &str) -> String {
    format!("{source} → {target}")
}
