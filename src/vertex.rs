use crate::{
    edge_ends::EdgeEnds,
    id::{EdgeId, VertexId},
    shade::DegreeShade,
};

/// Where a vertex is drawn. Has no bearing on any graph algorithm.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Vertex {
    pub(crate) id: VertexId,
    pub(crate) name: String,
    pub(crate) position: Position,
    pub(crate) degree: usize,
}

impl Vertex {
    pub fn id(&self) -> VertexId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Number of edge endpoints at this vertex; a self-loop contributes two.
    pub fn degree(&self) -> usize {
        self.degree
    }

    pub fn shade(&self) -> DegreeShade {
        DegreeShade::for_degree(self.degree)
    }
}

/// An edge between two vertices, referenced by id. Use
/// [`Graph::edge_names`](crate::Graph::edge_names) to resolve the current
/// names of its endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    pub(crate) id: EdgeId,
    pub(crate) ends: EdgeEnds<VertexId>,
}

impl Edge {
    pub fn id(&self) -> EdgeId {
        self.id
    }

    pub fn ends(&self) -> &EdgeEnds<VertexId> {
        &self.ends
    }

    pub fn source(&self) -> VertexId {
        *self.ends.source()
    }

    pub fn target(&self) -> VertexId {
        *self.ends.target()
    }

    pub fn is_self_loop(&self) -> bool {
        self.ends.is_self_loop()
    }
}
