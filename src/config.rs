use std::ops::Range;

use rand::Rng;

use crate::{kind::GraphKind, vertex::Position};

/// Whether an edge-creating call may join a vertex to itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SelfLoopPolicy {
    #[default]
    Allow,
    Reject,
}

impl SelfLoopPolicy {
    pub fn allows_self_loops(&self) -> bool {
        matches!(self, SelfLoopPolicy::Allow)
    }
}

/// The rectangle vertices created implicitly by an edge are dropped into.
#[derive(Clone, Debug, PartialEq)]
pub struct SpawnArea {
    pub x: Range<f64>,
    pub y: Range<f64>,
}

impl Default for SpawnArea {
    fn default() -> Self {
        Self {
            x: 100.0..500.0,
            y: 100.0..400.0,
        }
    }
}

impl SpawnArea {
    /// A uniformly random point of the area. An empty range yields its start.
    pub fn random_position<R: Rng + ?Sized>(&self, rng: &mut R) -> Position {
        Position::new(sample(rng, &self.x), sample(rng, &self.y))
    }
}

fn sample<R: Rng + ?Sized>(rng: &mut R, range: &Range<f64>) -> f64 {
    if range.is_empty() {
        range.start
    } else {
        rng.gen_range(range.clone())
    }
}

/// Settings fixed when a graph or session is created.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphConfig {
    pub kind: GraphKind,
    pub spawn_area: SpawnArea,
    /// Policy for edges drawn by clicking one vertex and then another.
    pub canvas_self_loops: SelfLoopPolicy,
    /// Policy for edges typed as `source target` text.
    pub manual_self_loops: SelfLoopPolicy,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self::new(GraphKind::default())
    }
}

impl GraphConfig {
    pub fn new(kind: GraphKind) -> Self {
        Self {
            kind,
            spawn_area: SpawnArea::default(),
            canvas_self_loops: SelfLoopPolicy::Allow,
            manual_self_loops: SelfLoopPolicy::Reject,
        }
    }

    pub fn with_spawn_area(mut self, spawn_area: SpawnArea) -> Self {
        self.spawn_area = spawn_area;
        self
    }

    pub fn with_canvas_self_loops(mut self, policy: SelfLoopPolicy) -> Self {
        self.canvas_self_loops = policy;
        self
    }

    pub fn with_manual_self_loops(mut self, policy: SelfLoopPolicy) -> Self {
        self.manual_self_loops = policy;
        self
    }
}
