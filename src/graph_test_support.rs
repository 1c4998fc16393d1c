use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use quickcheck::{Arbitrary, Gen};
use tracing::info_span;

use crate::config::SelfLoopPolicy;
use crate::cycle::{Cycle, Snapshot};
use crate::graph::Graph;
use crate::id::{EdgeId, VertexId};
use crate::kind::GraphKind;
use crate::tracing_support::init_tracing;
use crate::vertex::Position;

/// Names drawn by generated operations. The empty name and `XY` are invalid
/// and exercise the rejection paths.
const NAME_POOL: [&str; 10] = ["A", "B", "C", "D", "E", "F", "क", "42", "", "XY"];

/// One editing step against a graph. Indices pick an existing vertex or edge
/// modulo the current count.
#[derive(Debug, Clone)]
pub enum Op {
    AddVertex,
    AddNamedVertex(String),
    Rename(usize, String),
    DeleteVertex(usize),
    AddEdge(String, String, SelfLoopPolicy),
    RemoveEdge(usize),
    RemoveEdgeBetween(String, String),
    ReverseEdge(usize),
}

fn arbitrary_name(g: &mut Gen) -> String {
    g.choose(&NAME_POOL).copied().unwrap_or("A").to_string()
}

impl Arbitrary for Op {
    fn arbitrary(g: &mut Gen) -> Self {
        match u8::arbitrary(g) % 10 {
            0 => Op::AddVertex,
            1 => Op::AddNamedVertex(arbitrary_name(g)),
            2 => Op::Rename(usize::arbitrary(g), arbitrary_name(g)),
            3 => Op::DeleteVertex(usize::arbitrary(g)),
            4 => Op::RemoveEdge(usize::arbitrary(g)),
            5 => Op::RemoveEdgeBetween(arbitrary_name(g), arbitrary_name(g)),
            6 => Op::ReverseEdge(usize::arbitrary(g)),
            _ => {
                let policy = if bool::arbitrary(g) {
                    SelfLoopPolicy::Allow
                } else {
                    SelfLoopPolicy::Reject
                };
                Op::AddEdge(arbitrary_name(g), arbitrary_name(g), policy)
            }
        }
    }
}

impl Op {
    /// Applies the operation, ignoring whether it succeeded.
    pub fn apply(&self, graph: &mut Graph) {
        match self {
            Op::AddVertex => {
                graph.add_vertex(Position::default());
            }
            Op::AddNamedVertex(name) => {
                let _ = graph.add_named_vertex(name, Position::default());
            }
            Op::Rename(i, name) => {
                if let Some(id) = vertex_at(graph, *i) {
                    let _ = graph.rename_vertex(id, name);
                }
            }
            Op::DeleteVertex(i) => {
                if let Some(id) = vertex_at(graph, *i) {
                    graph.delete_vertex(id);
                }
            }
            Op::AddEdge(source, target, policy) => {
                let _ = graph.add_edge(source, target, *policy);
            }
            Op::RemoveEdge(i) => {
                if let Some(id) = edge_at(graph, *i) {
                    graph.remove_edge(id);
                }
            }
            Op::RemoveEdgeBetween(source, target) => {
                let _ = graph.remove_edge_between(source, target);
            }
            Op::ReverseEdge(i) => {
                if let Some(id) = edge_at(graph, *i) {
                    let _ = graph.reverse_edge(id);
                }
            }
        }
    }
}

fn vertex_at(graph: &Graph, i: usize) -> Option<VertexId> {
    let n = graph.num_vertices();
    graph.vertices().nth(i.checked_rem(n)?).map(|v| v.id())
}

fn edge_at(graph: &Graph, i: usize) -> Option<EdgeId> {
    let n = graph.num_edges();
    graph.edges().nth(i.checked_rem(n)?).map(|e| e.id())
}

/// A kind plus a sequence of operations to replay on an empty graph.
#[derive(Debug, Clone)]
pub struct ArbOps {
    pub kind: GraphKind,
    pub ops: Vec<Op>,
}

impl Arbitrary for ArbOps {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % 40;
        ArbOps {
            kind: GraphKind::arbitrary(g),
            ops: (0..len).map(|_| Op::arbitrary(g)).collect(),
        }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let kind = self.kind;
        Box::new(self.ops.shrink().map(move |ops| ArbOps { kind, ops }))
    }
}

impl ArbOps {
    pub fn build(&self) -> Graph {
        let mut graph = Graph::new(self.kind);
        for op in &self.ops {
            op.apply(&mut graph);
        }
        graph
    }
}

/// A graph reached by replaying arbitrary operations.
#[derive(Debug, Clone)]
pub struct ArbGraph {
    pub graph: Graph,
    pub ops: ArbOps,
}

impl Arbitrary for ArbGraph {
    fn arbitrary(g: &mut Gen) -> Self {
        let ops = ArbOps::arbitrary(g);
        let mut graph = ops.build();

        // Random operations rarely close cycles on their own.
        let extra_edges = usize::arbitrary(g) % 8;
        let n = graph.num_vertices();
        for _ in 0..extra_edges {
            if n == 0 {
                break;
            }
            let names: Vec<String> = graph.names().map(str::to_string).collect();
            let source = &names[usize::arbitrary(g) % n];
            let target = &names[usize::arbitrary(g) % n];
            let _ = graph.add_edge(source, target, SelfLoopPolicy::Allow);
        }

        ArbGraph { graph, ops }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.ops.shrink().map(|ops| ArbGraph {
            graph: ops.build(),
            ops,
        }))
    }
}

pub fn has_duplicates<T: Eq + Hash>(items: impl IntoIterator<Item = T>) -> bool {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item) {
            return true;
        }
    }
    false
}

/// Checks the internal consistency of a graph.
pub fn check_graph_consistency(graph: &Graph) {
    init_tracing("warn");
    let _span = info_span!("check_graph_consistency").entered();

    // Names are unique and resolve back to their vertex.
    assert!(!has_duplicates(graph.names()));
    for vertex in graph.vertices() {
        assert_eq!(graph.vertex_id(vertex.name()), Some(vertex.id()));
        assert_eq!(graph.vertex(vertex.id()), Some(vertex));
    }

    // Every edge joins two live vertices and no pair is joined twice.
    for edge in graph.edges() {
        assert!(graph.vertex(edge.source()).is_some());
        assert!(graph.vertex(edge.target()).is_some());
        assert_eq!(graph.edge(edge.id()), Some(edge));
    }
    assert!(!has_duplicates(
        graph.edges().map(|edge| edge.ends().key(graph.kind()))
    ));

    // Degrees count endpoints, self-loops twice.
    let mut degrees: HashMap<_, usize> = HashMap::new();
    for edge in graph.edges() {
        *degrees.entry(edge.source()).or_default() += 1;
        *degrees.entry(edge.target()).or_default() += 1;
    }
    for vertex in graph.vertices() {
        assert_eq!(
            vertex.degree(),
            degrees.get(&vertex.id()).copied().unwrap_or(0),
            "degree of {}",
            vertex.name()
        );
    }

    assert_eq!(graph.vertices().count(), graph.num_vertices());
    assert_eq!(graph.edges().count(), graph.num_edges());
    assert_eq!(graph.is_empty(), graph.num_vertices() == 0);
    assert!(graph.num_vertices() > 0 || graph.num_edges() == 0);
}

/// Whether `cycle` is a closed walk of distinct vertices along edges of
/// `snapshot`.
pub fn is_closed_walk(snapshot: &Snapshot, cycle: &Cycle) -> bool {
    let names: HashSet<&str> = snapshot.vertices.iter().map(String::as_str).collect();
    if cycle.names().iter().any(|name| !names.contains(name.as_str())) {
        return false;
    }
    if has_duplicates(cycle.names()) {
        return false;
    }
    if !snapshot.kind.is_directed() && cycle.len() == 2 {
        return false;
    }
    cycle.steps().all(|(from, to)| {
        snapshot
            .edges
            .iter()
            .any(|(s, t)| snapshot.kind.connects((s, t), &from.to_string(), &to.to_string()))
    })
}

/// Reference answer by a different method: Kahn's algorithm for directed
/// graphs, union-find for undirected ones. Assumes no parallel edges.
pub fn reference_has_cycle(snapshot: &Snapshot) -> bool {
    let index: HashMap<&str, usize> = snapshot
        .vertices
        .iter()
        .enumerate()
        .map(|(i, name)| (name.as_str(), i))
        .collect();
    let edges: Vec<(usize, usize)> = snapshot
        .edges
        .iter()
        .filter_map(|(s, t)| Some((*index.get(s.as_str())?, *index.get(t.as_str())?)))
        .collect();
    let n = snapshot.vertices.len();

    match snapshot.kind {
        GraphKind::Directed => {
            let mut in_degree = vec![0usize; n];
            let mut successors = vec![Vec::new(); n];
            for &(s, t) in &edges {
                in_degree[t] += 1;
                successors[s].push(t);
            }
            let mut ready: Vec<usize> = (0..n).filter(|&v| in_degree[v] == 0).collect();
            let mut emitted = 0;
            while let Some(v) = ready.pop() {
                emitted += 1;
                for &w in &successors[v] {
                    in_degree[w] -= 1;
                    if in_degree[w] == 0 {
                        ready.push(w);
                    }
                }
            }
            emitted < n
        }
        GraphKind::Undirected => {
            let mut parent: Vec<usize> = (0..n).collect();
            fn find(parent: &mut [usize], mut v: usize) -> usize {
                while parent[v] != v {
                    parent[v] = parent[parent[v]];
                    v = parent[v];
                }
                v
            }
            for &(s, t) in &edges {
                let (a, b) = (find(&mut parent, s), find(&mut parent, t));
                if a == b {
                    return true;
                }
                parent[a] = b;
            }
            false
        }
    }
}
