//! Cycle detection over a name-resolved graph snapshot.
//!
//! [`find_cycle`] runs a depth-first search over an adjacency list built from
//! the edge list and returns the first cycle it meets as a [`Cycle`]: an
//! ordered list of vertex names in which every name is joined to the next,
//! and the last to the first, by an edge that can be walked in that
//! direction.
//!
//! - In a directed graph a vertex stays "on the path" while its descendants
//!   are explored. Meeting an edge into a vertex on the path closes a cycle.
//! - In an undirected graph every edge is walkable both ways. Meeting a
//!   visited neighbour other than the vertex we arrived from closes a cycle.
//!
//! In both cases a self-loop is a cycle of one vertex. Roots are tried in
//! snapshot order, so the answer is deterministic for a given snapshot.
//!
//! The search is iterative: one frame per vertex on the path holds a cursor
//! into its neighbour list, and a single path buffer grows and shrinks with
//! the frame stack. The cycle is read off the path buffer once, when found.

use std::{collections::HashMap, fmt};

use crate::kind::GraphKind;
use crate::tracing_support::info_span;

/// One concrete cycle, as vertex names in traversal order. Empty when the
/// graph has no cycle.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Cycle {
    names: Vec<String>,
}

impl Cycle {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn into_names(self) -> Vec<String> {
        self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Whether an edge between `a` and `b` should be drawn as part of the
    /// cycle: both of its endpoints lie on the cycle.
    pub fn highlights_edge(&self, a: &str, b: &str) -> bool {
        self.contains(a) && self.contains(b)
    }

    /// The steps of the cycle as `(from, to)` pairs, including the step from
    /// the last name back to the first.
    pub fn steps(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        let next = self.names.iter().cycle().skip(1);
        self.names
            .iter()
            .zip(next)
            .map(|(from, to)| (from.as_str(), to.as_str()))
    }
}

impl fmt::Display for Cycle {
    /// Renders `A → B → C → A`. An empty cycle renders as nothing.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(first) = self.names.first() else {
            return Ok(());
        };
        for name in &self.names {
            write!(f, "{name} → ")?;
        }
        f.write_str(first)
    }
}

/// An immutable view of a graph by vertex name, the detector's input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub kind: GraphKind,
    pub vertices: Vec<String>,
    pub edges: Vec<(String, String)>,
}

impl Snapshot {
    pub fn find_cycle(&self) -> Cycle {
        find_cycle(&self.vertices, &self.edges, self.kind)
    }
}

/// Finds one cycle in the graph described by `vertices` and `edges`.
///
/// Edges naming a vertex that is not in `vertices` are ignored. A name listed
/// twice in `vertices` counts once, at its first position.
pub fn find_cycle<S: AsRef<str>>(vertices: &[S], edges: &[(S, S)], kind: GraphKind) -> Cycle {
    let _span = info_span!("find_cycle", vertices = vertices.len(), edges = edges.len()).entered();

    let adjacency = Adjacency::build(vertices, edges, kind);
    let cycle = match search(&adjacency, kind) {
        Some(path) => Cycle::new(
            path.into_iter()
                .map(|v| adjacency.names[v].to_string())
                .collect(),
        ),
        None => Cycle::default(),
    };

    if cycle.is_empty() {
        tracing::debug!(%kind, "no cycle");
    } else {
        tracing::debug!(%kind, %cycle, "cycle found");
    }
    cycle
}

/// Returns true if the graph described by `vertices` and `edges` has a cycle.
pub fn has_cycle<S: AsRef<str>>(vertices: &[S], edges: &[(S, S)], kind: GraphKind) -> bool {
    !find_cycle(vertices, edges, kind).is_empty()
}

/// Neighbour lists over dense vertex indices.
struct Adjacency<'a> {
    names: Vec<&'a str>,
    neighbors: Vec<Vec<usize>>,
}

impl<'a> Adjacency<'a> {
    fn build<S: AsRef<str>>(vertices: &'a [S], edges: &'a [(S, S)], kind: GraphKind) -> Self {
        let mut index: HashMap<&'a str, usize> = HashMap::with_capacity(vertices.len());
        let mut names = Vec::with_capacity(vertices.len());
        for vertex in vertices {
            let name = vertex.as_ref();
            if !index.contains_key(name) {
                index.insert(name, names.len());
                names.push(name);
            }
        }

        let mut neighbors = vec![Vec::new(); names.len()];
        for (source, target) in edges {
            let (source, target) = (source.as_ref(), target.as_ref());
            let (Some(&s), Some(&t)) = (index.get(source), index.get(target)) else {
                tracing::trace!(from = source, to = target, "skipping edge with unknown endpoint");
                continue;
            };
            neighbors[s].push(t);
            if !kind.is_directed() {
                neighbors[t].push(s);
            }
        }

        Self { names, neighbors }
    }

    fn len(&self) -> usize {
        self.names.len()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mark {
    Unvisited,
    /// On the current path, at this position of the path buffer.
    OnPath(usize),
    Finished,
}

struct Frame {
    vertex: usize,
    parent: Option<usize>,
    next_neighbor: usize,
}

/// Returns the vertices of the first cycle found, in path order.
fn search(adjacency: &Adjacency<'_>, kind: GraphKind) -> Option<Vec<usize>> {
    let mut marks = vec![Mark::Unvisited; adjacency.len()];
    let mut path: Vec<usize> = Vec::new();
    let mut stack: Vec<Frame> = Vec::new();

    for root in 0..adjacency.len() {
        if marks[root] != Mark::Unvisited {
            continue;
        }
        marks[root] = Mark::OnPath(0);
        path.push(root);
        stack.push(Frame {
            vertex: root,
            parent: None,
            next_neighbor: 0,
        });

        while let Some(frame) = stack.last_mut() {
            let vertex = frame.vertex;
            let parent = frame.parent;
            let Some(&neighbor) = adjacency.neighbors[vertex].get(frame.next_neighbor) else {
                stack.pop();
                path.pop();
                marks[vertex] = Mark::Finished;
                continue;
            };
            frame.next_neighbor += 1;

            match marks[neighbor] {
                Mark::Unvisited => {
                    marks[neighbor] = Mark::OnPath(path.len());
                    path.push(neighbor);
                    stack.push(Frame {
                        vertex: neighbor,
                        parent: Some(vertex),
                        next_neighbor: 0,
                    });
                }
                Mark::OnPath(position) => {
                    // Undirected edges show up in both neighbour lists; the
                    // one leading back to the parent is the tree edge itself.
                    if kind.is_directed() || parent != Some(neighbor) {
                        return Some(path[position..].to_vec());
                    }
                }
                Mark::Finished => {}
            }
        }
    }

    None
}
