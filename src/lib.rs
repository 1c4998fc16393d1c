pub mod command;
pub mod config;
pub mod cycle;
pub mod edge_ends;
pub mod error;
pub mod graph;
pub mod graph_id;
pub mod id;
pub mod kind;
pub mod matrix;
pub mod naming;
pub mod session;
pub mod shade;
pub mod tracing_support;
pub mod vertex;

mod id_vec;

#[cfg(test)]
mod graph_test_support;

pub use command::EdgeInput;
pub use config::{GraphConfig, SelfLoopPolicy, SpawnArea};
pub use cycle::{Cycle, Snapshot, find_cycle, has_cycle};
pub use error::GraphError;
pub use graph::Graph;
pub use id::{EdgeId, VertexId};
pub use kind::GraphKind;
pub use matrix::AdjacencyMatrix;
pub use session::{Notice, NoticeLevel, Selection, Session};
pub use shade::DegreeShade;
pub use vertex::{Edge, Position, Vertex};
