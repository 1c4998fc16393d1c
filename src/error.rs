use thiserror::Error;

use crate::id::VertexId;

/// A rejected graph operation. Every variant is recoverable: the graph is
/// left exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error(
        "invalid name {0:?}: use A-Z, a-z, Devanagari characters (क-ज्ञ), or numbers below 1000"
    )]
    InvalidName(String),

    #[error("name {0:?} already exists, choose a unique name")]
    DuplicateName(String),

    #[error("edge already exists: {from} → {to}")]
    EdgeExists { from: String, to: String },

    #[error("self-loops are not allowed here: {0} → {0}")]
    SelfLoopRejected(String),

    #[error("edge not found: {from} → {to}")]
    EdgeNotFound { from: String, to: String },

    #[error("unknown vertex {0:?}")]
    UnknownVertex(VertexId),

    #[error("invalid edge input {0:?}, use: A B (source target)")]
    MalformedEdgeInput(String),
}
