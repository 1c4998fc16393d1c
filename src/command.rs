use std::str::FromStr;

use crate::error::GraphError;

/// A typed `source target` edge request, such as `A B`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeInput {
    pub source: String,
    pub target: String,
}

impl EdgeInput {
    /// Parses exactly two whitespace-separated names.
    pub fn parse(text: &str) -> Result<Self, GraphError> {
        let mut tokens = text.split_whitespace();
        match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(source), Some(target), None) => Ok(Self {
                source: source.to_string(),
                target: target.to_string(),
            }),
            _ => Err(GraphError::MalformedEdgeInput(text.trim().to_string())),
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

impl FromStr for EdgeInput {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
