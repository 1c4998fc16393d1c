use std::{fmt, str::FromStr};

/// Whether the edges of a graph have a direction.
///
/// The kind is fixed for the lifetime of a [`Graph`](crate::Graph); switching
/// kinds means starting a new graph.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum GraphKind {
    #[default]
    Directed,
    Undirected,
}

impl GraphKind {
    pub fn is_directed(&self) -> bool {
        matches!(self, GraphKind::Directed)
    }

    /// Returns true if an edge stored as `(source, target)` connects `a` to
    /// `b` under this kind's equality rule.
    pub fn connects<T: Eq>(&self, (source, target): (&T, &T), a: &T, b: &T) -> bool {
        (source == a && target == b) || (!self.is_directed() && source == b && target == a)
    }
}

impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphKind::Directed => f.write_str("directed"),
            GraphKind::Undirected => f.write_str("undirected"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown graph kind {0:?}, expected directed or undirected")]
pub struct UnknownGraphKind(pub String);

impl FromStr for GraphKind {
    type Err = UnknownGraphKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "directed" | "d" => Ok(GraphKind::Directed),
            "undirected" | "u" => Ok(GraphKind::Undirected),
            other => Err(UnknownGraphKind(other.to_string())),
        }
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for GraphKind {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        if bool::arbitrary(g) {
            GraphKind::Directed
        } else {
            GraphKind::Undirected
        }
    }
}
