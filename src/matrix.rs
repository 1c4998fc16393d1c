use std::{collections::HashMap, fmt};

use bitvec::{slice::BitSlice, vec::BitVec};

use crate::cycle::Snapshot;

/// 0/1 adjacency matrix of a graph, rows and columns in vertex order.
///
/// Entries live in one bitvec indexed by `row * len + col`. Undirected
/// graphs are stored mirrored, so `get(i, j) == get(j, i)`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    labels: Vec<String>,
    bits: BitVec,
}

impl AdjacencyMatrix {
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        let labels = snapshot.vertices.clone();
        let len = labels.len();
        let mut index: HashMap<&str, usize> = HashMap::with_capacity(len);
        for (i, name) in labels.iter().enumerate() {
            index.entry(name.as_str()).or_insert(i);
        }

        let mut bits = BitVec::with_capacity(len * len);
        bits.resize(len * len, false);
        for (source, target) in &snapshot.edges {
            let (Some(&row), Some(&col)) = (index.get(source.as_str()), index.get(target.as_str()))
            else {
                continue;
            };
            bits.set(row * len + col, true);
            if !snapshot.kind.is_directed() {
                bits.set(col * len + row, true);
            }
        }
        Self { labels, bits }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Whether an edge runs from vertex `row` to vertex `col`. Out of range
    /// indices read as false.
    pub fn get(&self, row: usize, col: usize) -> bool {
        if row >= self.len() || col >= self.len() {
            return false;
        }
        self.bits[row * self.len() + col]
    }

    pub fn row(&self, row: usize) -> Option<&BitSlice> {
        let len = self.len();
        (row < len).then(|| &self.bits[row * len..(row + 1) * len])
    }

    /// Number of set entries.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones()
    }
}

impl fmt::Display for AdjacencyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "Add nodes and edges to see the adjacency matrix.");
        }
        let width = self
            .labels
            .iter()
            .map(|label| label.chars().count())
            .max()
            .unwrap_or(1);

        write!(f, "{:width$}", "")?;
        for label in &self.labels {
            write!(f, " {label:>width$}")?;
        }
        writeln!(f)?;
        for (i, label) in self.labels.iter().enumerate() {
            write!(f, "{label:>width$}")?;
            for bit in self.row(i).into_iter().flatten() {
                write!(f, " {:>width$}", u8::from(*bit))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
