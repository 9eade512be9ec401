//! Weighted undirected graph over a fixed node set
//!
//! The adjacency matrix is stored row-major with `Option<u64>` cells;
//! `None` means "no edge". Every edge write updates both `(i, j)` and
//! `(j, i)`, so the matrix is symmetric at all times. Algorithms are
//! split per operation:
//! - connectivity testing (iterative depth-first traversal)
//! - minimum spanning tree (Prim)
//! - single-source shortest paths (Dijkstra)
//! - triangle-inequality checking and metric closure (Floyd-Warshall)
//! - traveling-salesman tour approximation (nearest neighbor)

pub mod connectivity;
pub mod metric;
pub mod mst;
pub mod parse;
pub mod shortest_path;
pub mod tour;

pub use metric::DisconnectedGraph;
pub use mst::{SpanningTree, TreeEdge};
pub use shortest_path::{NodePath, ShortestPaths};
pub use tour::Tour;

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::error::{Result, RondoError};

/// A weighted undirected graph with a fixed node count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    node_count: usize,
    /// Row-major adjacency matrix, `node_count * node_count` cells
    cells: Vec<Option<u64>>,
}

impl Graph {
    /// Create a graph with `node_count` nodes and no edges.
    pub fn new(node_count: usize) -> Self {
        Self {
            node_count,
            cells: vec![None; node_count * node_count],
        }
    }

    /// Create a graph from an edge list. Endpoints are validated against
    /// `node_count`; duplicate edges keep the last weight given.
    pub fn from_edges(node_count: usize, edges: &[(usize, usize, u64)]) -> Result<Self> {
        let mut graph = Self::new(node_count);
        for &(i, j, weight) in edges {
            let out_of_range = if i >= node_count {
                Some(i)
            } else if j >= node_count {
                Some(j)
            } else {
                None
            };
            if let Some(node) = out_of_range {
                return Err(RondoError::NodeOutOfRange { node, node_count });
            }
            graph.set_cell(i, j, Some(weight));
        }
        Ok(graph)
    }

    /// Parse a graph from its adjacency-list document form.
    pub fn parse(text: &str) -> Result<Self> {
        parse::parse_document(text)
    }

    /// Load a graph from a file containing an adjacency-list document.
    #[tracing::instrument(skip(path), fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                RondoError::GraphNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                RondoError::Io(e)
            }
        })?;
        Self::parse(&text)
    }

    /// Number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of distinct edges. A self-loop counts once.
    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// Weight of the edge between `i` and `j`, or `None` when absent.
    pub fn weight(&self, i: usize, j: usize) -> Result<Option<u64>> {
        for node in [i, j] {
            if node >= self.node_count {
                return Err(RondoError::NodeOutOfRange {
                    node,
                    node_count: self.node_count,
                });
            }
        }
        Ok(self.cell(i, j))
    }

    /// Iterate the neighbors of `node` in ascending index order, with
    /// edge weights. Includes `node` itself when a self-loop exists.
    /// `node` must be in range.
    pub fn neighbors(&self, node: usize) -> impl Iterator<Item = (usize, u64)> + '_ {
        (0..self.node_count).filter_map(move |other| self.cell(node, other).map(|w| (other, w)))
    }

    /// Iterate every edge once as `(i, j, weight)` with `i <= j`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, u64)> + '_ {
        (0..self.node_count).flat_map(move |i| {
            (i..self.node_count).filter_map(move |j| self.cell(i, j).map(|w| (i, j, w)))
        })
    }

    /// Sum of all edge weights, each edge counted once.
    pub fn total_weight(&self) -> u64 {
        self.edges().map(|(_, _, w)| w).sum()
    }

    /// Render the graph in the adjacency-list document form accepted by
    /// [`Graph::parse`]: the node count, then one line per node listing
    /// its edge count followed by `target weight` pairs.
    pub fn to_document(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.node_count);
        for i in 0..self.node_count {
            let row: Vec<(usize, u64)> = self.neighbors(i).collect();
            let _ = write!(out, "{}", row.len());
            for (target, weight) in row {
                let _ = write!(out, " {} {}", target, weight);
            }
            out.push('\n');
        }
        out
    }

    #[inline]
    fn index(&self, i: usize, j: usize) -> usize {
        debug_assert!(i < self.node_count && j < self.node_count);
        i * self.node_count + j
    }

    /// Read one matrix cell. Callers guarantee the indices are in range.
    pub(crate) fn cell(&self, i: usize, j: usize) -> Option<u64> {
        self.cells[self.index(i, j)]
    }

    /// Write one logical edge, keeping the matrix symmetric.
    pub(crate) fn set_cell(&mut self, i: usize, j: usize, weight: Option<u64>) {
        let forward = self.index(i, j);
        self.cells[forward] = weight;
        let backward = self.index(j, i);
        self.cells[backward] = weight;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_graph_has_no_edges() {
        let graph = Graph::new(4);
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 0);
        for i in 0..4 {
            for j in 0..4 {
                assert_eq!(graph.weight(i, j).unwrap(), None);
            }
        }
    }

    #[test]
    fn test_from_edges_is_symmetric() {
        let graph = Graph::from_edges(3, &[(0, 1, 5), (1, 2, 7)]).unwrap();
        assert_eq!(graph.weight(0, 1).unwrap(), Some(5));
        assert_eq!(graph.weight(1, 0).unwrap(), Some(5));
        assert_eq!(graph.weight(1, 2).unwrap(), Some(7));
        assert_eq!(graph.weight(2, 1).unwrap(), Some(7));
        assert_eq!(graph.weight(0, 2).unwrap(), None);
    }

    #[test]
    fn test_from_edges_last_write_wins() {
        let graph = Graph::from_edges(2, &[(0, 1, 5), (1, 0, 9)]).unwrap();
        assert_eq!(graph.weight(0, 1).unwrap(), Some(9));
        assert_eq!(graph.weight(1, 0).unwrap(), Some(9));
    }

    #[test]
    fn test_from_edges_rejects_out_of_range() {
        let err = Graph::from_edges(3, &[(0, 3, 1)]).unwrap_err();
        assert!(matches!(
            err,
            RondoError::NodeOutOfRange {
                node: 3,
                node_count: 3
            }
        ));
    }

    #[test]
    fn test_weight_rejects_out_of_range() {
        let graph = Graph::new(2);
        let err = graph.weight(0, 5).unwrap_err();
        assert!(matches!(err, RondoError::NodeOutOfRange { node: 5, .. }));
    }

    #[test]
    fn test_neighbors_ascending_order() {
        let graph = Graph::from_edges(4, &[(2, 3, 4), (2, 0, 1), (2, 1, 2)]).unwrap();
        let neighbors: Vec<(usize, u64)> = graph.neighbors(2).collect();
        assert_eq!(neighbors, vec![(0, 1), (1, 2), (3, 4)]);
    }

    #[test]
    fn test_edges_counts_each_once() {
        let graph = Graph::from_edges(3, &[(0, 1, 5), (1, 2, 7), (0, 2, 3)]).unwrap();
        let edges: Vec<(usize, usize, u64)> = graph.edges().collect();
        assert_eq!(edges, vec![(0, 1, 5), (0, 2, 3), (1, 2, 7)]);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.total_weight(), 15);
    }

    #[test]
    fn test_self_loop_counts_once() {
        let graph = Graph::from_edges(2, &[(0, 0, 2), (0, 1, 1)]).unwrap();
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.total_weight(), 3);
        let neighbors: Vec<(usize, u64)> = graph.neighbors(0).collect();
        assert_eq!(neighbors, vec![(0, 2), (1, 1)]);
    }

    #[test]
    fn test_to_document_round_trip() {
        let graph = Graph::from_edges(4, &[(0, 1, 1), (0, 3, 10), (1, 2, 1), (2, 3, 3)]).unwrap();
        let document = graph.to_document();
        let reparsed = Graph::parse(&document).unwrap();
        assert_eq!(reparsed, graph);
    }

    #[test]
    fn test_to_document_empty_graph() {
        assert_eq!(Graph::new(0).to_document(), "0\n");
        assert_eq!(Graph::new(2).to_document(), "2\n0\n0\n");
    }
}
