//! Minimum spanning tree via Prim's algorithm

use std::fmt::Write as _;

use serde::Serialize;

use crate::error::{Result, RondoError};
use crate::graph::Graph;

const OPERATION: &str = "minimum spanning tree";

/// One edge chosen for a spanning tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TreeEdge {
    pub parent: usize,
    pub child: usize,
    pub weight: u64,
}

/// Result of [`Graph::minimum_spanning_tree`]: a rooted tree over the
/// full node set, listed child-ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpanningTree {
    pub node_count: usize,
    pub edges: Vec<TreeEdge>,
    pub total_weight: u64,
}

impl SpanningTree {
    /// Render the tree in the adjacency-list document form, so the
    /// output can be loaded back as a graph.
    pub fn to_document(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.node_count);
        for node in 0..self.node_count {
            let children: Vec<&TreeEdge> =
                self.edges.iter().filter(|e| e.parent == node).collect();
            let _ = write!(out, "{}", children.len());
            for edge in children {
                let _ = write!(out, " {} {}", edge.child, edge.weight);
            }
            out.push('\n');
        }
        out
    }
}

impl Graph {
    /// Compute a minimum spanning tree rooted at node 0, growing the
    /// tree one cheapest fringe edge at a time. Equal-weight candidates
    /// resolve to the lowest node index, so the result is deterministic.
    /// Fails when the graph is not connected.
    #[tracing::instrument(skip(self), fields(nodes = self.node_count()))]
    pub fn minimum_spanning_tree(&self) -> Result<SpanningTree> {
        if !self.is_connected() {
            return Err(RondoError::NotConnected {
                operation: OPERATION,
            });
        }

        let n = self.node_count();
        let mut cheapest = vec![None::<u64>; n];
        let mut parent = vec![None::<usize>; n];
        let mut in_tree = vec![false; n];
        let mut edges = Vec::with_capacity(n.saturating_sub(1));

        if n > 0 {
            cheapest[0] = Some(0);
        }

        for _ in 0..n {
            let Some((node, weight)) = pick_fringe(&cheapest, &in_tree) else {
                return Err(RondoError::NotConnected {
                    operation: OPERATION,
                });
            };
            in_tree[node] = true;
            if let Some(from) = parent[node] {
                edges.push(TreeEdge {
                    parent: from,
                    child: node,
                    weight,
                });
            }

            for (next, weight) in self.neighbors(node) {
                if in_tree[next] {
                    continue;
                }
                if cheapest[next].is_none_or(|current| weight < current) {
                    cheapest[next] = Some(weight);
                    parent[next] = Some(node);
                }
            }
        }

        edges.sort_by_key(|edge| edge.child);
        let total_weight = edges.iter().map(|edge| edge.weight).sum();

        tracing::debug!(nodes = n, total_weight, "computed spanning tree");
        Ok(SpanningTree {
            node_count: n,
            edges,
            total_weight,
        })
    }
}

/// Cheapest node outside the tree, lowest index on ties.
fn pick_fringe(cheapest: &[Option<u64>], in_tree: &[bool]) -> Option<(usize, u64)> {
    let mut best = None;
    for (node, weight) in cheapest.iter().enumerate() {
        if in_tree[node] {
            continue;
        }
        let Some(weight) = *weight else { continue };
        match best {
            Some((_, current)) if weight >= current => {}
            _ => best = Some((node, weight)),
        }
    }
    best
}
