//! Single-source shortest paths via Dijkstra's algorithm

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Write as _;

use serde::Serialize;

use crate::error::{Result, RondoError};
use crate::graph::Graph;

/// Heap entry ordered by accumulated distance, then node index, so
/// equal distances settle at the lowest index first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct HeapEntry {
    distance: u64,
    node: usize,
}

/// Shortest-path answer for a single target node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodePath {
    pub node: usize,
    /// Total distance from the start node, `None` when unreachable
    pub distance: Option<u64>,
    /// Node sequence from the start to this node; just `[node]` when
    /// unreachable
    pub route: Vec<usize>,
}

impl NodePath {
    /// Render the route as `0 -> 1 -> 2`.
    pub fn route_display(&self) -> String {
        let mut out = String::new();
        for (i, node) in self.route.iter().enumerate() {
            if i > 0 {
                out.push_str(" -> ");
            }
            let _ = write!(out, "{}", node);
        }
        out
    }
}

/// Result of [`Graph::shortest_paths`]: one [`NodePath`] per node, in
/// node order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPaths {
    pub start: usize,
    pub paths: Vec<NodePath>,
}

impl Graph {
    /// Compute shortest paths from `start` to every node. Unreachable
    /// nodes report no distance and a single-node route. Fails when
    /// `start` is not a node of the graph.
    #[tracing::instrument(skip(self), fields(nodes = self.node_count()))]
    pub fn shortest_paths(&self, start: usize) -> Result<ShortestPaths> {
        let n = self.node_count();
        if start >= n {
            return Err(RondoError::NodeOutOfRange {
                node: start,
                node_count: n,
            });
        }

        let mut distance = vec![None::<u64>; n];
        let mut previous = vec![None::<usize>; n];
        let mut settled = vec![false; n];
        let mut heap = BinaryHeap::new();

        distance[start] = Some(0);
        heap.push(Reverse(HeapEntry {
            distance: 0,
            node: start,
        }));

        while let Some(Reverse(entry)) = heap.pop() {
            if settled[entry.node] {
                continue;
            }
            settled[entry.node] = true;

            for (next, weight) in self.neighbors(entry.node) {
                if settled[next] {
                    continue;
                }
                let candidate = entry.distance + weight;
                if distance[next].is_none_or(|current| candidate < current) {
                    distance[next] = Some(candidate);
                    previous[next] = Some(entry.node);
                    heap.push(Reverse(HeapEntry {
                        distance: candidate,
                        node: next,
                    }));
                }
            }
        }

        let paths = (0..n)
            .map(|node| NodePath {
                node,
                distance: distance[node],
                route: walk_back(node, &previous),
            })
            .collect();

        tracing::debug!(nodes = n, start, "computed shortest paths");
        Ok(ShortestPaths { start, paths })
    }
}

/// Rebuild the route to `node` by walking predecessor links back to
/// the start, then reversing.
fn walk_back(node: usize, previous: &[Option<usize>]) -> Vec<usize> {
    let mut route = vec![node];
    let mut at = node;
    while let Some(prev) = previous[at] {
        route.push(prev);
        at = prev;
    }
    route.reverse();
    route
}
