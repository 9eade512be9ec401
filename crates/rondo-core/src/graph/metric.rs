//! Triangle-inequality checking and the metric closure transform

use std::fmt;

use crate::error::RondoError;
use crate::graph::Graph;

/// Error returned by [`Graph::into_metric_closure`] on a disconnected
/// graph. Hands the graph back unmodified so the caller keeps it.
#[derive(Debug)]
pub struct DisconnectedGraph(Graph);

impl DisconnectedGraph {
    /// Recover the untouched graph.
    pub fn into_graph(self) -> Graph {
        self.0
    }
}

impl fmt::Display for DisconnectedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "graph is not connected (required by metric closure)")
    }
}

impl std::error::Error for DisconnectedGraph {}

impl From<DisconnectedGraph> for RondoError {
    fn from(_: DisconnectedGraph) -> Self {
        RondoError::NotConnected {
            operation: "metric closure",
        }
    }
}

impl Graph {
    /// True when every ordered triple of nodes with all three edges
    /// present satisfies the triangle inequality
    /// `w(i, k) <= w(i, j) + w(j, k)`. Triples with a missing edge are
    /// skipped, so sparse graphs pass vacuously.
    pub fn is_metric(&self) -> bool {
        let n = self.node_count();
        for i in 0..n {
            for j in 0..n {
                for k in 0..n {
                    let (Some(ij), Some(jk), Some(ik)) =
                        (self.cell(i, j), self.cell(j, k), self.cell(i, k))
                    else {
                        continue;
                    };
                    if ik > ij + jk {
                        return false;
                    }
                }
            }
        }
        true
    }

    /// Consume the graph and produce its metric closure: every pair of
    /// nodes ends up joined by an edge weighing the shortest-path
    /// distance between them, computed Floyd-Warshall style in place.
    /// Self-loops appear too, weighing twice the node's lightest
    /// incident edge (out and straight back). The result is always
    /// metric, and closing it again changes nothing.
    ///
    /// A disconnected graph has pairs with no path at all, so the
    /// closure is undefined; the error returns the graph unmodified.
    #[tracing::instrument(skip(self), fields(nodes = self.node_count()))]
    pub fn into_metric_closure(mut self) -> Result<Graph, DisconnectedGraph> {
        if !self.is_connected() {
            return Err(DisconnectedGraph(self));
        }

        let n = self.node_count();
        for via in 0..n {
            for i in 0..n {
                for j in 0..n {
                    let (Some(left), Some(right)) = (self.cell(i, via), self.cell(via, j)) else {
                        continue;
                    };
                    let candidate = left + right;
                    if self.cell(i, j).is_none_or(|current| candidate < current) {
                        self.set_cell(i, j, Some(candidate));
                    }
                }
            }
        }

        tracing::debug!(nodes = n, edges = self.edge_count(), "closed graph");
        Ok(self)
    }
}
