//! Connectivity testing via depth-first traversal

use crate::graph::Graph;

impl Graph {
    /// True when every node is reachable from node 0. The empty graph
    /// is vacuously connected.
    pub fn is_connected(&self) -> bool {
        if self.node_count() == 0 {
            return true;
        }
        self.reachable_from(0).iter().all(|&seen| seen)
    }

    /// Depth-first reachability from `start`, returning one flag per
    /// node. Uses an explicit stack so deep graphs cannot overflow the
    /// call stack.
    pub(crate) fn reachable_from(&self, start: usize) -> Vec<bool> {
        let mut visited = vec![false; self.node_count()];
        let mut stack = vec![start];
        visited[start] = true;

        while let Some(node) = stack.pop() {
            for (next, _) in self.neighbors(node) {
                if !visited[next] {
                    visited[next] = true;
                    stack.push(next);
                }
            }
        }

        visited
    }
}
