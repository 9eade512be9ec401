//! Traveling-salesman tour approximation via nearest neighbor

use std::fmt::Write as _;

use serde::Serialize;

use crate::error::{Result, RondoError};
use crate::graph::Graph;

const OPERATION: &str = "tour approximation";

/// Result of [`Graph::approximate_tsp`]: a closed walk that starts and
/// ends at node 0 and visits every node once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tour {
    /// Sum of every leg walked, including the closing leg back to 0
    pub length: u64,
    pub route: Vec<usize>,
}

impl Tour {
    /// Render the tour as `17: 0 -> 2 -> 1 -> 0`.
    pub fn display(&self) -> String {
        let mut out = format!("{}:", self.length);
        for (i, node) in self.route.iter().enumerate() {
            if i > 0 {
                out.push_str(" ->");
            }
            let _ = write!(out, " {}", node);
        }
        out
    }
}

impl Graph {
    /// True when the graph satisfies the classic TSP preconditions:
    /// connected and metric.
    pub fn has_traveling_salesman_problem(&self) -> bool {
        self.is_connected() && self.is_metric()
    }

    /// Approximate a traveling-salesman tour by walking to the nearest
    /// unvisited neighbor from node 0 until every node is visited, then
    /// returning to 0. Equal-weight candidates resolve to the lowest
    /// node index.
    ///
    /// The greedy walk only follows existing edges, so on graphs that
    /// are not complete it can strand itself: a node whose remaining
    /// neighbors are all visited fails with [`RondoError::TourStuck`],
    /// and a final node with no edge back to 0 fails with
    /// [`RondoError::TourNotClosed`]. Metric-closed graphs are
    /// complete, so closing first avoids both.
    #[tracing::instrument(skip(self), fields(nodes = self.node_count()))]
    pub fn approximate_tsp(&self) -> Result<Tour> {
        if !self.is_connected() {
            return Err(RondoError::NotConnected {
                operation: OPERATION,
            });
        }

        let n = self.node_count();
        if n == 0 {
            return Ok(Tour {
                length: 0,
                route: Vec::new(),
            });
        }
        if n == 1 {
            return Ok(Tour {
                length: 0,
                route: vec![0, 0],
            });
        }

        let mut visited = vec![false; n];
        let mut route = Vec::with_capacity(n + 1);
        let mut length = 0u64;
        let mut current = 0;
        visited[0] = true;
        route.push(0);

        for _ in 1..n {
            let Some((next, weight)) = self.nearest_unvisited(current, &visited) else {
                return Err(RondoError::TourStuck { node: current });
            };
            visited[next] = true;
            route.push(next);
            length += weight;
            current = next;
        }

        let Some(closing) = self.cell(current, 0) else {
            return Err(RondoError::TourNotClosed { node: current });
        };
        route.push(0);
        length += closing;

        tracing::debug!(nodes = n, length, "approximated tour");
        Ok(Tour { length, route })
    }

    /// Unvisited neighbor of `current` with the smallest edge weight,
    /// lowest index on ties.
    fn nearest_unvisited(&self, current: usize, visited: &[bool]) -> Option<(usize, u64)> {
        let mut nearest = None;
        for (candidate, weight) in self.neighbors(current) {
            if visited[candidate] {
                continue;
            }
            match nearest {
                Some((_, best)) if weight >= best => {}
                _ => nearest = Some((candidate, weight)),
            }
        }
        nearest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_triangle() -> Graph {
        Graph::from_edges(3, &[(0, 1, 1), (1, 2, 1), (0, 2, 1)]).unwrap()
    }

    #[test]
    fn test_has_tsp_requires_connected_and_metric() {
        assert!(complete_triangle().has_traveling_salesman_problem());

        let disconnected = Graph::from_edges(4, &[(0, 1, 1), (2, 3, 1)]).unwrap();
        assert!(!disconnected.has_traveling_salesman_problem());

        let non_metric = Graph::from_edges(3, &[(0, 1, 1), (1, 2, 1), (0, 2, 5)]).unwrap();
        assert!(!non_metric.has_traveling_salesman_problem());
    }

    #[test]
    fn test_tour_visits_every_node_once() {
        let graph = Graph::from_edges(
            4,
            &[
                (0, 1, 4),
                (0, 2, 1),
                (0, 3, 3),
                (1, 2, 2),
                (1, 3, 2),
                (2, 3, 5),
            ],
        )
        .unwrap();
        let tour = graph.approximate_tsp().unwrap();
        // Greedy walk: 0 -(1)-> 2 -(2)-> 1 -(2)-> 3 -(3)-> 0.
        assert_eq!(tour.route, vec![0, 2, 1, 3, 0]);
        assert_eq!(tour.length, 8);

        let mut interior = tour.route.clone();
        interior.pop();
        interior.sort_unstable();
        assert_eq!(interior, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_tour_tie_breaks_to_lowest_index() {
        let graph = Graph::from_edges(3, &[(0, 1, 2), (0, 2, 2), (1, 2, 2)]).unwrap();
        let tour = graph.approximate_tsp().unwrap();
        assert_eq!(tour.route, vec![0, 1, 2, 0]);
        assert_eq!(tour.length, 6);
    }

    #[test]
    fn test_tour_requires_connected_graph() {
        let graph = Graph::from_edges(4, &[(0, 1, 1), (2, 3, 1)]).unwrap();
        let err = graph.approximate_tsp().unwrap_err();
        assert!(matches!(err, RondoError::NotConnected { .. }));
    }

    #[test]
    fn test_tour_stuck_on_star_graph() {
        // From the hub every leaf is one hop, but a visited hub strands
        // the walk at the first leaf.
        let graph = Graph::from_edges(4, &[(0, 1, 1), (0, 2, 2), (0, 3, 3)]).unwrap();
        let err = graph.approximate_tsp().unwrap_err();
        assert!(matches!(err, RondoError::TourStuck { node: 1 }));
    }

    #[test]
    fn test_tour_not_closed_on_path_graph() {
        // The walk reaches node 2 fine but there is no edge back to 0.
        let graph = Graph::from_edges(3, &[(0, 1, 1), (1, 2, 1)]).unwrap();
        let err = graph.approximate_tsp().unwrap_err();
        assert!(matches!(err, RondoError::TourNotClosed { node: 2 }));
    }

    #[test]
    fn test_tour_after_closure_always_succeeds() {
        let graph = Graph::from_edges(3, &[(0, 1, 1), (1, 2, 1)]).unwrap();
        let closed = graph.into_metric_closure().unwrap();
        let tour = closed.approximate_tsp().unwrap();
        assert_eq!(tour.route, vec![0, 1, 2, 0]);
        assert_eq!(tour.length, 4);
    }

    #[test]
    fn test_tour_length_is_sum_of_legs() {
        let graph = complete_triangle();
        let tour = graph.approximate_tsp().unwrap();
        let legs: u64 = tour
            .route
            .windows(2)
            .map(|pair| graph.weight(pair[0], pair[1]).unwrap().unwrap_or(0))
            .sum();
        assert_eq!(tour.length, legs);
    }

    #[test]
    fn test_tour_single_node() {
        let tour = Graph::new(1).approximate_tsp().unwrap();
        assert_eq!(tour.route, vec![0, 0]);
        assert_eq!(tour.length, 0);
    }

    #[test]
    fn test_tour_empty_graph() {
        let tour = Graph::new(0).approximate_tsp().unwrap();
        assert!(tour.route.is_empty());
        assert_eq!(tour.length, 0);
    }

    #[test]
    fn test_tour_display() {
        let tour = Tour {
            length: 8,
            route: vec![0, 2, 1, 3, 0],
        };
        assert_eq!(tour.display(), "8: 0 -> 2 -> 1 -> 3 -> 0");
    }
}
