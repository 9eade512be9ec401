//! Parser for the adjacency-list graph document
//!
//! A document is a single whitespace-delimited stream of unsigned
//! integers: the node count, then one record per node holding an edge
//! count followed by that many `target weight` pairs. Token layout is
//! free, so records may wrap across lines or share one line. Tokens
//! past the last record are ignored.

use std::str::SplitWhitespace;

use crate::error::{Result, RondoError};
use crate::graph::Graph;

/// Cursor over the token stream, tracking position for error reporting.
struct Tokens<'a> {
    iter: SplitWhitespace<'a>,
    position: usize,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            iter: text.split_whitespace(),
            position: 0,
        }
    }

    fn next_number(&mut self, what: &str) -> Result<u64> {
        self.position += 1;
        let token = self
            .iter
            .next()
            .ok_or_else(|| RondoError::MalformedDocument {
                position: self.position,
                reason: format!("expected {}, found end of input", what),
            })?;
        token.parse().map_err(|_| RondoError::MalformedDocument {
            position: self.position,
            reason: format!("expected {}, found {:?}", what, token),
        })
    }

    fn next_index(&mut self, what: &str) -> Result<usize> {
        let value = self.next_number(what)?;
        usize::try_from(value).map_err(|_| RondoError::MalformedDocument {
            position: self.position,
            reason: format!("{} {} does not fit in usize", what, value),
        })
    }
}

pub(crate) fn parse_document(text: &str) -> Result<Graph> {
    let mut tokens = Tokens::new(text);
    let node_count = tokens.next_index("node count")?;
    let mut graph = Graph::new(node_count);

    for source in 0..node_count {
        let edge_count = tokens.next_index("edge count")?;
        for _ in 0..edge_count {
            let target = tokens.next_index("edge target")?;
            let weight = tokens.next_number("edge weight")?;
            if target >= node_count {
                return Err(RondoError::MalformedDocument {
                    position: tokens.position - 1,
                    reason: format!(
                        "edge target {} is out of range for a graph of {} nodes",
                        target, node_count
                    ),
                });
            }
            graph.set_cell(source, target, Some(weight));
        }
    }

    tracing::debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "parsed graph document"
    );
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_document() {
        let graph = Graph::parse("3\n2 1 4 2 7\n1 0 4\n1 0 7\n").unwrap();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.weight(0, 1).unwrap(), Some(4));
        assert_eq!(graph.weight(0, 2).unwrap(), Some(7));
        assert_eq!(graph.weight(1, 2).unwrap(), None);
    }

    #[test]
    fn test_parse_is_layout_insensitive() {
        let packed = Graph::parse("3 2 1 4 2 7 1 0 4 1 0 7").unwrap();
        let wrapped = Graph::parse("3\n  2\n1 4\n\t2 7\n1\n0 4\n1 0\n7\n").unwrap();
        assert_eq!(packed, wrapped);
    }

    #[test]
    fn test_parse_one_sided_listing_is_symmetric() {
        // The document only lists the edge under node 0; the matrix
        // still reports it from both endpoints.
        let graph = Graph::parse("2\n1 1 9\n0\n").unwrap();
        assert_eq!(graph.weight(0, 1).unwrap(), Some(9));
        assert_eq!(graph.weight(1, 0).unwrap(), Some(9));
    }

    #[test]
    fn test_parse_empty_graph() {
        let graph = Graph::parse("0\n").unwrap();
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_parse_trailing_tokens_ignored() {
        let graph = Graph::parse("1\n0\n99 98 97\n").unwrap();
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_parse_empty_input_is_error() {
        let err = Graph::parse("").unwrap_err();
        match err {
            RondoError::MalformedDocument { position, reason } => {
                assert_eq!(position, 1);
                assert!(reason.contains("node count"));
                assert!(reason.contains("end of input"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_truncated_record_is_error() {
        let err = Graph::parse("2\n1 1\n").unwrap_err();
        match err {
            RondoError::MalformedDocument { position, reason } => {
                assert_eq!(position, 4);
                assert!(reason.contains("edge weight"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_non_numeric_token_is_error() {
        let err = Graph::parse("2\nx 1 3\n0\n").unwrap_err();
        match err {
            RondoError::MalformedDocument { position, reason } => {
                assert_eq!(position, 2);
                assert!(reason.contains("\"x\""));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_negative_weight_is_error() {
        let err = Graph::parse("2\n1 1 -3\n1 0 -3\n").unwrap_err();
        assert!(matches!(err, RondoError::MalformedDocument { .. }));
    }

    #[test]
    fn test_parse_target_out_of_range_is_error() {
        let err = Graph::parse("2\n1 5 3\n0\n").unwrap_err();
        match err {
            RondoError::MalformedDocument { reason, .. } => {
                assert!(reason.contains("edge target 5"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_accepts_self_loop_and_duplicates() {
        // Duplicates keep the last weight; self-loops are stored as given.
        let graph = Graph::parse("2\n2 1 3 1 8\n1 1 5\n").unwrap();
        assert_eq!(graph.weight(0, 1).unwrap(), Some(8));
        assert_eq!(graph.weight(1, 1).unwrap(), Some(5));
    }
}
