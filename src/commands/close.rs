//! `rondo close` command - metric closure of the graph
//!
//! - `rondo --graph <FILE> close` - replace every weight with the
//!   shortest-path distance between its endpoints and print the result
//!   as a loadable adjacency document
//!
//! Fails on a disconnected graph; the input file is never modified.

use rondo_core::error::Result;
use rondo_core::graph::Graph;

use crate::cli::OutputFormat;

/// Execute the close command
pub fn execute(graph: Graph, format: OutputFormat) -> Result<()> {
    let closed = graph.into_metric_closure()?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&graph_json(&closed))?);
        }
        OutputFormat::Human => {
            print!("{}", closed.to_document());
        }
    }

    Ok(())
}

/// JSON object for a whole graph, shared with `show`.
pub(crate) fn graph_json(graph: &Graph) -> serde_json::Value {
    let edges: Vec<serde_json::Value> = graph
        .edges()
        .map(|(from, to, weight)| {
            serde_json::json!({
                "from": from,
                "to": to,
                "weight": weight,
            })
        })
        .collect();

    serde_json::json!({
        "node_count": graph.node_count(),
        "edge_count": edges.len(),
        "total_weight": graph.total_weight(),
        "edges": edges,
    })
}
