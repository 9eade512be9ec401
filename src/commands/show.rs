//! `rondo show` command - summarize a graph
//!
//! - `rondo --graph <FILE> show` - node and edge counts, connectivity
//!   and metric verdicts, then the adjacency document

use rondo_core::error::Result;
use rondo_core::graph::Graph;

use crate::cli::{Cli, OutputFormat};
use crate::commands::close::graph_json;

/// Execute the show command
pub fn execute(cli: &Cli, graph: &Graph, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let mut output = graph_json(graph);
            output["connected"] = serde_json::json!(graph.is_connected());
            output["metric"] = serde_json::json!(graph.is_metric());
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!("nodes: {}", graph.node_count());
                println!("edges: {}", graph.edge_count());
                println!("total weight: {}", graph.total_weight());
                let connected = if graph.is_connected() { "yes" } else { "no" };
                println!("connected: {}", connected);
                let metric = if graph.is_metric() { "yes" } else { "no" };
                println!("metric: {}", metric);
                println!();
            }
            print!("{}", graph.to_document());
        }
    }

    Ok(())
}
