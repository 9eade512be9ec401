//! `rondo mst` command - compute a minimum spanning tree
//!
//! - `rondo --graph <FILE> mst` - print the tree as a loadable
//!   adjacency document
//!
//! Fails on a disconnected graph.

use rondo_core::error::Result;
use rondo_core::graph::Graph;

use crate::cli::OutputFormat;

/// Execute the mst command
pub fn execute(graph: &Graph, format: OutputFormat) -> Result<()> {
    let tree = graph.minimum_spanning_tree()?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&tree)?);
        }
        OutputFormat::Human => {
            print!("{}", tree.to_document());
        }
    }

    Ok(())
}
