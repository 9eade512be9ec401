//! `rondo paths` command - single-source shortest paths
//!
//! - `rondo --graph <FILE> paths --from <NODE>` - distances and routes
//!   from one node to every node
//!
//! Unreachable nodes report an infinite distance and a route holding
//! only themselves.

use std::fmt::Write as _;

use rondo_core::error::Result;
use rondo_core::graph::{Graph, ShortestPaths};

use crate::cli::OutputFormat;

/// Execute the paths command
pub fn execute(graph: &Graph, start: usize, format: OutputFormat) -> Result<()> {
    let result = graph.shortest_paths(start)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Human => {
            print!("{}", listing(&result));
        }
    }

    Ok(())
}

/// One line per node, `node: (distance)\troute`, shared with the
/// interactive menu.
pub(crate) fn listing(result: &ShortestPaths) -> String {
    let mut out = String::new();
    for path in &result.paths {
        match path.distance {
            Some(distance) => {
                let _ = writeln!(out, "{}: ({})\t{}", path.node, distance, path.route_display());
            }
            None => {
                let _ = writeln!(out, "{}: (Infinity)\t{}", path.node, path.route_display());
            }
        }
    }
    out
}
