//! `rondo connected` command - test whether the graph is connected
//!
//! - `rondo --graph <FILE> connected` - report the verdict
//!
//! A negative verdict is still a successful run; the command only fails
//! when the graph cannot be loaded.

use rondo_core::error::Result;
use rondo_core::graph::Graph;

use crate::cli::OutputFormat;

/// Execute the connected command
pub fn execute(graph: &Graph, format: OutputFormat) -> Result<()> {
    let connected = graph.is_connected();

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "node_count": graph.node_count(),
                "connected": connected,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            println!("{}", verdict(connected));
        }
    }

    Ok(())
}

/// Verdict line shared with the interactive menu.
pub(crate) fn verdict(connected: bool) -> &'static str {
    if connected {
        "Graph is connected."
    } else {
        "Graph is not connected."
    }
}
