//! `rondo metric` command - check the triangle inequality
//!
//! - `rondo --graph <FILE> metric` - report whether every edge triple
//!   satisfies `w(i,k) <= w(i,j) + w(j,k)`
//!
//! As with `connected`, a negative verdict still exits zero.

use rondo_core::error::Result;
use rondo_core::graph::Graph;

use crate::cli::OutputFormat;

/// Execute the metric command
pub fn execute(graph: &Graph, format: OutputFormat) -> Result<()> {
    let metric = graph.is_metric();

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "node_count": graph.node_count(),
                "metric": metric,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            println!("{}", verdict(metric));
        }
    }

    Ok(())
}

/// Verdict line shared with the interactive menu.
pub(crate) fn verdict(metric: bool) -> &'static str {
    if metric {
        "The Graph is metric."
    } else {
        "Graph is not metric."
    }
}
