//! `rondo tour` command - approximate a traveling-salesman tour
//!
//! - `rondo --graph <FILE> tour` - nearest-neighbor tour from node 0,
//!   refused unless the graph is connected and metric
//! - `rondo --graph <FILE> tour --unchecked` - walk the tour anyway;
//!   on incomplete graphs the walk can strand itself and fail

use rondo_core::error::{Result, RondoError};
use rondo_core::graph::Graph;

use crate::cli::OutputFormat;

const OPERATION: &str = "tour approximation";

/// Execute the tour command
pub fn execute(graph: &Graph, require_metric: bool, format: OutputFormat) -> Result<()> {
    if require_metric {
        if !graph.is_connected() {
            return Err(RondoError::NotConnected {
                operation: OPERATION,
            });
        }
        if !graph.is_metric() {
            return Err(RondoError::NotMetric {
                operation: OPERATION,
            });
        }
    }

    let tour = graph.approximate_tsp()?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&tour)?);
        }
        OutputFormat::Human => {
            println!("{}", tour.display());
        }
    }

    Ok(())
}
