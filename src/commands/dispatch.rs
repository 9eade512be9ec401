//! Command dispatch logic for rondo

use std::time::Instant;

use rondo_core::config::Config;
use rondo_core::error::{Result, RondoError};
use rondo_core::graph::Graph;
use rondo_core::trace_time;

use crate::cli::{Cli, Commands};
use crate::commands;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    if cli.verbose {
        eprintln!("load_config: {:?}", start.elapsed());
    }

    // --format wins over the config file; human is the fallback
    let format = cli.format.or(config.format).unwrap_or_default();

    let result = match &cli.command {
        None | Some(Commands::Menu) => commands::menu::execute(cli),

        Some(Commands::Connected) => {
            let graph = load_graph(cli, start)?;
            commands::connected::execute(&graph, format)
        }

        Some(Commands::Mst) => {
            let graph = load_graph(cli, start)?;
            commands::mst::execute(&graph, format)
        }

        Some(Commands::Paths { from }) => {
            let graph = load_graph(cli, start)?;
            let start_node = from.unwrap_or(config.paths.default_source);
            commands::paths::execute(&graph, start_node, format)
        }

        Some(Commands::Metric) => {
            let graph = load_graph(cli, start)?;
            commands::metric::execute(&graph, format)
        }

        Some(Commands::Close) => {
            let graph = load_graph(cli, start)?;
            commands::close::execute(graph, format)
        }

        Some(Commands::Tour { unchecked }) => {
            let graph = load_graph(cli, start)?;
            let gate = config.tour.require_metric && !unchecked;
            commands::tour::execute(&graph, gate, format)
        }

        Some(Commands::Show) => {
            let graph = load_graph(cli, start)?;
            commands::show::execute(cli, &graph, format)
        }
    };

    trace_time!(start, "run_command");
    result
}

/// Load the graph named by --graph. Every non-interactive command needs
/// one; only the menu may prompt for it instead.
fn load_graph(cli: &Cli, start: Instant) -> Result<Graph> {
    let path = cli.graph.as_ref().ok_or_else(|| {
        RondoError::UsageError("no graph file given (pass --graph <FILE>)".to_string())
    })?;
    let graph = Graph::load(path)?;
    if cli.verbose {
        eprintln!("load_graph: {:?}", start.elapsed());
    }
    tracing::debug!(
        path = %path.display(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "loaded graph"
    );
    Ok(graph)
}
