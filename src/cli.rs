//! CLI argument parsing for rondo
//!
//! Uses clap for argument parsing.
//! Supports global flags: --graph, --config, --format, --quiet,
//! --verbose, --log-level, --log-json

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use rondo_core::format::OutputFormat;

/// Rondo - weighted graph toolkit CLI
#[derive(Parser, Debug)]
#[command(name = "rondo")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Graph file to load (adjacency-list document)
    #[arg(long, short = 'g', global = true)]
    pub graph: Option<PathBuf>,

    /// Config file (defaults to $RONDO_CONFIG, then ./rondo.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format: human or json (defaults to the config file setting)
    #[arg(long, global = true, value_parser = parse_format)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON to stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive numbered menu (the default)
    Menu,

    /// Test whether every node is reachable from node 0
    Connected,

    /// Compute a minimum spanning tree
    Mst,

    /// Compute single-source shortest paths to every node
    Paths {
        /// Source node (defaults to the config file setting, then 0)
        #[arg(long, short = 'f')]
        from: Option<usize>,
    },

    /// Check the triangle inequality over all edge triples
    Metric,

    /// Replace every weight with the shortest-path distance between its
    /// endpoints (metric closure)
    Close,

    /// Approximate a traveling-salesman tour by nearest neighbor
    Tour {
        /// Walk the tour even when the graph is not connected and metric
        #[arg(long)]
        unchecked: bool,
    },

    /// Print a summary and the adjacency document of the graph
    Show,
}

/// Parse output format from string
fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}
