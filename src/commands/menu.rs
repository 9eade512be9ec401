//! `rondo menu` command - the interactive numbered menu
//!
//! The default when no subcommand is given. Prompts for a graph file
//! unless --graph was passed, then loops over numbered operations until
//! quit or end of input. Precondition failures inside the loop are
//! reported and the session continues with the graph unchanged; only
//! the metric closure replaces the in-memory graph, and only when it
//! succeeds. The input file is never modified.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use rondo_core::error::Result;
use rondo_core::graph::Graph;

use crate::cli::Cli;
use crate::commands::{connected, metric, paths};

const MENU: &str = "1. Is Connected
2. Minimum Spanning Tree
3. Shortest Path
4. Is Metric
5. Make Metric
6. Traveling Salesman Problem
7. Approximate TSP
8. Quit";

/// Execute the menu command against stdin
pub fn execute(cli: &Cli) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    run_session(cli, &mut input)
}

fn run_session(cli: &Cli, input: &mut dyn BufRead) -> Result<()> {
    let path = match &cli.graph {
        Some(path) => path.clone(),
        None => {
            prompt("What's the name of your graph file?: ")?;
            match read_line(input)? {
                Some(line) => PathBuf::from(line.trim()),
                None => return Ok(()),
            }
        }
    };

    // A graph that cannot be loaded ends the session; everything after
    // this point is recoverable.
    let mut graph = Graph::load(&path)?;

    loop {
        println!("{}", MENU);
        prompt("Make your choice (1 - 8): ")?;
        let Some(line) = read_line(input)? else {
            println!("Exiting...");
            return Ok(());
        };

        match line.trim().parse::<u32>() {
            Ok(1) => println!("{}", connected::verdict(graph.is_connected())),

            Ok(2) => match graph.minimum_spanning_tree() {
                Ok(tree) => print!("{}", tree.to_document()),
                Err(err) => println!("Error: {}", err),
            },

            Ok(3) => shortest_paths_dialog(&graph, input)?,

            Ok(4) => println!("{}", metric::verdict(graph.is_metric())),

            Ok(5) => {
                graph = match graph.into_metric_closure() {
                    Ok(closed) => {
                        print!("{}", closed.to_document());
                        closed
                    }
                    Err(unchanged) => {
                        println!("Error: {}", unchanged);
                        unchanged.into_graph()
                    }
                };
            }

            Ok(6) => match graph.approximate_tsp() {
                Ok(tour) => println!("{}", tour.display()),
                Err(err) => println!("Error: {}", err),
            },

            Ok(7) => {
                if graph.has_traveling_salesman_problem() {
                    match graph.approximate_tsp() {
                        Ok(tour) => println!("TSP Approximate tour: {}", tour.display()),
                        Err(err) => println!("Error: {}", err),
                    }
                } else {
                    println!("Error: Graph is not metric.");
                }
            }

            Ok(8) => {
                println!("Exiting...");
                return Ok(());
            }

            _ => println!("Invalid input. Please enter a number between 1 and 8."),
        }
    }
}

/// Ask for a source node, then print the shortest-path listing. Bad
/// selections are reported and the menu loop carries on.
fn shortest_paths_dialog(graph: &Graph, input: &mut dyn BufRead) -> Result<()> {
    let last = graph.node_count().saturating_sub(1);
    prompt(&format!(
        "From which node would you like to find the shortest paths (0 - {}): ",
        last
    ))?;
    let Some(line) = read_line(input)? else {
        return Ok(());
    };

    let Ok(start) = line.trim().parse::<usize>() else {
        println!("Invalid input. Please enter a number between 0 and {}.", last);
        return Ok(());
    };

    match graph.shortest_paths(start) {
        Ok(result) => print!("{}", paths::listing(&result)),
        Err(err) => println!("Error: {}", err),
    }
    Ok(())
}

fn prompt(text: &str) -> Result<()> {
    print!("{}", text);
    io::stdout().flush()?;
    Ok(())
}

fn read_line(input: &mut dyn BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
