//! Read-only queries over the materialized graph: `show`, `route` and `dfs`.

use std::path::Path;

use replgraph::graph::format_route;

use super::open_replica;
use crate::cli::{DfsArgs, OutputFormat, RouteArgs};
use crate::output::graph_json;

/// Run the show command
pub fn show(state_path: &Path, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let graph = open_replica(state_path)?.graph();

    match format {
        OutputFormat::Human => {
            if graph.is_empty() {
                println!("Graph is empty.");
                return Ok(());
            }
            print!("{graph}");
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(&graph_json(&graph))?);
        }
    }

    Ok(())
}

/// Run the route command
pub fn route(
    state_path: &Path,
    args: &RouteArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let graph = open_replica(state_path)?.graph();
    let route = graph.find_shortest_route(&args.root, &args.destination)?;

    match format {
        OutputFormat::Human => println!("{}", format_route(&route)),
        OutputFormat::Json => {
            let root_first: Vec<&String> = route.iter().rev().collect();
            println!("{}", serde_json::to_string(&root_first)?);
        }
    }

    Ok(())
}

/// Run the dfs command
pub fn dfs(
    state_path: &Path,
    args: &DfsArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let graph = open_replica(state_path)?.graph();
    let visited = graph.depth_first_search(&args.root)?;

    match format {
        OutputFormat::Human => {
            for label in &visited {
                println!("{label}");
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string(&visited)?),
    }

    Ok(())
}
