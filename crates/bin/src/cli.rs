//! CLI argument definitions for the replgraph binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned, human-readable text
    Human,
    /// One JSON document per command
    Json,
}

/// Replicated graph tool: edit, merge and query graph replicas stored as JSON files
#[derive(Parser, Debug)]
#[command(name = "replgraph")]
#[command(about = "replgraph: a replicated graph that converges without coordination")]
#[command(version)]
pub struct Cli {
    /// Local replica state file. Created on first write if missing.
    #[arg(
        short,
        long,
        global = true,
        default_value = "replgraph.json",
        env = "REPLGRAPH_STATE"
    )]
    pub state: PathBuf,

    /// Output format
    #[arg(
        short,
        long,
        global = true,
        value_enum,
        default_value = "human",
        env = "REPLGRAPH_OUTPUT"
    )]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Seed the local replica from an adjacency list file
    Import(ImportArgs),
    /// Merge one or more remote replica state files into the local replica
    Merge(MergeArgs),
    /// Print the materialized graph
    Show,
    /// Print the shortest route between two nodes
    Route(RouteArgs),
    /// Print the depth-first visit order from a node
    Dfs(DfsArgs),
}

/// Arguments for the import command
#[derive(clap::Args, Debug)]
pub struct ImportArgs {
    /// Adjacency list file, one `source: dest1, dest2` line per node
    pub file: PathBuf,
}

/// Arguments for the merge command
#[derive(clap::Args, Debug)]
pub struct MergeArgs {
    /// Remote replica state files, merged in the order given
    #[arg(required = true)]
    pub remotes: Vec<PathBuf>,
}

/// Arguments for the route command
#[derive(clap::Args, Debug)]
pub struct RouteArgs {
    /// Label of the starting node
    pub root: String,
    /// Label of the destination node
    pub destination: String,
}

/// Arguments for the dfs command
#[derive(clap::Args, Debug)]
pub struct DfsArgs {
    /// Label of the starting node
    pub root: String,
}
