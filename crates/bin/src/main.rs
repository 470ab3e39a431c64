use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so JSON output stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("replgraph=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let state = cli.state.as_path();

    match &cli.command {
        Commands::Import(args) => commands::replica::import(state, args, cli.output),
        Commands::Merge(args) => commands::replica::merge(state, args, cli.output),
        Commands::Show => commands::graph::show(state, cli.output),
        Commands::Route(args) => commands::graph::route(state, args, cli.output),
        Commands::Dfs(args) => commands::graph::dfs(state, args, cli.output),
    }
}
