use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;

mod commands;

#[derive(clap::Args, Debug)]
struct Simulate {
    /// Path to a JSON map file
    #[clap(short, long, value_parser)]
    map: PathBuf,

    /// Strategy names, in punter order
    #[clap(short, long, value_parser, num_args = 1..)]
    strategies: Vec<String>,
}

#[derive(clap::Args, Debug)]
struct Tree {
    /// Path to a JSON map file
    #[clap(short, long, value_parser)]
    map: PathBuf,

    /// How many of the punter's own claims deep to search
    #[clap(short, long, value_parser, default_value_t = 2)]
    depth: usize,

    /// How many punters to model, at least one
    #[clap(short, long, value_parser = clap::value_parser!(u64).range(1..), default_value_t = 2)]
    punters: u64,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Play named strategies against each other on a map
    Simulate(Simulate),
    /// Print the minimax search tree for the opening claim
    Tree(Tree),
}

/// Referee for the lambda-punter game
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    #[clap(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    match args.command {
        Commands::Simulate(s) => commands::simulate::run(s)?,
        Commands::Tree(t) => commands::tree::run(t)?,
    }

    Ok(())
}
