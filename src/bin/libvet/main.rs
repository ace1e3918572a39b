//! libvet CLI - batch verification of Arduino library catalogs

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("libvet=debug")
    } else {
        EnvFilter::new("libvet=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    // Execute command
    match cli.command {
        Commands::Schedule(args) => commands::schedule::execute(args),
        Commands::Check(args) => commands::check::execute(args),
        Commands::Summary(args) => commands::summary::execute(args),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}
