mod args;
mod commands;
mod printing;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use args::RunArgs;

/// Project Simulator: a system dynamics model of a single project
///
/// Work is burned down at a constant rate until the accomplished work
/// reaches the project definition, integrated with fixed-step Euler.
#[derive(Parser, Debug)]
#[command(name = "project-sim")]
#[command(author, version, about = "Simulates project work completion over time", long_about = None)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run one simulation and print its frames and summary.
    Run(Box<RunArgs>),

    /// Print the default parameters as JSON.
    ///
    /// The output is a valid config file for `run --config`.
    Defaults,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Run(args) => commands::run::run_simulation(&args),
        Commands::Defaults => commands::defaults::print_defaults(),
    }
}
