//! `generate_seed <remote> <epoch> <start>` entry point.

mod cli;

use std::io;
use std::process::exit;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

fn init_logging(directive: &str) {
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    // Usage errors exit here, before anything is hashed.
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        json = cli.json,
        coefficients = cli.coefficients,
        "generating seed"
    );

    if let Err(error) = cli::run(&cli, &mut io::stdout().lock()) {
        eprintln!("error: {error:#}");
        exit(1);
    }
}
