use clap::Parser;
use colored::*;
use std::process;
use tracing_subscriber::EnvFilter;

mod cli;

use crate::cli::{Cli, Commands};
use deepmorph_core::DeepmorphError;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);

        // Use appropriate exit codes based on error type
        let exit_code = match e.downcast_ref::<DeepmorphError>() {
            Some(DeepmorphError::Configuration(_)) => 2,
            Some(DeepmorphError::Io(_)) => 3,
            Some(DeepmorphError::Parse(_)) => 4,
            Some(DeepmorphError::InvalidInput(_)) => 5,
            _ => 1,
        };
        process::exit(exit_code);
    }
}

/// RUST_LOG wins, then `-v`/`-vv`, then DEEPMORPH_LOG, then `warn`.
/// Logs go to stderr so JSON on stdout stays parseable.
fn init_logging(verbose: u8) {
    let log_level = match verbose {
        0 => std::env::var("DEEPMORPH_LOG").unwrap_or_else(|_| "warn".to_string()),
        1 => "info".to_string(),
        _ => "debug".to_string(),
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)),
        )
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()?;
    }

    let config = cli.config.as_deref();

    match cli.command {
        Commands::Analyze(args) => crate::cli::commands::analyze::run(args, config),
        Commands::Metrics(args) => crate::cli::commands::metrics::run(args, config),
        Commands::Catalog(args) => crate::cli::commands::catalog::run(args, config),
        Commands::Config { command } => crate::cli::commands::config::run(command, config),
    }
}
