pub mod commands;
pub mod formatting;

use clap::{Parser, Subcommand};
use deepmorph_core::config::{load_config, load_or_default, Config};
use deepmorph_core::system::paths::config_path;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "deepmorph",
    version,
    about = "Sequence metrics and species cluster assignment for deep-sea eDNA samples",
    long_about = "DeepMorph characterises a nucleotide sequence (length, GC content, conserved \
                  motifs) and assigns it to a set of putative species clusters drawn from a \
                  reference catalog of known and candidate novel organisms."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Number of threads for batch analysis (0 = all available)
    #[arg(short = 'j', long, default_value = "0", global = true)]
    pub threads: usize,

    /// Config file (defaults to $DEEPMORPH_HOME/config.toml)
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute metrics and assign species clusters
    Analyze(commands::analyze::AnalyzeArgs),

    /// Compute sequence metrics only
    Metrics(commands::metrics::MetricsArgs),

    /// List the reference catalog in use
    Catalog(commands::catalog::CatalogArgs),

    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        command: commands::config::ConfigCommands,
    },
}

pub fn resolve_config_path(explicit: Option<&Path>) -> PathBuf {
    explicit.map(Path::to_path_buf).unwrap_or_else(config_path)
}

/// An explicit `--config` must exist; the default location may be absent.
pub fn load_effective_config(explicit: Option<&Path>) -> anyhow::Result<Config> {
    let config = match explicit {
        Some(path) => load_config(path)?,
        None => load_or_default(config_path())?,
    };
    Ok(config)
}
