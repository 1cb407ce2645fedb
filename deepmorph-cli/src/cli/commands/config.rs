use crate::cli::formatting::output::{info, success};
use crate::cli::{load_effective_config, resolve_config_path};
use anyhow::Result;
use clap::Subcommand;
use deepmorph_core::config::{save_config, Config};
use deepmorph_core::DeepmorphError;
use std::path::Path;

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the effective configuration as TOML
    Show,
}

pub fn run(command: ConfigCommands, config_path: Option<&Path>) -> Result<()> {
    match command {
        ConfigCommands::Init { force } => {
            let path = resolve_config_path(config_path);
            if path.exists() && !force {
                return Err(DeepmorphError::Configuration(format!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                ))
                .into());
            }
            save_config(&path, &Config::default())?;
            success(&format!("Wrote default config to {}", path.display()));
        }
        ConfigCommands::Show => {
            let path = resolve_config_path(config_path);
            let config = load_effective_config(config_path)?;
            if !path.exists() {
                info(&format!("{} not found, showing defaults", path.display()));
            }
            let rendered = toml::to_string_pretty(&config)
                .map_err(|e| DeepmorphError::Serialization(e.to_string()))?;
            print!("{}", rendered);
        }
    }
    Ok(())
}
