use crate::cli::formatting::report;
use crate::cli::load_effective_config;
use anyhow::Result;
use clap::Args;
use deepmorph_bio::ReferenceCatalog;
use deepmorph_core::OutputFormat;
use std::path::Path;

#[derive(Args)]
pub struct CatalogArgs {
    /// Output format (defaults to the configured one)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

pub fn run(args: CatalogArgs, config_path: Option<&Path>) -> Result<()> {
    let config = load_effective_config(config_path)?;
    let format = args.format.unwrap_or(config.output.format);

    let (catalog, source) = match &config.catalog.path {
        Some(path) => (
            ReferenceCatalog::from_path(path)?,
            path.display().to_string(),
        ),
        None => (ReferenceCatalog::builtin(), "built-in".to_string()),
    };

    match format {
        OutputFormat::Json => println!("{}", catalog.to_json()?),
        OutputFormat::Text => report::print_catalog(&catalog, &source),
    }
    Ok(())
}
