use super::InputArgs;
use crate::cli::formatting::report;
use crate::cli::load_effective_config;
use anyhow::Result;
use clap::Args;
use deepmorph_bio::sequence::motif_hits;
use deepmorph_bio::SequenceMetrics;
use deepmorph_core::OutputFormat;
use std::path::Path;

#[derive(Args)]
pub struct MetricsArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output format (defaults to the configured one)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

pub fn run(args: MetricsArgs, config_path: Option<&Path>) -> Result<()> {
    let config = load_effective_config(config_path)?;
    let format = args.format.unwrap_or(config.output.format);
    let records = args.input.load_records()?;

    let mut reports = Vec::new();
    for record in &records {
        let metrics = SequenceMetrics::calculate(&record.sequence);
        let motifs = motif_hits(record.sequence.as_bytes());
        match format {
            OutputFormat::Json => reports.push(report::metrics_json(record, &metrics, &motifs)?),
            OutputFormat::Text => report::print_metrics(record, &metrics, &motifs),
        }
    }

    if format.is_machine_readable() {
        println!("{}", report::render_json(reports, config.output.pretty)?);
    }
    Ok(())
}
