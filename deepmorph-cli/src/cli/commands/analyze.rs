use super::InputArgs;
use crate::cli::formatting::report;
use crate::cli::load_effective_config;
use anyhow::Result;
use clap::Args;
use deepmorph_bio::{Analyzer, NucleotideSequence, SequenceMetrics};
use deepmorph_core::{DeepmorphResult, NormalizationMode, OutputFormat};
use std::path::Path;
use tracing::info;

#[derive(Args)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output format (defaults to the configured one)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Seed the random source for a reproducible assignment
    #[arg(long)]
    pub seed: Option<u64>,

    /// How raw abundance weights become percentages
    #[arg(long, value_enum)]
    pub normalization: Option<NormalizationMode>,
}

pub fn run(args: AnalyzeArgs, config_path: Option<&Path>) -> Result<()> {
    let mut config = load_effective_config(config_path)?;
    if let Some(seed) = args.seed {
        config.analysis.seed = Some(seed);
    }
    if let Some(mode) = args.normalization {
        config.analysis.normalization = mode;
    }
    let format = args.format.unwrap_or(config.output.format);

    let records = args.input.load_records()?;
    let analyzer = Analyzer::from_config(&config)?;

    let sequences: Vec<NucleotideSequence> =
        records.iter().map(|r| r.sequence.clone()).collect();
    info!("Analysing {} sequence(s)", sequences.len());
    let results = analyzer
        .analyze_batch(&sequences)
        .into_iter()
        .collect::<DeepmorphResult<Vec<_>>>()?;

    match format {
        OutputFormat::Json => {
            let reports = records
                .iter()
                .zip(&results)
                .map(|(record, result)| {
                    let metrics = SequenceMetrics::calculate(&record.sequence);
                    report::analysis_json(record, &metrics, result)
                })
                .collect::<Result<Vec<_>>>()?;
            println!("{}", report::render_json(reports, config.output.pretty)?);
        }
        OutputFormat::Text => {
            for (record, result) in records.iter().zip(&results) {
                let metrics = SequenceMetrics::calculate(&record.sequence);
                report::print_analysis(record, &metrics, result);
            }
        }
    }

    Ok(())
}
