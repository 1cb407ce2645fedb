pub mod analyze;
pub mod catalog;
pub mod config;
pub mod metrics;

use anyhow::Result;
use clap::Args;
use deepmorph_bio::formats::fasta::{parse_input, read_input, FastaRecord};
use deepmorph_bio::SAMPLE_SEQUENCE;
use deepmorph_core::DeepmorphError;
use std::io::Read;
use std::path::PathBuf;
use tracing::debug;

/// Where the sequence(s) to process come from. Exactly one source is used.
#[derive(Args, Debug)]
pub struct InputArgs {
    /// Nucleotide sequence (A, C, G, T; whitespace and case ignored), or `-` for stdin
    #[arg(value_name = "SEQUENCE", conflicts_with_all = ["input", "sample"])]
    pub sequence: Option<String>,

    /// FASTA or plain sequence file (.gz accepted), or `-` for stdin
    #[arg(short, long, value_name = "FILE", conflicts_with = "sample")]
    pub input: Option<PathBuf>,

    /// Use the built-in demonstration sequence
    #[arg(long)]
    pub sample: bool,
}

impl InputArgs {
    pub fn load_records(&self) -> Result<Vec<FastaRecord>> {
        let records = if self.sample {
            debug!("Using built-in sample sequence");
            let mut records = parse_input(SAMPLE_SEQUENCE.as_bytes())?;
            for record in &mut records {
                record.id = "sample".to_string();
            }
            records
        } else if let Some(path) = &self.input {
            if path.as_os_str() == "-" {
                parse_input(&read_stdin()?)?
            } else {
                read_input(path)?
            }
        } else if let Some(sequence) = &self.sequence {
            if sequence == "-" {
                parse_input(&read_stdin()?)?
            } else {
                parse_input(sequence.as_bytes())?
            }
        } else {
            return Err(DeepmorphError::InvalidInput(
                "no input given; pass a SEQUENCE, --input FILE or --sample".to_string(),
            )
            .into());
        };

        if records.is_empty() {
            return Err(
                DeepmorphError::InvalidInput("input contains no sequences".to_string()).into(),
            );
        }
        Ok(records)
    }
}

fn read_stdin() -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    std::io::stdin()
        .read_to_end(&mut buffer)
        .map_err(DeepmorphError::Io)?;
    Ok(buffer)
}
