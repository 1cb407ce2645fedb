use super::types::NucleotideSequence;
use deepmorph_core::{DeepmorphError, DeepmorphResult};
use lazy_static::lazy_static;
use regex::bytes::Regex;
use serde::{Deserialize, Serialize};

/// A fixed nucleotide pattern counted as a conserved-motif proxy
pub struct ConservedMotif {
    pub name: &'static str,
    pub pattern: &'static str,
    regex: Regex,
}

impl ConservedMotif {
    fn new(name: &'static str, pattern: &'static str) -> Self {
        Self {
            name,
            pattern,
            regex: Regex::new(pattern).expect("conserved motif pattern must compile"),
        }
    }

    /// Non-overlapping, left-to-right match count
    pub fn count(&self, sequence: &[u8]) -> usize {
        self.regex.find_iter(sequence).count()
    }
}

lazy_static! {
    pub static ref CONSERVED_MOTIFS: [ConservedMotif; 4] = [
        ConservedMotif::new("TATA box", "TATA[AT]A"),
        ConservedMotif::new("GC box", "GC{2,}GC"),
        ConservedMotif::new("CAT run", "CAT{2,}C"),
        ConservedMotif::new("ATCG core", "[AG]ATCG[AT]"),
    ];
}

/// Per-pattern motif count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotifHit {
    pub name: String,
    pub pattern: String,
    pub count: usize,
}

/// Statistics derived from one nucleotide sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SequenceMetrics {
    pub length: usize,
    /// Integer percentage of G or C
    pub gc_content: u32,
    #[serde(rename = "conservedMotifs")]
    pub conserved_motif_count: usize,
}

impl SequenceMetrics {
    pub fn calculate(sequence: &NucleotideSequence) -> Self {
        let bytes = sequence.as_bytes();
        Self {
            length: bytes.len(),
            gc_content: gc_percent(count_gc(bytes), bytes.len()),
            conserved_motif_count: count_conserved_motifs(bytes),
        }
    }
}

fn count_gc(sequence: &[u8]) -> usize {
    sequence
        .iter()
        .filter(|&&b| matches!(b.to_ascii_uppercase(), b'G' | b'C'))
        .count()
}

/// round-half-up of gc * 100 / len, in integers
fn gc_percent(gc: usize, len: usize) -> u32 {
    if len == 0 {
        return 0;
    }
    ((gc * 200 + len) / (2 * len)) as u32
}

/// GC percentage rounded half-up. Empty input is rejected rather than
/// reported as 0%.
pub fn gc_content(sequence: &[u8]) -> DeepmorphResult<u32> {
    if sequence.is_empty() {
        return Err(DeepmorphError::InvalidInput(
            "cannot compute GC content of an empty sequence".to_string(),
        ));
    }
    Ok(gc_percent(count_gc(sequence), sequence.len()))
}

/// Sum of match counts across all conserved motif patterns
pub fn count_conserved_motifs(sequence: &[u8]) -> usize {
    CONSERVED_MOTIFS.iter().map(|m| m.count(sequence)).sum()
}

/// Match counts broken down by pattern, in pattern order
pub fn motif_hits(sequence: &[u8]) -> Vec<MotifHit> {
    CONSERVED_MOTIFS
        .iter()
        .map(|m| MotifHit {
            name: m.name.to_string(),
            pattern: m.pattern.to_string(),
            count: m.count(sequence),
        })
        .collect()
}
