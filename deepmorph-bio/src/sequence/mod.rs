pub mod stats;
pub mod types;

// Re-export commonly used types
pub use stats::{count_conserved_motifs, gc_content, motif_hits, MotifHit, SequenceMetrics};
pub use types::{NucleotideSequence, SAMPLE_SEQUENCE};
