//! Sequence characterisation and species cluster assignment for DeepMorph
//!
//! The pipeline is: clean a raw nucleotide string into a [`NucleotideSequence`],
//! derive [`SequenceMetrics`] from it, then let the [`ClusterAssigner`] sample
//! known and novel organism profiles from a [`ReferenceCatalog`] and attach
//! confidence, abundance and per-cluster statistics.

pub mod analysis;
pub mod catalog;
pub mod clustering;
pub mod formats;
pub mod sequence;

// Re-export commonly used types
pub use analysis::{analyze, analyze_str, Analyzer};
pub use catalog::{BiosyntheticPotential, OrganismProfile, ReferenceCatalog};
pub use formats::{read_input, FastaRecord};
pub use clustering::{
    AnalysisResult, ClusterAssigner, ClusterAssignment, ClusterSequenceInfo, ClusterStatus,
    RandomSource, RngSource, ScriptedSource,
};
pub use sequence::{
    count_conserved_motifs, gc_content, NucleotideSequence, SequenceMetrics, SAMPLE_SEQUENCE,
};
