//! Cluster assignment: sampling catalog profiles into a scored, ordered result
//!
//! Every invocation builds a fresh [`AnalysisResult`]. Randomness is drawn
//! through [`RandomSource`] so tests can replay exact draw sequences.

pub mod engine;
pub mod normalization;
pub mod random;
pub mod types;

pub use engine::{cluster_label, ClusterAssigner};
pub use normalization::normalize_abundances;
pub use random::{RandomSource, RngSource, ScriptedSource};
pub use types::{AnalysisResult, ClusterAssignment, ClusterSequenceInfo, ClusterStatus};
