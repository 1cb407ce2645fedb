use crate::catalog::OrganismProfile;
use crate::sequence::SequenceMetrics;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClusterStatus {
    Known,
    Novel,
}

impl fmt::Display for ClusterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClusterStatus::Known => write!(f, "known"),
            ClusterStatus::Novel => write!(f, "novel"),
        }
    }
}

/// One putative organism detected in the input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterAssignment {
    /// `species-<selection index>`
    pub id: String,
    /// `Species-A`, `Species-B`, ... in selection order
    pub cluster_name: String,
    #[serde(flatten)]
    pub profile: OrganismProfile,
    pub status: ClusterStatus,
    /// Integer percent
    pub confidence: u32,
    /// Integer percent of the sample
    pub abundance: u32,
    pub sequence_info: ClusterSequenceInfo,
}

impl ClusterAssignment {
    pub fn is_known(&self) -> bool {
        self.status == ClusterStatus::Known
    }
}

/// Per-cluster variant of the input's metrics. GC is the global value plus
/// jitter and is not clamped, so it can fall outside 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterSequenceInfo {
    pub length: usize,
    pub gc_content: i64,
    #[serde(rename = "conservedMotifs")]
    pub conserved_motif_count: usize,
}

impl ClusterSequenceInfo {
    /// The unperturbed metrics
    pub fn from_metrics(metrics: &SequenceMetrics) -> Self {
        Self {
            length: metrics.length,
            gc_content: metrics.gc_content as i64,
            conserved_motif_count: metrics.conserved_motif_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub total_clusters: usize,
    pub known_species: usize,
    pub novel_candidates: usize,
    /// Whole seconds, never below 1
    pub processing_time: u64,
    /// Ordered by descending confidence
    pub species: Vec<ClusterAssignment>,
}

impl AnalysisResult {
    /// Sum of all abundance shares; 100 give or take one point per cluster
    /// under independent rounding
    pub fn abundance_total(&self) -> u32 {
        self.species.iter().map(|s| s.abundance).sum()
    }

    pub fn known(&self) -> impl Iterator<Item = &ClusterAssignment> {
        self.species.iter().filter(|s| s.is_known())
    }

    pub fn novel(&self) -> impl Iterator<Item = &ClusterAssignment> {
        self.species.iter().filter(|s| !s.is_known())
    }

    /// Cluster by its `Species-*` label
    pub fn find(&self, cluster_name: &str) -> Option<&ClusterAssignment> {
        self.species.iter().find(|s| s.cluster_name == cluster_name)
    }
}
