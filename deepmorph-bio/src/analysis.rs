//! Top-level analysis entry points

use crate::catalog::ReferenceCatalog;
use crate::clustering::{AnalysisResult, ClusterAssigner, RandomSource, RngSource};
use crate::sequence::{NucleotideSequence, SequenceMetrics};
use deepmorph_core::config::{AnalysisConfig, Config};
use deepmorph_core::DeepmorphResult;
use rayon::prelude::*;
use std::time::Instant;
use tracing::debug;

/// Metrics plus cluster assignment for one sequence
#[derive(Debug)]
pub struct Analyzer {
    assigner: ClusterAssigner,
}

impl Analyzer {
    pub fn new(catalog: ReferenceCatalog, config: AnalysisConfig) -> DeepmorphResult<Self> {
        Ok(Self {
            assigner: ClusterAssigner::new(catalog, config)?,
        })
    }

    /// Build from a full config, loading the catalog file when one is set
    pub fn from_config(config: &Config) -> DeepmorphResult<Self> {
        let catalog = match &config.catalog.path {
            Some(path) => ReferenceCatalog::from_path(path)?,
            None => ReferenceCatalog::builtin(),
        };
        Self::new(catalog, config.analysis.clone())
    }

    pub fn catalog(&self) -> &ReferenceCatalog {
        self.assigner.catalog()
    }

    pub fn config(&self) -> &AnalysisConfig {
        self.assigner.config()
    }

    /// Analyse with the configured randomness: seeded when `seed` is set,
    /// OS-seeded otherwise
    pub fn analyze(&self, sequence: &NucleotideSequence) -> DeepmorphResult<AnalysisResult> {
        match self.config().seed {
            Some(seed) => self.analyze_with(sequence, &mut RngSource::seeded(seed)),
            None => self.analyze_with(sequence, &mut RngSource::thread()),
        }
    }

    /// Analyse drawing from a caller-supplied source
    pub fn analyze_with<R: RandomSource>(
        &self,
        sequence: &NucleotideSequence,
        rng: &mut R,
    ) -> DeepmorphResult<AnalysisResult> {
        let started = Instant::now();
        let metrics = SequenceMetrics::calculate(sequence);
        debug!(
            "Sequence metrics: length={} gc={}% motifs={}",
            metrics.length, metrics.gc_content, metrics.conserved_motif_count
        );
        self.assigner.assign_since(&metrics, rng, started)
    }

    /// Analyse many sequences in parallel. With a configured seed, record `i`
    /// uses `seed + i`, so batches are reproducible regardless of scheduling.
    pub fn analyze_batch(
        &self,
        sequences: &[NucleotideSequence],
    ) -> Vec<DeepmorphResult<AnalysisResult>> {
        let seed = self.config().seed;
        sequences
            .par_iter()
            .enumerate()
            .map(|(i, sequence)| match seed {
                Some(seed) => {
                    let mut rng = RngSource::seeded(seed.wrapping_add(i as u64));
                    self.analyze_with(sequence, &mut rng)
                }
                None => self.analyze_with(sequence, &mut RngSource::thread()),
            })
            .collect()
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self {
            assigner: ClusterAssigner::default(),
        }
    }
}

/// Analyse with the built-in catalog and default sampling ranges
pub fn analyze(sequence: &NucleotideSequence) -> DeepmorphResult<AnalysisResult> {
    Analyzer::default().analyze(sequence)
}

/// Clean and validate `raw`, then analyse it
pub fn analyze_str(raw: &str) -> DeepmorphResult<AnalysisResult> {
    analyze(&NucleotideSequence::parse(raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clustering::ScriptedSource;
    use deepmorph_core::DeepmorphError;

    #[test]
    fn test_analyze_str_rejects_invalid_input() {
        assert!(matches!(
            analyze_str("ACGTN"),
            Err(DeepmorphError::InvalidInput(_))
        ));
        assert!(matches!(analyze_str("  "), Err(DeepmorphError::InvalidInput(_))));
    }

    #[test]
    fn test_sequence_info_carries_input_length() {
        let result = analyze_str("atgc atgc").unwrap();
        assert!(result.species.iter().all(|s| s.sequence_info.length == 8));
    }

    #[test]
    fn test_seeded_analyses_repeat() {
        let config = AnalysisConfig {
            seed: Some(2024),
            ..AnalysisConfig::default()
        };
        let analyzer = Analyzer::new(ReferenceCatalog::builtin(), config).unwrap();
        let seq = NucleotideSequence::parse(crate::SAMPLE_SEQUENCE).unwrap();

        let a = analyzer.analyze(&seq).unwrap();
        let b = analyzer.analyze(&seq).unwrap();
        assert_eq!(a.species, b.species);
        assert_eq!(a.total_clusters, b.total_clusters);
    }

    #[test]
    fn test_scripted_analysis_uses_sequence_metrics() {
        let analyzer = Analyzer::default();
        let seq = NucleotideSequence::parse("GCGC").unwrap();
        let mut rng = ScriptedSource::new(vec![0.5]);

        let result = analyzer.analyze_with(&seq, &mut rng).unwrap();
        // gc 100, jitter floor(0.5 * 10) - 5 = 0
        assert!(result.species.iter().all(|s| s.sequence_info.gc_content == 100));
    }

    #[test]
    fn test_batch_matches_input_order_and_is_reproducible() {
        let config = AnalysisConfig {
            seed: Some(11),
            ..AnalysisConfig::default()
        };
        let analyzer = Analyzer::new(ReferenceCatalog::builtin(), config).unwrap();
        let sequences: Vec<NucleotideSequence> = ["A", "ACGT", "GGGGCCCC"]
            .iter()
            .map(|s| NucleotideSequence::parse(s).unwrap())
            .collect();

        let first = analyzer.analyze_batch(&sequences);
        let second = analyzer.analyze_batch(&sequences);
        assert_eq!(first.len(), 3);

        for ((a, b), seq) in first.iter().zip(&second).zip(&sequences) {
            let a = a.as_ref().unwrap();
            let b = b.as_ref().unwrap();
            assert_eq!(a.species, b.species);
            assert!(a.species.iter().all(|s| s.sequence_info.length == seq.len()));
        }
    }

    #[test]
    fn test_from_config_with_missing_catalog_file() {
        let mut config = Config::default();
        config.catalog.path = Some("/nonexistent/catalog.json".into());
        assert!(matches!(
            Analyzer::from_config(&config),
            Err(DeepmorphError::NotFound(_))
        ));
    }
}
