use super::normalization::normalize_abundances;
use super::random::RandomSource;
use super::types::{AnalysisResult, ClusterAssignment, ClusterSequenceInfo, ClusterStatus};
use crate::catalog::{OrganismProfile, ReferenceCatalog};
use crate::sequence::SequenceMetrics;
use deepmorph_core::config::AnalysisConfig;
use deepmorph_core::{DeepmorphError, DeepmorphResult};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Samples catalog profiles into clusters and scores them.
///
/// Draw order per call: known count, novel count, known shuffle, novel
/// shuffle, then for each selected profile in selection order: confidence,
/// raw abundance, GC jitter, motif jitter.
#[derive(Debug, Clone)]
pub struct ClusterAssigner {
    catalog: ReferenceCatalog,
    config: AnalysisConfig,
}

/// A profile picked for this run, before scoring
struct Selection<'a> {
    profile: &'a OrganismProfile,
    status: ClusterStatus,
}

impl ClusterAssigner {
    pub fn new(catalog: ReferenceCatalog, config: AnalysisConfig) -> DeepmorphResult<Self> {
        config.validate()?;
        Ok(Self { catalog, config })
    }

    pub fn catalog(&self) -> &ReferenceCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn assign<R: RandomSource>(
        &self,
        metrics: &SequenceMetrics,
        rng: &mut R,
    ) -> DeepmorphResult<AnalysisResult> {
        self.assign_since(metrics, rng, Instant::now())
    }

    /// As [`assign`](Self::assign), with `processing_time` measured from
    /// `started` so work done before the call (the metrics pass) is counted
    pub fn assign_since<R: RandomSource>(
        &self,
        metrics: &SequenceMetrics,
        rng: &mut R,
        started: Instant,
    ) -> DeepmorphResult<AnalysisResult> {
        let cfg = &self.config;

        let known_drawn = draw_count(rng, cfg.known_count_min, cfg.known_count_max);
        let novel_drawn = draw_count(rng, cfg.novel_count_min, cfg.novel_count_max);

        let known_count = clamp_to_catalog(known_drawn, self.catalog.known().len(), "known");
        let novel_count = clamp_to_catalog(novel_drawn, self.catalog.novel().len(), "novel");
        let total_clusters = known_count + novel_count;

        if total_clusters == 0 {
            return Err(DeepmorphError::CatalogExhausted(format!(
                "drew {} known and {} novel clusters but the catalog holds {} known and {} novel profiles",
                known_drawn,
                novel_drawn,
                self.catalog.known().len(),
                self.catalog.novel().len()
            )));
        }
        debug!(
            "Sampling {} known and {} novel clusters",
            known_count, novel_count
        );

        let selected = self.select(rng, known_count, novel_count);

        let mut raw_abundances = Vec::with_capacity(total_clusters);
        let mut species = Vec::with_capacity(total_clusters);

        for (index, selection) in selected.iter().enumerate() {
            let confidence = match selection.status {
                ClusterStatus::Known => {
                    cfg.known_confidence_min + draw(rng, cfg.known_confidence_span)
                }
                ClusterStatus::Novel => {
                    cfg.novel_confidence_min + draw(rng, cfg.novel_confidence_span)
                }
            };
            raw_abundances.push(cfg.abundance_min + draw(rng, cfg.abundance_span));

            let sequence_info = self.perturb_metrics(rng, metrics, total_clusters);

            species.push(ClusterAssignment {
                id: format!("species-{}", index),
                cluster_name: cluster_label(index),
                profile: selection.profile.clone(),
                status: selection.status,
                confidence,
                abundance: 0,
                sequence_info,
            });
        }

        let abundances = normalize_abundances(&raw_abundances, cfg.normalization);
        for (cluster, abundance) in species.iter_mut().zip(abundances) {
            cluster.abundance = abundance;
        }

        // sort_by is stable: equal confidences keep selection order
        species.sort_by(|a, b| b.confidence.cmp(&a.confidence));

        let processing_time = started.elapsed().as_secs().max(1);

        let result = AnalysisResult {
            total_clusters,
            known_species: known_count,
            novel_candidates: novel_count,
            processing_time,
            species,
        };

        info!(
            "Assigned {} clusters ({} known, {} novel), abundance total {}",
            result.total_clusters,
            result.known_species,
            result.novel_candidates,
            result.abundance_total()
        );

        Ok(result)
    }

    /// Shuffle each collection and take the leading entries, known first
    fn select<R: RandomSource>(
        &self,
        rng: &mut R,
        known_count: usize,
        novel_count: usize,
    ) -> Vec<Selection<'_>> {
        let mut known: Vec<&OrganismProfile> = self.catalog.known().iter().collect();
        let mut novel: Vec<&OrganismProfile> = self.catalog.novel().iter().collect();
        rng.shuffle(&mut known);
        rng.shuffle(&mut novel);

        let known = known.into_iter().take(known_count).map(|profile| Selection {
            profile,
            status: ClusterStatus::Known,
        });
        let novel = novel.into_iter().take(novel_count).map(|profile| Selection {
            profile,
            status: ClusterStatus::Novel,
        });

        known.chain(novel).collect()
    }

    fn perturb_metrics<R: RandomSource>(
        &self,
        rng: &mut R,
        global: &SequenceMetrics,
        total_clusters: usize,
    ) -> ClusterSequenceInfo {
        let cfg = &self.config;
        let mut info = ClusterSequenceInfo::from_metrics(global);

        info.gc_content += draw(rng, cfg.gc_jitter_span) as i64 - cfg.gc_jitter_offset as i64;

        let motif_share = global.conserved_motif_count / total_clusters;
        info.conserved_motif_count = motif_share + draw(rng, cfg.motif_jitter_span) as usize;

        info
    }
}

impl Default for ClusterAssigner {
    /// Built-in catalog with the default sampling ranges
    fn default() -> Self {
        Self {
            catalog: ReferenceCatalog::builtin(),
            config: AnalysisConfig::default(),
        }
    }
}

fn draw<R: RandomSource>(rng: &mut R, span: u32) -> u32 {
    rng.pick(span as usize) as u32
}

fn draw_count<R: RandomSource>(rng: &mut R, min: usize, max: usize) -> usize {
    min + rng.pick(max - min + 1)
}

fn clamp_to_catalog(drawn: usize, available: usize, kind: &str) -> usize {
    if drawn > available {
        warn!(
            "Requested {} {} clusters but the catalog only holds {}; clamping",
            drawn, kind, available
        );
        available
    } else {
        drawn
    }
}

/// `Species-A` .. `Species-Z`, then `Species-AA`, `Species-AB`, ...
pub fn cluster_label(index: usize) -> String {
    let mut letters = Vec::new();
    let mut n = index + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push((b'A' + rem as u8) as char);
        n = (n - 1) / 26;
    }
    let suffix: String = letters.into_iter().rev().collect();
    format!("Species-{}", suffix)
}
