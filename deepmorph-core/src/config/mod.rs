//! Configuration types for DeepMorph

use crate::types::{NormalizationMode, OutputFormat};
use crate::DeepmorphError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Sampling ranges used by the cluster assignment engine.
///
/// Every `*_span` is the number of distinct integer outcomes starting at the
/// matching `*_min`, so a confidence is drawn as `min + floor(u * span)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default = "default_known_count_min")]
    pub known_count_min: usize,
    #[serde(default = "default_known_count_max")]
    pub known_count_max: usize,
    #[serde(default = "default_novel_count_min")]
    pub novel_count_min: usize,
    #[serde(default = "default_novel_count_max")]
    pub novel_count_max: usize,
    #[serde(default = "default_known_confidence_min")]
    pub known_confidence_min: u32,
    #[serde(default = "default_known_confidence_span")]
    pub known_confidence_span: u32,
    #[serde(default = "default_novel_confidence_min")]
    pub novel_confidence_min: u32,
    #[serde(default = "default_novel_confidence_span")]
    pub novel_confidence_span: u32,
    #[serde(default = "default_abundance_min")]
    pub abundance_min: u32,
    #[serde(default = "default_abundance_span")]
    pub abundance_span: u32,
    #[serde(default = "default_gc_jitter_span")]
    pub gc_jitter_span: u32,
    #[serde(default = "default_gc_jitter_offset")]
    pub gc_jitter_offset: i32,
    #[serde(default = "default_motif_jitter_span")]
    pub motif_jitter_span: u32,
    #[serde(default)]
    pub normalization: NormalizationMode,
    /// Fixed seed for reproducible runs; absent means OS-seeded
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CatalogConfig {
    /// JSON reference catalog replacing the built-in one
    #[serde(default)]
    pub path: Option<PathBuf>,
}

// Default value functions
fn default_known_count_min() -> usize { 3 }
fn default_known_count_max() -> usize { 5 }
fn default_novel_count_min() -> usize { 2 }
fn default_novel_count_max() -> usize { 3 }
fn default_known_confidence_min() -> u32 { 85 }
fn default_known_confidence_span() -> u32 { 15 }
fn default_novel_confidence_min() -> u32 { 60 }
fn default_novel_confidence_span() -> u32 { 25 }
fn default_abundance_min() -> u32 { 10 }
fn default_abundance_span() -> u32 { 40 }
fn default_gc_jitter_span() -> u32 { 10 }
fn default_gc_jitter_offset() -> i32 { 5 }
fn default_motif_jitter_span() -> u32 { 3 }
fn default_pretty() -> bool { true }

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            known_count_min: default_known_count_min(),
            known_count_max: default_known_count_max(),
            novel_count_min: default_novel_count_min(),
            novel_count_max: default_novel_count_max(),
            known_confidence_min: default_known_confidence_min(),
            known_confidence_span: default_known_confidence_span(),
            novel_confidence_min: default_novel_confidence_min(),
            novel_confidence_span: default_novel_confidence_span(),
            abundance_min: default_abundance_min(),
            abundance_span: default_abundance_span(),
            gc_jitter_span: default_gc_jitter_span(),
            gc_jitter_offset: default_gc_jitter_offset(),
            motif_jitter_span: default_motif_jitter_span(),
            normalization: NormalizationMode::default(),
            seed: None,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            pretty: default_pretty(),
        }
    }
}

impl AnalysisConfig {
    /// Reject ranges the engine cannot sample from
    pub fn validate(&self) -> Result<(), DeepmorphError> {
        if self.known_count_min > self.known_count_max {
            return Err(DeepmorphError::Configuration(format!(
                "known_count_min ({}) exceeds known_count_max ({})",
                self.known_count_min, self.known_count_max
            )));
        }
        if self.novel_count_min > self.novel_count_max {
            return Err(DeepmorphError::Configuration(format!(
                "novel_count_min ({}) exceeds novel_count_max ({})",
                self.novel_count_min, self.novel_count_max
            )));
        }

        let spans = [
            ("known_confidence_span", self.known_confidence_span),
            ("novel_confidence_span", self.novel_confidence_span),
            ("abundance_span", self.abundance_span),
            ("gc_jitter_span", self.gc_jitter_span),
            ("motif_jitter_span", self.motif_jitter_span),
        ];
        for (name, span) in spans {
            if span == 0 {
                return Err(DeepmorphError::Configuration(format!(
                    "{} must be at least 1",
                    name
                )));
            }
        }

        if self.known_count_max == 0 && self.novel_count_max == 0 {
            return Err(DeepmorphError::Configuration(
                "known_count_max and novel_count_max are both 0; no clusters would be drawn"
                    .to_string(),
            ));
        }

        let count_ranges = [
            ("known_count", self.known_count_min, self.known_count_max),
            ("novel_count", self.novel_count_min, self.novel_count_max),
        ];
        for (name, min, max) in count_ranges {
            if (max - min).checked_add(1).is_none() {
                return Err(DeepmorphError::Configuration(format!(
                    "{}_min..{}_max ({}..{}) is too wide",
                    name, name, min, max
                )));
            }
        }

        let bounded = [
            ("known_confidence", self.known_confidence_min, self.known_confidence_span),
            ("novel_confidence", self.novel_confidence_min, self.novel_confidence_span),
            ("abundance", self.abundance_min, self.abundance_span),
        ];
        for (name, min, span) in bounded {
            if min.checked_add(span).is_none() {
                return Err(DeepmorphError::Configuration(format!(
                    "{}_min + {}_span ({} + {}) overflows",
                    name, name, min, span
                )));
            }
        }

        if self.abundance_min == 0 {
            return Err(DeepmorphError::Configuration(
                "abundance_min must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), DeepmorphError> {
        self.analysis.validate()
    }
}

pub fn default_config() -> Config {
    Config::default()
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, DeepmorphError> {
    let contents = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)
        .map_err(|e| DeepmorphError::Configuration(format!("Failed to parse config: {}", e)))?;
    config.validate()?;
    Ok(config)
}

/// Load the config at `path`, or defaults when the file does not exist
pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Config, DeepmorphError> {
    let path = path.as_ref();
    if path.exists() {
        load_config(path)
    } else {
        tracing::debug!("No config at {}, using defaults", path.display());
        Ok(Config::default())
    }
}

pub fn save_config<P: AsRef<Path>>(path: P, config: &Config) -> Result<(), DeepmorphError> {
    let contents = toml::to_string_pretty(config)
        .map_err(|e| DeepmorphError::Configuration(format!("Failed to serialize config: {}", e)))?;
    if let Some(parent) = path.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, contents)?;
    Ok(())
}
