//! Abundance normalization strategies

use serde::{Deserialize, Serialize};
use std::fmt;

/// How raw per-cluster abundances are turned into integer percentages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum NormalizationMode {
    /// Round each share independently; the total may drift from 100 by up to
    /// one point per cluster
    #[default]
    Independent,
    /// Hamilton apportionment; the total is exactly 100
    LargestRemainder,
}

impl fmt::Display for NormalizationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Independent => write!(f, "independent"),
            Self::LargestRemainder => write!(f, "largest-remainder"),
        }
    }
}
