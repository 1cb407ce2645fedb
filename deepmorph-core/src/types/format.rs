//! Output format types for formatting results

use serde::{Deserialize, Serialize};

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output
    Json,
}

impl OutputFormat {
    /// Check if format is machine-readable
    pub fn is_machine_readable(&self) -> bool {
        matches!(self, Self::Json)
    }
}
