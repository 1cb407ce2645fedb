//! Core utilities and types shared across all DeepMorph crates

pub mod config;
pub mod error;
pub mod system;
pub mod types;

// Re-export commonly used types
pub use config::{load_config, load_or_default, save_config, Config};
pub use error::{DeepmorphError, DeepmorphResult};

pub use types::{NormalizationMode, OutputFormat};

pub use system::{config_path, deepmorph_home};

/// Version information for the DeepMorph project
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
