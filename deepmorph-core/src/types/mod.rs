//! Shared value types

pub mod format;
pub mod normalization;

pub use format::OutputFormat;
pub use normalization::NormalizationMode;
