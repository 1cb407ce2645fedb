//! System-level utilities

pub mod paths;

pub use paths::{config_path, deepmorph_home};
