use std::path::PathBuf;

/// Get the DeepMorph home directory
/// Checks DEEPMORPH_HOME environment variable, falls back to ${HOME}/.deepmorph
pub fn deepmorph_home() -> PathBuf {
    if let Ok(path) = std::env::var("DEEPMORPH_HOME") {
        PathBuf::from(path)
    } else {
        let home = std::env::var("HOME").unwrap_or_else(|_| {
            std::env::var("USERPROFILE").unwrap_or_else(|_| ".".to_string())
        });
        PathBuf::from(home).join(".deepmorph")
    }
}

/// Default configuration file: DEEPMORPH_HOME/config.toml
pub fn config_path() -> PathBuf {
    deepmorph_home().join("config.toml")
}
