/// Integration tests for configuration loading and saving
use deepmorph_core::config::{default_config, load_config, save_config, Config};
use deepmorph_core::{DeepmorphError, NormalizationMode, OutputFormat};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_full_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");

    let content = r#"
[analysis]
known_count_min = 2
known_count_max = 4
novel_count_min = 1
novel_count_max = 1
known_confidence_min = 90
known_confidence_span = 10
novel_confidence_min = 50
novel_confidence_span = 20
abundance_min = 5
abundance_span = 20
gc_jitter_span = 4
gc_jitter_offset = 2
motif_jitter_span = 1
normalization = "independent"
seed = 1234

[output]
format = "json"
pretty = false

[catalog]
path = "/srv/deepmorph/catalog.json"
"#;
    fs::write(&path, content).unwrap();

    let config = load_config(&path).unwrap();
    assert_eq!(config.analysis.known_count_min, 2);
    assert_eq!(config.analysis.known_count_max, 4);
    assert_eq!(config.analysis.novel_count_max, 1);
    assert_eq!(config.analysis.known_confidence_min, 90);
    assert_eq!(config.analysis.gc_jitter_offset, 2);
    assert_eq!(config.analysis.motif_jitter_span, 1);
    assert_eq!(config.analysis.seed, Some(1234));
    assert_eq!(config.output.format, OutputFormat::Json);
    assert!(!config.output.pretty);
    assert_eq!(
        config.catalog.path.as_deref().and_then(|p| p.to_str()),
        Some("/srv/deepmorph/catalog.json")
    );
}

#[test]
fn test_unknown_normalization_mode_is_a_configuration_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[analysis]\nnormalization = \"banker\"\n").unwrap();

    assert!(matches!(
        load_config(&path),
        Err(DeepmorphError::Configuration(_))
    ));
}

#[test]
fn test_saved_default_config_reloads_identically() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");

    let config: Config = default_config();
    save_config(&path, &config).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("[analysis]"));
    assert!(written.contains("normalization = \"independent\""));

    let loaded = load_config(&path).unwrap();
    assert_eq!(loaded.analysis.normalization, NormalizationMode::Independent);
    assert_eq!(loaded.analysis.abundance_span, config.analysis.abundance_span);
    assert_eq!(loaded.output.format, config.output.format);
}
