use std::io::Write;

use pawsense_core::config::*;
use pawsense_core::errors::ConfigError;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = PawsenseConfig::from_toml("").unwrap();

    assert_eq!(config.prediction.default_max_depth, 2);
    assert_eq!(config.prediction.max_depth_cap, 6);
    assert_eq!(config.prediction.max_chain_nodes, 1_000_000);
    assert_eq!(config.prediction.default_top_n, 3);
    assert_eq!(config.prediction.min_path_probability, 0.0);

    assert!(config.ingest.subject.is_none());

    assert_eq!(config.simulation.subject_name, "Buddy");
    assert_eq!(config.simulation.start_date, "2025-05-01");
    assert_eq!(config.simulation.num_days, 90);
    assert!(config.simulation.seed.is_none());

    assert_eq!(config.observability.log_level, "info");
    assert!(!config.observability.json_output);

    assert!(config.validate().is_ok());
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[prediction]
default_max_depth = 4

[ingest]
subject = "Rex"
"#;
    let config = PawsenseConfig::from_toml(toml).unwrap();
    assert_eq!(config.prediction.default_max_depth, 4);
    assert_eq!(config.prediction.max_depth_cap, 6); // default
    assert_eq!(config.ingest.subject.as_deref(), Some("Rex"));
    assert_eq!(config.simulation.num_days, 90);
}

#[test]
fn config_serde_roundtrip() {
    let mut config = PawsenseConfig::default();
    config.simulation.seed = Some(7);
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = PawsenseConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped.simulation.seed, Some(7));
    assert_eq!(
        roundtripped.prediction.default_max_depth,
        config.prediction.default_max_depth
    );
}

#[test]
fn validate_rejects_zero_default_depth() {
    let config = PawsenseConfig::from_toml("[prediction]\ndefault_max_depth = 0").unwrap();
    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "prediction.default_max_depth"));
}

#[test]
fn validate_rejects_default_depth_above_cap() {
    let config = PawsenseConfig::from_toml(
        "[prediction]\ndefault_max_depth = 5\nmax_depth_cap = 3",
    )
    .unwrap();
    assert!(config.validate().is_err());
}

#[test]
fn validate_rejects_zero_node_budget() {
    let config = PawsenseConfig::from_toml("[prediction]\nmax_chain_nodes = 0").unwrap();
    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "prediction.max_chain_nodes"));
}

#[test]
fn validate_rejects_out_of_range_pruning_threshold() {
    let config = PawsenseConfig::from_toml("[prediction]\nmin_path_probability = 1.0").unwrap();
    assert!(config.validate().is_err());
    let config = PawsenseConfig::from_toml("[prediction]\nmin_path_probability = -0.1").unwrap();
    assert!(config.validate().is_err());
}

#[test]
fn load_reports_missing_file() {
    let err = PawsenseConfig::load(std::path::Path::new("/definitely/not/here.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound { .. }));
}

#[test]
fn load_reports_parse_errors_with_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[prediction\ndefault_max_depth = ").unwrap();
    let err = PawsenseConfig::load(file.path()).unwrap_err();
    match err {
        ConfigError::ParseError { path, .. } => {
            assert_eq!(path, file.path().display().to_string())
        }
        other => panic!("expected ParseError, got {other:?}"),
    }
}

#[test]
fn load_reads_and_validates_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[simulation]\nseed = 42\nnum_days = 3").unwrap();
    let config = PawsenseConfig::load(file.path()).unwrap();
    assert_eq!(config.simulation.seed, Some(42));
    assert_eq!(config.simulation.num_days, 3);
}
