use pipelinr::config::{ConfigError, EvaluatorConfig, TraceConfig};
use pipelinr::logging::config::{parse_level, LogConfig};
use pipelinr::logging::features::LogFeature;
use tempfile::tempdir;

#[test]
fn test_empty_toml_gives_defaults() {
    let config = EvaluatorConfig::from_toml_str("").unwrap();
    assert_eq!(config.trace, TraceConfig::default());
    assert_eq!(config.logging.default_level, "INFO");
}

#[test]
fn test_partial_sections_keep_remaining_defaults() {
    let config = EvaluatorConfig::from_toml_str(
        r#"
[trace]
include_inputs = false

[logging]
default_level = "DEBUG"
"#,
    )
    .unwrap();
    assert!(!config.trace.include_inputs);
    assert_eq!(config.trace.max_value_chars, TraceConfig::default().max_value_chars);
    assert_eq!(config.logging.default_level, "DEBUG");
}

#[test]
fn test_invalid_level_is_rejected() {
    let err = EvaluatorConfig::from_toml_str("[logging]\ndefault_level = \"LOUD\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidLevel(_)));
}

#[test]
fn test_invalid_feature_level_is_rejected() {
    let err = EvaluatorConfig::from_toml_str(
        "[logging]\ndefault_level = \"INFO\"\n[logging.features]\nevaluate = \"CHATTY\"\n",
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidFeatureLevel(_, _)));
}

#[test]
fn test_feature_levels_ignore_case() {
    let config = EvaluatorConfig::from_toml_str(
        "[logging]\ndefault_level = \"debug\"\n[logging.features]\nevaluate = \"debug\"\n",
    )
    .unwrap();
    assert_eq!(config.logging.features.get("evaluate").map(String::as_str), Some("debug"));
}

#[test]
fn test_malformed_toml() {
    let err = EvaluatorConfig::from_toml_str("[trace\n").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_save_and_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("pipelinr.toml");

    let mut config = EvaluatorConfig::default();
    config.trace.max_value_chars = 64;
    config.logging.default_level = "WARN".to_string();
    config.save_to_file(&path).unwrap();

    let loaded = EvaluatorConfig::from_file(&path).unwrap();
    assert_eq!(loaded.trace.max_value_chars, 64);
    assert_eq!(loaded.logging.default_level, "WARN");
}

#[test]
fn test_missing_file() {
    let dir = tempdir().unwrap();
    let err = EvaluatorConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_default_log_config_covers_every_feature() {
    let config = LogConfig::default();
    for feature in LogFeature::ALL {
        assert!(config.features.contains_key(feature.name()));
    }
    assert!(config.validate().is_ok());
}

#[test]
fn test_level_names() {
    assert_eq!(parse_level("debug").unwrap(), log::LevelFilter::Debug);
    assert_eq!(parse_level("OFF").unwrap(), log::LevelFilter::Off);
    assert!(parse_level("verbose").is_err());
}

#[test]
fn test_feature_targets() {
    assert_eq!(LogFeature::Evaluate.target(), "pipelinr::evaluate");
    assert_eq!(LogFeature::from_name("adapter"), Some(LogFeature::Adapter));
    assert_eq!(LogFeature::from_name("nope"), None);
}
