// Config loading and validation tests

use netflow::config::AppConfig;
use netflow::counter_source::CounterSourceKind;
use std::time::Duration;

const VALID_CONFIG: &str = r#"
[monitoring]
sample_interval_ms = 500
error_log_interval_secs = 10
counter_source = "procfs"

[interfaces]
exclude = ["docker0", "virbr0"]
"#;

#[test]
fn test_config_loads_from_str() {
    let config = AppConfig::load_from_str(VALID_CONFIG).expect("load_from_str");
    assert_eq!(config.monitoring.sample_interval_ms, 500);
    assert_eq!(config.monitoring.error_log_interval_secs, 10);
    assert_eq!(config.monitoring.counter_source, CounterSourceKind::Procfs);
    assert_eq!(config.interfaces.exclude, vec!["docker0", "virbr0"]);
}

#[test]
fn test_config_defaults_when_omitted() {
    let config = AppConfig::load_from_str("").expect("empty config is valid");
    assert_eq!(config.monitoring.sample_interval_ms, 1000);
    assert_eq!(config.monitoring.error_log_interval_secs, 5);
    assert_eq!(config.monitoring.counter_source, CounterSourceKind::Sysinfo);
    assert!(config.interfaces.exclude.is_empty());
}

#[test]
fn test_config_partial_section_keeps_other_defaults() {
    let config = AppConfig::load_from_str("[monitoring]\nsample_interval_ms = 2000\n").unwrap();
    assert_eq!(config.monitoring.sample_interval_ms, 2000);
    assert_eq!(config.monitoring.error_log_interval_secs, 5);
}

#[test]
fn test_sampler_config_conversion() {
    let config = AppConfig::load_from_str(VALID_CONFIG).unwrap();
    let sampler = config.sampler_config();
    assert_eq!(sampler.interval, Duration::from_millis(500));
    assert_eq!(sampler.error_log_interval, Duration::from_secs(10));
}

#[test]
fn test_config_validation_rejects_sample_interval_zero() {
    let bad = VALID_CONFIG.replace("sample_interval_ms = 500", "sample_interval_ms = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("sample_interval_ms"));
}

#[test]
fn test_config_validation_rejects_error_log_interval_zero() {
    let bad = VALID_CONFIG.replace("error_log_interval_secs = 10", "error_log_interval_secs = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("error_log_interval_secs"));
}

#[test]
fn test_config_validation_rejects_empty_exclude_name() {
    let bad = VALID_CONFIG.replace("\"virbr0\"", "\" \"");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("interfaces.exclude"));
}

#[test]
fn test_config_rejects_unknown_counter_source() {
    let bad = VALID_CONFIG.replace("\"procfs\"", "\"wmi\"");
    assert!(AppConfig::load_from_str(&bad).is_err());
}

#[test]
fn test_config_validation_rejects_invalid_toml() {
    let err = AppConfig::load_from_str("not valid toml [[[").unwrap_err();
    assert!(!err.to_string().is_empty());
}

// Both env-var tests live in one function so they never race on CONFIG_FILE.
#[test]
fn test_config_load_via_env() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, VALID_CONFIG).unwrap();
    unsafe { std::env::set_var("CONFIG_FILE", path.to_str().unwrap()) };
    let result = AppConfig::load();

    let missing = dir.path().join("missing.toml");
    unsafe { std::env::set_var("CONFIG_FILE", missing.to_str().unwrap()) };
    let defaults = AppConfig::load();
    unsafe { std::env::remove_var("CONFIG_FILE") };

    let config = result.expect("load from CONFIG_FILE");
    assert_eq!(config.monitoring.sample_interval_ms, 500);
    let defaults = defaults.expect("missing file falls back to defaults");
    assert_eq!(defaults.monitoring.sample_interval_ms, 1000);
}
