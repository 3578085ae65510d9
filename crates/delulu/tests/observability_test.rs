//! Tests for observability settings.

use delulu::ObservabilityConfig;

#[test]
fn test_builder_overrides() {
    let config = ObservabilityConfig::new("delulu-test")
        .with_log_level("delulu_narrative=debug")
        .with_json_logs(true);

    assert_eq!(config.service_name, "delulu-test");
    assert_eq!(config.log_level, "delulu_narrative=debug");
    assert!(config.json_logs);
    assert_eq!(config.service_version, env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_defaults_to_text_logs() {
    let config = ObservabilityConfig::default();

    assert_eq!(config.service_name, "delulu");
    assert!(!config.json_logs);
}
