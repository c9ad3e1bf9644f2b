use pdf_assistant::infrastructure::observability::TracingConfig;
use pdf_assistant::presentation::config::{Environment, LoggingSettings};

fn logging(json_format: bool) -> LoggingSettings {
    LoggingSettings {
        level: "debug".to_string(),
        json_format,
    }
}

#[test]
fn given_logging_settings_without_override_when_building_config_then_copies_level_and_format() {
    let config = TracingConfig::with_log_format(&logging(true), Environment::Prod, None);

    assert_eq!(config.environment, "prod");
    assert_eq!(config.directives, "debug");
    assert!(config.json_format);
}

#[test]
fn given_log_format_json_when_building_config_then_enables_json_output() {
    let config = TracingConfig::with_log_format(&logging(false), Environment::Local, Some("JSON"));

    assert!(config.json_format);
}

#[test]
fn given_log_format_text_when_building_config_then_overrides_json_setting() {
    let config = TracingConfig::with_log_format(&logging(true), Environment::Local, Some("text"));

    assert!(!config.json_format);
}
