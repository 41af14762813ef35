use super::*;

#[test]
fn cli_overrides_take_highest_precedence() {
    let mut raw = RawSettings::default();
    raw.logging.level = Some("info".to_string());
    raw.toc.label = Some("Contents".to_string());

    let overrides = SettingsOverrides {
        log_level: Some("debug".to_string()),
        toc_label: Some("In this article".to_string()),
        ..Default::default()
    };

    raw.apply_overrides(&overrides);
    let settings = Settings::from_raw(raw).expect("valid settings");

    assert_eq!(settings.logging.level, LevelFilter::DEBUG);
    assert_eq!(settings.toc.label, "In this article");
}

#[test]
fn label_defaults_when_unset() {
    let settings = Settings::from_raw(RawSettings::default()).expect("valid settings");
    assert_eq!(settings.toc.label, DEFAULT_TOC_LABEL);
    assert_eq!(settings.logging.level, LevelFilter::INFO);
    assert_eq!(settings.logging.format, LogFormat::Compact);
}

#[test]
fn cli_json_logging_enforces_format() {
    let mut raw = RawSettings::default();
    let overrides = SettingsOverrides {
        log_json: Some(true),
        ..Default::default()
    };

    raw.apply_overrides(&overrides);
    let settings = Settings::from_raw(raw).expect("valid settings");

    assert_eq!(settings.logging.format, LogFormat::Json);
}

#[test]
fn logging_format_is_case_insensitive() {
    let mut raw = RawSettings::default();
    raw.logging.format = Some("JSON".to_string());

    let settings = Settings::from_raw(raw).expect("valid settings");
    assert_eq!(settings.logging.format, LogFormat::Json);
}

#[test]
fn invalid_logging_level_is_rejected() {
    let mut raw = RawSettings::default();
    raw.logging.level = Some("verbose".to_string());

    assert!(matches!(
        Settings::from_raw(raw),
        Err(ConfigError::InvalidLogLevel { .. })
    ));
}

#[test]
fn invalid_logging_format_is_rejected() {
    let mut raw = RawSettings::default();
    raw.logging.format = Some("pretty".to_string());

    assert!(matches!(
        Settings::from_raw(raw),
        Err(ConfigError::InvalidLogFormat { .. })
    ));
}

#[test]
fn blank_label_is_rejected() {
    let mut raw = RawSettings::default();
    raw.toc.label = Some("   ".to_string());

    assert!(matches!(
        Settings::from_raw(raw),
        Err(ConfigError::EmptyTocLabel)
    ));
}
