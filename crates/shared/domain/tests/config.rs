use pvault_domain::config::{AppConfig, LoggingConfig, WindowConfig};
use pvault_domain::theme::ThemeSignal;
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let window = WindowConfig::default();
    assert_eq!(window.title, "Prompt Vault");
    assert!((window.width - 1200.0).abs() < f64::EPSILON);
    assert!((window.height - 800.0).abs() < f64::EPSILON);

    let logging = LoggingConfig::default();
    assert_eq!(logging.level, "info");
    assert_eq!(logging.file_name, "access");
    assert_eq!(logging.max_files, 10);
    assert!(logging.console);
    assert!(logging.file);
    assert!(logging.env_filter.is_none());

    let cfg = AppConfig::default();
    assert_eq!(cfg.appearance.theme, ThemeSignal::System);
}

#[test]
fn app_config_deserializes() {
    let raw = json!({
        "window": { "title": "Vault", "width": 640.0, "height": 480.0 },
        "appearance": { "theme": "dark" },
        "logging": { "level": "debug", "file": false, "env_filter": "pvault=trace" }
    });

    let cfg: AppConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.window.title, "Vault");
    assert_eq!(cfg.appearance.theme, ThemeSignal::Dark);
    assert_eq!(cfg.logging.level, "debug");
    assert!(!cfg.logging.file);
    assert!(cfg.logging.console, "unset fields keep their defaults");
    assert_eq!(cfg.logging.env_filter.as_deref(), Some("pvault=trace"));
}

#[test]
fn partial_config_keeps_section_defaults() {
    let cfg: AppConfig =
        serde_json::from_value(json!({ "appearance": { "theme": "auto" } })).expect("partial");
    assert_eq!(cfg.appearance.theme, ThemeSignal::System);
    assert_eq!(cfg.window, WindowConfig::default());
    assert_eq!(cfg.logging, LoggingConfig::default());
}

#[test]
fn unknown_theme_is_rejected() {
    let result = serde_json::from_value::<AppConfig>(json!({ "appearance": { "theme": "sepia" } }));
    assert!(result.is_err());
}

#[test]
fn deref_mut_clones_on_write() {
    let original = AppConfig::default();
    let mut edited = original.clone();
    edited.window.title = "Edited".to_owned();

    assert_eq!(original.window.title, "Prompt Vault");
    assert_eq!(edited.window.title, "Edited");
}

#[test]
fn theme_deserializes_case_insensitively() {
    for (raw, expected) in
        [("Dark", ThemeSignal::Dark), ("LIGHT", ThemeSignal::Light), ("Auto", ThemeSignal::System)]
    {
        let cfg: AppConfig =
            serde_json::from_value(json!({ "appearance": { "theme": raw } })).expect(raw);
        assert_eq!(cfg.appearance.theme, expected, "theme {raw}");
    }
}
