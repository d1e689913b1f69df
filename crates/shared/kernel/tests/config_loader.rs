use pvault_kernel::config::{ConfigError, ConfigLoader, load_config, load_config_strict};
use pvault_kernel::domain::config::AppConfig;
use pvault_kernel::domain::theme::ThemeSignal;
use std::fs;
use tempfile::tempdir;

fn no_env() -> Vec<(String, String)> {
    Vec::new()
}

#[test]
fn missing_file_falls_back_to_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    let cfg: AppConfig =
        ConfigLoader::new().path(tmp.path().join("absent.toml")).env_vars(no_env()).load()?;

    assert_eq!(cfg.window.title, "Prompt Vault");
    assert_eq!(cfg.appearance.theme, ThemeSignal::System);
    Ok(())
}

#[test]
fn file_values_are_loaded() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    let file = tmp.path().join("prompt-vault.toml");
    fs::write(
        &file,
        r#"
[window]
title = "My Vault"

[appearance]
theme = "dark"

[logging]
level = "debug"
max_files = 3
"#,
    )?;

    let cfg: AppConfig = ConfigLoader::new().path(&file).env_vars(no_env()).load()?;
    assert_eq!(cfg.window.title, "My Vault");
    assert!((cfg.window.width - 1200.0).abs() < f64::EPSILON);
    assert_eq!(cfg.appearance.theme, ThemeSignal::Dark);
    assert_eq!(cfg.logging.level, "debug");
    assert_eq!(cfg.logging.max_files, 3);
    Ok(())
}

#[test]
fn environment_overrides_file() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    let file = tmp.path().join("prompt-vault.toml");
    fs::write(&file, "[appearance]\ntheme = \"light\"\n")?;

    let cfg: AppConfig = ConfigLoader::new()
        .path(&file)
        .env_vars([
            ("PVAULT__APPEARANCE__THEME", "dark"),
            ("PVAULT__WINDOW__TITLE", "From Env"),
            ("OTHER__WINDOW__TITLE", "ignored"),
        ])
        .load()?;

    assert_eq!(cfg.appearance.theme, ThemeSignal::Dark);
    assert_eq!(cfg.window.title, "From Env");
    Ok(())
}

#[test]
fn strict_loading_requires_the_file() {
    let tmp = tempdir().expect("temp dir");
    let err = load_config_strict::<AppConfig>(tmp.path().join("absent.toml"))
        .expect_err("missing file must fail");

    assert!(matches!(err, ConfigError::Config { context: Some(_), .. }));
    assert!(err.to_string().contains("Failed to build config"));
}

#[test]
fn malformed_values_report_deserialize_context() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    let file = tmp.path().join("broken.toml");
    fs::write(&file, "[appearance]\ntheme = \"sepia\"\n")?;

    let err = load_config::<AppConfig>(Some(&file)).expect_err("unknown theme must fail");
    assert!(err.to_string().contains("Failed to deserialize config"));
    Ok(())
}

#[test]
fn environment_overrides_typed_values() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    let cfg: AppConfig = ConfigLoader::new()
        .path(tmp.path().join("absent.toml"))
        .env_vars([
            ("PVAULT__WINDOW__WIDTH", "800"),
            ("PVAULT__WINDOW__HEIGHT", "600.5"),
            ("PVAULT__LOGGING__CONSOLE", "false"),
            ("PVAULT__LOGGING__JSON", "true"),
            ("PVAULT__LOGGING__MAX_FILES", "3"),
        ])
        .load()?;

    assert!((cfg.window.width - 800.0).abs() < f64::EPSILON);
    assert!((cfg.window.height - 600.5).abs() < f64::EPSILON);
    assert!(!cfg.logging.console);
    assert!(cfg.logging.json);
    assert_eq!(cfg.logging.max_files, 3);
    Ok(())
}

#[test]
fn theme_override_ignores_case() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    let cfg: AppConfig = ConfigLoader::new()
        .path(tmp.path().join("absent.toml"))
        .env_vars([("PVAULT__APPEARANCE__THEME", "Dark")])
        .load()?;

    assert_eq!(cfg.appearance.theme, ThemeSignal::Dark);
    Ok(())
}
