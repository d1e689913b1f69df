#![cfg_attr(all(not(debug_assertions), target_os = "windows"), windows_subsystem = "windows")]

use anyhow::Context;
use pvault::domain::config::AppConfig;
use pvault::kernel::APP_DIR_NAME;
use pvault::kernel::config::ConfigLoader;
use pvault::kernel::paths::AppPaths;
use pvault::ui::App;
use pvault_desktop::{AppState, DesktopApp};
use pvault_logger::Logger;
use std::path::PathBuf;
use tracing::info;

/// Overrides the config file location; the file must then exist.
const CONFIG_PATH_ENV: &str = "PVAULT_CONFIG";

fn main() -> anyhow::Result<()> {
    let paths = AppPaths::resolve(APP_DIR_NAME)?;
    paths.ensure()?;

    let explicit = std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from);
    let config_path = explicit.clone().unwrap_or_else(|| paths.config_file().to_path_buf());
    let config: AppConfig = ConfigLoader::new()
        .path(&config_path)
        .required(explicit.is_some())
        .load()
        .with_context(|| format!("Failed to load {}", config_path.display()))?;

    let _logger =
        Logger::from_config(env!("CARGO_PKG_NAME"), &config.logging, Some(paths.logs_dir()))?;
    info!(config = %config_path.display(), "Configuration loaded");

    let state = AppState::new(config, paths);

    DesktopApp::from_config(&state.config).with_state(state).launch(App);

    Ok(())
}
