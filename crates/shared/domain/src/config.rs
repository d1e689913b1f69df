use crate::theme::ThemeSignal;
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

/// Top-level application configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfigInner {
    pub window: WindowConfig,
    pub appearance: AppearanceConfig,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(flatten, default)]
    inner: Arc<AppConfigInner>,
}

impl Deref for AppConfig {
    type Target = AppConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for AppConfig {
    fn deref_mut(&mut self) -> &mut AppConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Desktop window geometry and title.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

/// Presentation preferences forwarded to the view.
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    pub theme: ThemeSignal,
}

/// Console and rolling-file logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level directive (`error`, `warn`, `info`, `debug`, `trace`).
    pub level: String,
    pub console: bool,
    pub file: bool,
    /// Prefix of the rolling log files (`<file_name>.<date>.log`).
    pub file_name: String,
    pub max_files: usize,
    pub json: bool,
    /// Extra module directives, e.g. `pvault=debug,dioxus=warn`.
    pub env_filter: Option<String>,
}

// --- Default ---

impl Default for WindowConfig {
    fn default() -> Self {
        Self { title: "Prompt Vault".to_owned(), width: 1200.0, height: 800.0 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            console: true,
            file: true,
            file_name: "access".to_owned(),
            max_files: 10,
            json: false,
            env_filter: None,
        }
    }
}
