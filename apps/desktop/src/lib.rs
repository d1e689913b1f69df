use dioxus::desktop::{Config, WindowBuilder};
use dioxus::prelude::*;
use pvault::domain::config::AppConfig;
use pvault::domain::theme::ThemeSignal;
use pvault::kernel::paths::AppPaths;
use pvault::ui::STYLESHEET;
use tracing::info;

const VIEWPORT_META: &str =
    r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">"#;

/// Process-wide state shared with the view tree as root context.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub paths: AppPaths,
}

impl AppState {
    pub fn new(config: AppConfig, paths: AppPaths) -> Self {
        info!(data_dir = %paths.data_dir().display(), "Initializing state");
        Self { config, paths }
    }
}

#[derive(Debug)]
pub struct DesktopApp {
    title: String,
    width: f64,
    height: f64,
    theme: ThemeSignal,
    state: Option<AppState>,
}

impl Default for DesktopApp {
    fn default() -> Self {
        Self {
            title: "Prompt Vault".to_owned(),
            width: 1200.0,
            height: 800.0,
            theme: ThemeSignal::default(),
            state: None,
        }
    }
}

impl DesktopApp {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Window geometry and theme taken from the loaded configuration.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new()
            .with_title(config.window.title.clone())
            .with_size(config.window.width, config.window.height)
            .with_theme(config.appearance.theme)
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use = "This function does nothing unless you call `launch()` on it"]
    pub const fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use = "This function does nothing unless you call `launch()` on it"]
    pub const fn with_theme(mut self, theme: ThemeSignal) -> Self {
        self.theme = theme;
        self
    }

    /// Provides `state` as root context next to the theme signal.
    ///
    /// Views that need the loaded config or the data paths read it with
    /// `try_use_context::<AppState>()`. The hero view only reads [`ThemeSignal`].
    #[must_use = "This function does nothing unless you call `launch()` on it"]
    pub fn with_state(mut self, state: AppState) -> Self {
        self.state = Some(state);
        self
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub const fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    #[must_use]
    pub const fn theme(&self) -> ThemeSignal {
        self.theme
    }

    /// Extra markup for the webview `<head>`: viewport and the view stylesheet.
    #[must_use]
    pub fn custom_head(&self) -> String {
        format!("{VIEWPORT_META}{}", STYLESHEET.head_tag())
    }

    /// The entry point for launching the app. Blocks until the window closes.
    pub fn launch(self, root: fn() -> Element) {
        info!(title = %self.title, theme = %self.theme, "Launching desktop window");

        let window = WindowBuilder::new().with_title(&self.title).with_inner_size(
            dioxus::desktop::LogicalSize { width: self.width, height: self.height },
        );

        let cfg = Config::default().with_window(window).with_custom_head(self.custom_head());

        let mut builder = LaunchBuilder::desktop().with_cfg(cfg).with_context(self.theme);
        if let Some(state) = self.state {
            builder = builder.with_context(state);
        }
        builder.launch(root);
    }
}
