use config::{Config, Environment, File, Map};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default file stem looked up in the working directory.
pub const DEFAULT_CONFIG_STEM: &str = "prompt-vault";
/// Environment prefix for overrides (`PVAULT__WINDOW__TITLE`).
pub const ENV_PREFIX: &str = "PVAULT";
const ENV_SEPARATOR: &str = "__";

/// Custom error type for config loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

pub trait ConfigErrorExt<T> {
    /// Attaches a human-readable context to the error.
    ///
    /// # Errors
    /// Returns the original error, wrapped in [`ConfigError`].
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ConfigError>;
}

impl<T> ConfigErrorExt<T> for Result<T, config::ConfigError> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ConfigError> {
        self.map_err(|source| ConfigError::Config { source, context: Some(context.into()) })
    }
}

impl From<config::ConfigError> for ConfigError {
    fn from(source: config::ConfigError) -> Self {
        Self::Config { source, context: None }
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}

/// Layered configuration loader: an optional file, then environment overrides.
///
/// Nested keys are addressed with double underscores, so `PVAULT__LOGGING__LEVEL`
/// maps to `logging.level`. Values that look like numbers or booleans are typed
/// before deserialization; `#[serde(flatten)]` targets cannot coerce strings later.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    path: PathBuf,
    required: bool,
    prefix: Cow<'static, str>,
    env: Option<Map<String, String>>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CONFIG_STEM),
            required: false,
            prefix: Cow::Borrowed(ENV_PREFIX),
            env: None,
        }
    }
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the file source. The format is taken from the extension; a bare stem
    /// probes every supported extension.
    #[must_use = "The loader must be configured before calling `load()`"]
    pub fn path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = path.as_ref().to_path_buf();
        self
    }

    /// Fails the load when the file is missing instead of falling back to defaults.
    #[must_use = "The loader must be configured before calling `load()`"]
    pub const fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    #[must_use = "The loader must be configured before calling `load()`"]
    pub fn env_prefix(mut self, prefix: impl Into<Cow<'static, str>>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Replaces the process environment with an explicit variable map.
    #[must_use = "The loader must be configured before calling `load()`"]
    pub fn env_vars<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.env = Some(vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Builds the layered sources and deserializes them into `T`.
    ///
    /// # Errors
    /// Returns [`ConfigError::Config`] if a required file is missing, a source is
    /// malformed, or the merged values do not match `T`.
    pub fn load<T>(self) -> Result<T, ConfigError>
    where
        T: DeserializeOwned,
    {
        debug!(path = %self.path.display(), required = self.required, "Loading config");

        let environment = Environment::with_prefix(&self.prefix)
            .prefix_separator(ENV_SEPARATOR)
            .separator(ENV_SEPARATOR)
            .try_parsing(true)
            .source(self.env);

        let config = Config::builder()
            .add_source(File::from(self.path.as_path()).required(self.required))
            .add_source(environment)
            .build()
            .context("Failed to build config")?;

        debug!("Config sources merged");

        config.try_deserialize::<T>().context("Failed to deserialize config")
    }
}

/// Loads `T` from an optional file plus `PVAULT__*` environment overrides.
///
/// A missing file is not an error: every field falls back to its default.
/// Defaults to the `prompt-vault` stem in the working directory.
///
/// # Errors
/// Returns [`ConfigError`] if the file is malformed or deserialization fails.
///
/// # Example
/// ```rust
/// use pvault_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    path.map_or_else(ConfigLoader::new, |p| ConfigLoader::new().path(p)).load()
}

/// Same as [`load_config`], but the file must exist.
///
/// # Errors
/// Returns [`ConfigError`] if the file is missing, malformed, or does not match `T`.
pub fn load_config_strict<T>(path: impl AsRef<Path>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    ConfigLoader::new().path(path).required(true).load()
}
