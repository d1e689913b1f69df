use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::DEFAULT_CONFIG_STEM;

const LOGS_DIR: &str = "logs";
const CONFIG_EXTENSION: &str = "toml";

#[derive(Debug, thiserror::Error)]
pub enum PathsError {
    /// The platform exposes no per-user local data directory.
    #[error("No local data directory available on this platform")]
    NoDataDir,

    #[error("I/O error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}

/// On-disk layout of the application's per-user data.
///
/// ```text
/// <data_local_dir>/<app>/
/// ├── prompt-vault.toml
/// └── logs/
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    data_dir: PathBuf,
    logs_dir: PathBuf,
    config_file: PathBuf,
}

impl AppPaths {
    /// Resolves the layout under the platform's local data directory.
    ///
    /// # Errors
    /// Returns [`PathsError::NoDataDir`] when the platform has no such directory.
    pub fn resolve(app_name: &str) -> Result<Self, PathsError> {
        let base = dirs::data_local_dir().ok_or(PathsError::NoDataDir)?;
        Ok(Self::at(base.join(app_name)))
    }

    /// Builds the layout under an explicit root.
    #[must_use]
    pub fn at(root: impl Into<PathBuf>) -> Self {
        let data_dir = root.into();
        Self {
            logs_dir: data_dir.join(LOGS_DIR),
            config_file: data_dir.join(DEFAULT_CONFIG_STEM).with_extension(CONFIG_EXTENSION),
            data_dir,
        }
    }

    /// Creates the data and log directories. Existing directories are left untouched.
    ///
    /// # Errors
    /// Returns [`PathsError::Io`] if a directory cannot be created.
    pub fn ensure(&self) -> Result<&Self, PathsError> {
        for dir in [&self.data_dir, &self.logs_dir] {
            fs::create_dir_all(dir).map_err(|source| PathsError::Io {
                source,
                context: Some(format!("Failed to create path: {}", dir.display()).into()),
            })?;
        }
        debug!(path = %self.data_dir.display(), "Application directories ready");
        Ok(self)
    }

    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    #[must_use]
    pub fn logs_dir(&self) -> &Path {
        &self.logs_dir
    }

    #[must_use]
    pub fn config_file(&self) -> &Path {
        &self.config_file
    }
}
