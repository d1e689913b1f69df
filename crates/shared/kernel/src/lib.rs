//! Kernel utilities shared by the desktop host.
//! Keep this crate lightweight: configuration loading and on-disk layout only.
//!
//! ## Config loading (non-wasm)
//! ```rust,ignore
//! use pvault_kernel::config::load_config;
//! use pvault_kernel::domain::config::AppConfig;
//!
//! let cfg: AppConfig = load_config(Some("prompt-vault.toml"))?;
//! ```
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
#[cfg(not(target_arch = "wasm32"))]
pub mod paths;

pub use pvault_domain as domain;

/// Directory name used under the platform data directory.
pub const APP_DIR_NAME: &str = "prompt-vault";
