//! Facade crate for Prompt Vault.
//! Re-exports domain/kernel primitives and, with the `client` feature, the views.
//! Keep this crate thin: it composes other crates and holds no logic of its own.
//!
//! ## Usage
//! - Add `pvault` with the `client` feature from a host application.
//! - Mount [`ui::App`] and provide a [`domain::theme::ThemeSignal`] as root context.

pub use pvault_domain as domain;
pub use pvault_kernel as kernel;
#[cfg(feature = "client")]
pub use pvault_ui as ui;

/// Feature registry for runtime introspection.
pub mod features {
    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "client")]
        "client",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}
