//! # Views
//!
//! The hero banner shown on launch, described as a plain [`tree::Node`] value
//! and rendered through Dioxus by [`render::Hero`].
//!
//! The tree is a pure function of its (empty) input, so it can be inspected
//! without a virtual DOM:
//!
//! ```rust
//! use pvault_ui::hero::{hero, HEADING, TAGLINE};
//!
//! let tree = hero();
//! assert_eq!(tree.texts(), vec![HEADING, TAGLINE]);
//! ```

pub mod hero;
pub mod render;
pub mod style;
pub mod tree;

pub use pvault_domain::theme::ThemeSignal;
pub use render::{App, Hero};
pub use style::STYLESHEET;
