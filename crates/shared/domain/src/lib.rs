//! # Domain Models
//!
//! Pure data types shared by the view, the kernel and the desktop host.
//! Keep it lean: no I/O, no rendering, just data and simple helpers.

pub mod config;
pub mod theme;
