//! Diagnostic line rendering.
//!
//! This crate does not draw anything by itself: shapes emit line segments to a
//! [`DebugRenderer`] provided by the host application.

pub use self::debug_color::DebugColor;
#[cfg(feature = "std")]
pub use self::debug_renderer::{DebugLine, DebugLines};
pub use self::debug_renderer::DebugRenderer;

mod debug_color;
mod debug_renderer;
