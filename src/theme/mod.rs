//! Theme data model: builtin themes, registry, and OS appearance mode.
//!
//! This module provides:
//!
//! - [`Theme`]: id, display label, and the palette used to draw the widget
//! - [`ThemeRegistry`]: ordered unique-id collection with normalization
//! - [`ColorMode`]: light or dark OS appearance, with a test override

mod builtin;
mod mode;
mod registry;
#[allow(clippy::module_inception)]
mod theme;

pub use mode::{detect_color_mode, set_mode_detector, ColorMode};
pub use registry::{RegistryError, ThemeRegistry, DEFAULT_THEME};
pub use theme::Theme;
