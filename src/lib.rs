//! Theme-selection widget for terminal headers.
//!
//! tintbar drops a theme selector into a host application's header
//! region, persists the user's choice, and follows the OS light/dark
//! appearance when no explicit choice exists.
//!
//! This crate provides:
//!
//! - [`ThemePicker`]: startup resolution, apply/persist, change broadcast
//! - [`Theme`] and [`ThemeRegistry`]: the ten builtin themes
//! - [`Selector`]: the rendered selection control
//! - [`ChoiceStore`] and [`Surface`]: the storage and host seams
//!
//! The host wires three things: a [`Surface`] with a header region, a
//! [`ChoiceStore`] (use [`FileStore`] for per-user persistence), and its
//! own input handling that routes selections to [`ThemePicker::select`].
//!
//! # Example
//!
//! ```rust
//! use tintbar::{MemoryStore, Selector, Surface, ThemePicker};
//!
//! struct Header {
//!     applied: Vec<String>,
//! }
//!
//! impl Surface for Header {
//!     fn mount(&mut self, _selector: &Selector) -> bool {
//!         true
//!     }
//!     fn apply_theme(&mut self, id: &str) {
//!         self.applied.push(id.to_string());
//!     }
//! }
//!
//! let mut header = Header { applied: Vec::new() };
//! let mut picker = ThemePicker::new(MemoryStore::with_value("ocean"));
//!
//! assert!(picker.mount(&mut header));
//! assert_eq!(picker.selector().value(), "ocean");
//! assert_eq!(header.applied, ["ocean"]);
//!
//! picker.select(&mut header, "retro");
//! assert_eq!(header.applied, ["ocean", "retro"]);
//! ```

mod picker;
mod render;
mod store;
mod theme;
mod widget;

pub use picker::{Surface, ThemeChanged, ThemePicker};
pub use render::OutputMode;
pub use store::{ChoiceStore, FileStore, MemoryStore, STORAGE_KEY};
pub use theme::{
    detect_color_mode, set_mode_detector, ColorMode, RegistryError, Theme, ThemeRegistry,
    DEFAULT_THEME,
};
pub use widget::{Selector, SelectorOption, WIDGET_LABEL};
