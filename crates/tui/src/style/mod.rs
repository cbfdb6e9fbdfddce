//! Visual styling utilities.
//!
//! Themes are the colour schemes applied to the picker. They are loaded from
//! TOML documents bundled into the binary and looked up by name or alias.

pub mod theme;

pub use theme::{Theme, ThemeDescriptor, builtin_themes, by_name, default_theme, names};
