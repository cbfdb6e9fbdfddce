//! Core application state and behavior for the interactive picker.
//!
//! The [`App`] type wraps a [`LanguagePicker`](codedocs_catalog::LanguagePicker)
//! with the terminal-only state it needs: the query input, the keyboard focus
//! over the card grid, labels, and the theme. Input handling and rendering
//! live in their own modules.

mod actions;
mod render;
mod state;

pub use state::App;
