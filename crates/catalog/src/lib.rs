//! Core data types and state for the codedocs language picker.
//!
//! Nothing in this crate knows how it is displayed. The [`Catalog`] holds the
//! immutable list of languages, [`filter_entries`] narrows it by a search
//! string, and [`LanguagePicker`] owns the browsing/viewing state machine that
//! front ends drive through [`PickerAction`] values.

pub mod catalog;
pub mod entry;
pub mod error;
pub mod filter;
pub mod picker;
pub mod view;

pub use catalog::Catalog;
pub use entry::LanguageEntry;
pub use error::CatalogError;
pub use filter::{filter_entries, match_span, matches_filter};
pub use picker::{LanguagePicker, Phase, PickerAction, SelectionPolicy};
pub use view::{Card, PickerView};
