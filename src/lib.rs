//! Library exports for building and running the `codedocs` language picker.
//!
//! The root module re-exports the catalog and terminal front end so that
//! embedders can launch the picker without digging through the workspace, and
//! hosts the shared directory and logging helpers used by the binary.

pub mod app_dirs;
pub mod logging;

pub use codedocs_catalog::{
	Catalog, CatalogError, LanguageEntry, LanguagePicker, Phase, PickerAction, PickerView,
	SelectionPolicy, filter_entries,
};
pub use codedocs_tui::{
	App, DocumentationViewer, Picker, PickerOutcome, PlaceholderViewer, Theme, UiLabels,
	ViewerSignal, run,
};
