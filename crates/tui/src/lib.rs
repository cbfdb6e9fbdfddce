//! Terminal front end for the codedocs language picker.
//!
//! The [`Picker`] builder wires a [`Catalog`](codedocs_catalog::Catalog) into
//! an [`App`], which owns the query input, the card grid focus, and the
//! documentation viewer. [`run`] drives the event loop until the user exits
//! and returns a [`PickerOutcome`].

mod app;
mod builder;
pub mod components;
mod config;
pub mod input;
mod outcome;
mod runtime;
pub mod style;
pub mod viewer;

pub use app::App;
pub use builder::Picker;
pub use config::UiLabels;
pub use input::QueryInput;
pub use outcome::PickerOutcome;
pub use runtime::run;
pub use style::{Theme, builtin_themes, default_theme};
pub use viewer::{DocumentationViewer, PlaceholderViewer, ViewerSignal};
