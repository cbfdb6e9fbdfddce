use anyhow::{Result, anyhow};
use codedocs_catalog::{Catalog, SelectionPolicy};

use crate::App;
use crate::config::UiLabels;
use crate::outcome::PickerOutcome;
use crate::style::{self, Theme};

/// Builder for configuring and launching the picker.
#[derive(Debug, Clone)]
pub struct Picker<'a> {
	catalog: &'a Catalog,
	initial_query: String,
	labels: UiLabels,
	theme: Option<Theme>,
	policy: SelectionPolicy,
}

impl<'a> Picker<'a> {
	/// Start configuring a picker over `catalog`.
	#[must_use]
	pub fn new(catalog: &'a Catalog) -> Self {
		Self {
			catalog,
			initial_query: String::new(),
			labels: UiLabels::default(),
			theme: None,
			policy: SelectionPolicy::default(),
		}
	}

	#[must_use]
	pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
		self.initial_query = query.into();
		self
	}

	#[must_use]
	pub fn with_labels(mut self, labels: UiLabels) -> Self {
		self.labels = labels;
		self
	}

	#[must_use]
	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = Some(theme);
		self
	}

	/// Select a bundled theme by name or alias.
	///
	/// # Errors
	///
	/// Returns an error if no bundled theme matches `name`.
	pub fn with_theme_name(self, name: &str) -> Result<Self> {
		let theme = style::by_name(name).ok_or_else(|| anyhow!("unknown theme `{name}`"))?;
		Ok(self.with_theme(theme))
	}

	#[must_use]
	pub fn with_policy(mut self, policy: SelectionPolicy) -> Self {
		self.policy = policy;
		self
	}

	/// Materialise the configured [`App`] without starting the terminal.
	#[must_use]
	pub fn into_app(self) -> App<'a> {
		let viewer = crate::viewer::PlaceholderViewer::new(self.labels.back_hint.clone());
		let mut app = App::with_viewer(self.catalog, self.labels, viewer);
		if let Some(theme) = self.theme {
			app.set_theme(theme);
		}
		app.set_policy(self.policy);
		if !self.initial_query.is_empty() {
			app.set_initial_query(self.initial_query);
		}
		app
	}

	/// Run the picker until the user exits.
	///
	/// # Errors
	///
	/// Returns an error if the terminal cannot be driven.
	pub fn run(self) -> Result<PickerOutcome> {
		self.into_app().run()
	}
}
