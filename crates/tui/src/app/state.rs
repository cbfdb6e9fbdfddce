//! Core state container for the terminal front end.

use codedocs_catalog::{Catalog, LanguagePicker, PickerAction, SelectionPolicy};

use crate::config::UiLabels;
use crate::input::QueryInput;
use crate::style::Theme;
use crate::viewer::{DocumentationViewer, PlaceholderViewer};

/// Aggregate state shared across the terminal UI.
///
/// The picker itself owns the filter and selection; `App` keeps the query
/// input in step with it and tracks which card has keyboard focus.
pub struct App<'a, V = PlaceholderViewer> {
	pub(crate) picker: LanguagePicker<'a>,
	/// Text input widget for the search filter.
	pub search_input: QueryInput<'a>,
	pub(crate) focus: Option<usize>,
	pub(crate) grid_columns: usize,
	pub(crate) labels: UiLabels,
	/// Active colour theme.
	pub theme: Theme,
	pub(crate) viewer: V,
}

impl<'a> App<'a> {
	/// Construct an [`App`] over `catalog` using the placeholder viewer.
	pub fn new(catalog: &'a Catalog) -> Self {
		let labels = UiLabels::default();
		let viewer = PlaceholderViewer::new(labels.back_hint.clone());
		Self::with_viewer(catalog, labels, viewer)
	}
}

impl<'a, V: DocumentationViewer> App<'a, V> {
	/// Construct an [`App`] that hands selections to `viewer`.
	pub fn with_viewer(catalog: &'a Catalog, labels: UiLabels, viewer: V) -> Self {
		let theme = Theme::default();
		let mut search_input = QueryInput::new("");
		search_input.set_placeholder(labels.placeholder.clone(), theme.empty);
		search_input.set_style(theme.prompt);

		let mut app = Self {
			picker: LanguagePicker::new(catalog),
			search_input,
			focus: None,
			grid_columns: 1,
			labels,
			theme,
			viewer,
		};
		app.sync_focus();
		app
	}

	/// Start with `query` typed into the search field.
	pub fn set_initial_query(&mut self, query: impl Into<String>) {
		let query = query.into();
		self.search_input = QueryInput::new(query.clone());
		self.search_input
			.set_placeholder(self.labels.placeholder.clone(), self.theme.empty);
		self.search_input.set_style(self.theme.prompt);
		self.picker.apply(PickerAction::SetFilter(query));
		self.sync_focus();
	}

	pub fn set_policy(&mut self, policy: SelectionPolicy) {
		self.picker = self.picker.clone().with_policy(policy);
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.theme = theme;
		self.search_input
			.set_placeholder(self.labels.placeholder.clone(), theme.empty);
		self.search_input.set_style(theme.prompt);
	}

	#[must_use]
	pub fn picker(&self) -> &LanguagePicker<'a> {
		&self.picker
	}

	/// Index of the card under the keyboard cursor, if any card is visible.
	#[must_use]
	pub fn focus(&self) -> Option<usize> {
		self.focus
	}

	/// Keep the focus inside the filtered cards; `None` when nothing matches.
	pub(crate) fn sync_focus(&mut self) {
		let len = self.picker.compute_filtered().len();
		self.focus = match (len, self.focus) {
			(0, _) => None,
			(_, None) => Some(0),
			(len, Some(focus)) => Some(focus.min(len - 1)),
		};
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn new_app_focuses_first_card() {
		let app = App::new(Catalog::builtin());
		assert_eq!(app.focus(), Some(0));
		assert_eq!(app.picker().search_filter(), "");
	}

	#[test]
	fn initial_query_flows_into_picker_and_input() {
		let mut app = App::new(Catalog::builtin());
		app.set_initial_query("script");
		assert_eq!(app.search_input.text(), "script");
		assert_eq!(app.picker().compute_filtered().len(), 2);
		assert_eq!(app.focus(), Some(0));
	}

	#[test]
	fn unmatched_initial_query_clears_focus() {
		let mut app = App::new(Catalog::builtin());
		app.set_initial_query("zz-nonexistent");
		assert_eq!(app.focus(), None);
	}

	#[test]
	fn focus_is_clamped_when_results_shrink() {
		let mut app = App::new(Catalog::builtin());
		app.focus = Some(15);
		app.picker.set_search_filter("ru");
		app.sync_focus();
		assert_eq!(app.focus(), Some(1));
	}

	#[test]
	fn policy_can_be_tightened() {
		let mut app = App::new(Catalog::builtin());
		app.set_policy(SelectionPolicy::CatalogOnly);
		assert_eq!(app.picker().policy(), SelectionPolicy::CatalogOnly);
	}
}
