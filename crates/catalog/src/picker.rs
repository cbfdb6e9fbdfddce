//! The picker's UI state machine.
//!
//! A [`LanguagePicker`] is either browsing the catalog with a search filter or
//! viewing a single selected language. Selecting moves to viewing, going back
//! returns to browsing, and the filter survives the round trip.

use tracing::debug;

use crate::catalog::Catalog;
use crate::entry::LanguageEntry;
use crate::filter::filter_entries;
use crate::view::{Card, PickerView};

/// How [`LanguagePicker::select_language`] treats names that are not in the
/// catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectionPolicy {
	/// Accept any name.
	#[default]
	Permissive,
	/// Ignore names that do not exactly match a catalog entry.
	CatalogOnly,
}

/// Current phase of the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
	Browsing,
	Viewing(String),
}

/// Requests that display surfaces send back into the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerAction {
	/// Replace the search filter.
	SetFilter(String),
	/// Select the named language.
	Select(String),
	/// Leave the documentation viewer.
	Back,
}

/// Owns the search filter and the selection for one picker instance.
#[derive(Debug, Clone)]
pub struct LanguagePicker<'a> {
	catalog: &'a Catalog,
	policy: SelectionPolicy,
	selected: Option<String>,
	filter: String,
}

impl<'a> LanguagePicker<'a> {
	/// Create a picker over `catalog` with no selection and an empty filter.
	#[must_use]
	pub fn new(catalog: &'a Catalog) -> Self {
		Self {
			catalog,
			policy: SelectionPolicy::default(),
			selected: None,
			filter: String::new(),
		}
	}

	/// Use `policy` when validating selections.
	#[must_use]
	pub fn with_policy(mut self, policy: SelectionPolicy) -> Self {
		self.policy = policy;
		self
	}

	/// Start with `filter` already entered.
	#[must_use]
	pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
		self.filter = filter.into();
		self
	}

	#[must_use]
	pub fn catalog(&self) -> &'a Catalog {
		self.catalog
	}

	#[must_use]
	pub fn policy(&self) -> SelectionPolicy {
		self.policy
	}

	#[must_use]
	pub fn search_filter(&self) -> &str {
		&self.filter
	}

	#[must_use]
	pub fn selected_language(&self) -> Option<&str> {
		self.selected.as_deref()
	}

	#[must_use]
	pub fn phase(&self) -> Phase {
		match &self.selected {
			Some(name) => Phase::Viewing(name.clone()),
			None => Phase::Browsing,
		}
	}

	/// Replace the search filter. The text is stored verbatim.
	pub fn set_search_filter(&mut self, text: impl Into<String>) {
		self.filter = text.into();
		debug!(filter = %self.filter, "search filter updated");
	}

	/// Select `name`, switching to the viewing phase.
	///
	/// An empty `name` counts as no selection and behaves like
	/// [`clear_selection`](Self::clear_selection), returning `false`.
	///
	/// Otherwise returns `false` only under [`SelectionPolicy::CatalogOnly`]
	/// when `name` is not in the catalog; the state is left untouched in that
	/// case.
	pub fn select_language(&mut self, name: impl Into<String>) -> bool {
		let name = name.into();
		if name.is_empty() {
			self.clear_selection();
			return false;
		}
		if self.policy == SelectionPolicy::CatalogOnly && !self.catalog.contains(&name) {
			debug!(language = %name, "ignoring selection outside the catalog");
			return false;
		}
		debug!(language = %name, "language selected");
		self.selected = Some(name);
		true
	}

	/// Drop the selection and return to browsing. The filter is kept.
	pub fn clear_selection(&mut self) {
		if let Some(previous) = self.selected.take() {
			debug!(language = %previous, "selection cleared");
		}
	}

	/// Entries matching the current filter, in catalog order.
	#[must_use]
	pub fn compute_filtered(&self) -> Vec<&'a LanguageEntry> {
		filter_entries(self.catalog, &self.filter)
	}

	/// `true` when the current filter matches nothing.
	#[must_use]
	pub fn is_empty_result(&self) -> bool {
		self.compute_filtered().is_empty()
	}

	/// Apply an action emitted by a card or the documentation viewer.
	pub fn apply(&mut self, action: PickerAction) {
		match action {
			PickerAction::SetFilter(text) => self.set_search_filter(text),
			PickerAction::Select(name) => {
				self.select_language(name);
			}
			PickerAction::Back => self.clear_selection(),
		}
	}

	/// Project the current state into something a display can render.
	#[must_use]
	pub fn view(&self) -> PickerView<'_> {
		match &self.selected {
			Some(language) => PickerView::Viewing {
				language: language.as_str(),
				on_back: PickerAction::Back,
			},
			None => {
				let cards: Vec<Card<'a>> = self
					.compute_filtered()
					.into_iter()
					.map(|entry| Card::new(entry, self.selected.as_deref()))
					.collect();
				PickerView::Browsing {
					filter: &self.filter,
					empty: cards.is_empty(),
					total: self.catalog.len(),
					cards,
				}
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn new_picker_is_browsing_with_empty_filter() {
		let picker = LanguagePicker::new(Catalog::builtin());
		assert_eq!(picker.phase(), Phase::Browsing);
		assert_eq!(picker.search_filter(), "");
		assert_eq!(picker.selected_language(), None);
		assert_eq!(picker.policy(), SelectionPolicy::Permissive);
	}

	#[test]
	fn select_then_clear_keeps_filter() {
		let mut picker = LanguagePicker::new(Catalog::builtin());
		picker.set_search_filter("ru");
		assert!(picker.select_language("Rust"));
		assert_eq!(picker.phase(), Phase::Viewing("Rust".into()));

		picker.clear_selection();
		assert_eq!(picker.phase(), Phase::Browsing);
		assert_eq!(picker.search_filter(), "ru");
	}

	#[test]
	fn empty_name_is_treated_as_no_selection() {
		let mut picker = LanguagePicker::new(Catalog::builtin());
		picker.set_search_filter("ru");
		assert!(!picker.select_language(""));
		assert_eq!(picker.phase(), Phase::Browsing);
		assert!(picker.view().is_browsing());

		assert!(picker.select_language("Rust"));
		picker.apply(PickerAction::Select(String::new()));
		assert_eq!(picker.phase(), Phase::Browsing);
		assert_eq!(picker.selected_language(), None);
		assert_eq!(picker.search_filter(), "ru");
	}

	#[test]
	fn permissive_policy_accepts_unknown_names() {
		let mut picker = LanguagePicker::new(Catalog::builtin());
		assert!(picker.select_language("Brainfuck"));
		assert_eq!(picker.selected_language(), Some("Brainfuck"));
	}

	#[test]
	fn catalog_only_policy_rejects_unknown_names() {
		let mut picker =
			LanguagePicker::new(Catalog::builtin()).with_policy(SelectionPolicy::CatalogOnly);
		assert!(!picker.select_language("Brainfuck"));
		assert_eq!(picker.phase(), Phase::Browsing);
		assert!(!picker.select_language("rust"));
		assert!(picker.select_language("Rust"));
		assert_eq!(picker.phase(), Phase::Viewing("Rust".into()));
	}

	#[test]
	fn filter_is_stored_without_trimming() {
		let mut picker = LanguagePicker::new(Catalog::builtin());
		picker.set_search_filter("  Go ");
		assert_eq!(picker.search_filter(), "  Go ");
		assert!(picker.is_empty_result());
	}

	#[test]
	fn setting_the_same_filter_twice_is_idempotent() {
		let mut picker = LanguagePicker::new(Catalog::builtin());
		picker.set_search_filter("o");
		let first = picker.compute_filtered();
		picker.set_search_filter("o");
		assert_eq!(first, picker.compute_filtered());
	}

	#[test]
	fn actions_drive_the_state_machine() {
		let mut picker = LanguagePicker::new(Catalog::builtin());
		picker.apply(PickerAction::SetFilter("PY".into()));
		picker.apply(PickerAction::Select("Python".into()));
		assert_eq!(picker.phase(), Phase::Viewing("Python".into()));
		picker.apply(PickerAction::Back);
		assert_eq!(picker.phase(), Phase::Browsing);
		assert_eq!(picker.search_filter(), "PY");
	}

	#[test]
	fn clearing_while_browsing_is_a_no_op() {
		let mut picker = LanguagePicker::new(Catalog::builtin()).with_filter("java");
		picker.clear_selection();
		assert_eq!(picker.phase(), Phase::Browsing);
		assert_eq!(picker.compute_filtered().len(), 2);
	}
}
