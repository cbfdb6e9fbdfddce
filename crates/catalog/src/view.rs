//! Render-ready projections of [`LanguagePicker`](crate::LanguagePicker) state.

use crate::entry::LanguageEntry;
use crate::picker::PickerAction;

/// One language card offered to a display surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card<'a> {
	pub entry: &'a LanguageEntry,
	/// Whether this card's name equals the current selection. Presentation only.
	pub selected: bool,
	/// Action to dispatch when the card is activated.
	pub on_activate: PickerAction,
}

impl<'a> Card<'a> {
	pub(crate) fn new(entry: &'a LanguageEntry, selection: Option<&str>) -> Self {
		Self {
			entry,
			selected: selection == Some(entry.name.as_str()),
			on_activate: PickerAction::Select(entry.name.clone()),
		}
	}

	#[must_use]
	pub fn name(&self) -> &'a str {
		&self.entry.name
	}

	#[must_use]
	pub fn icon(&self) -> &'a str {
		&self.entry.icon
	}
}

/// What the picker wants on screen right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerView<'a> {
	/// The searchable card grid.
	Browsing {
		filter: &'a str,
		cards: Vec<Card<'a>>,
		/// No card matches the filter; show the empty-state notice.
		empty: bool,
		/// Size of the whole catalog.
		total: usize,
	},
	/// The documentation viewer for `language`.
	Viewing {
		language: &'a str,
		on_back: PickerAction,
	},
}

impl PickerView<'_> {
	#[must_use]
	pub fn is_browsing(&self) -> bool {
		matches!(self, Self::Browsing { .. })
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{Catalog, LanguagePicker};

	#[test]
	fn browsing_view_binds_cards_to_select_actions() {
		let mut picker = LanguagePicker::new(Catalog::builtin());
		picker.set_search_filter("ru");
		let PickerView::Browsing {
			filter,
			cards,
			empty,
			total,
		} = picker.view()
		else {
			panic!("expected browsing view");
		};
		assert_eq!(filter, "ru");
		assert!(!empty);
		assert_eq!(total, 16);
		let names: Vec<&str> = cards.iter().map(Card::name).collect();
		assert_eq!(names, ["Rust", "Ruby"]);
		assert_eq!(cards[0].icon(), "RS");
		assert_eq!(cards[0].on_activate, PickerAction::Select("Rust".into()));
		assert!(cards.iter().all(|card| !card.selected));
	}

	#[test]
	fn empty_filter_result_is_flagged() {
		let picker = LanguagePicker::new(Catalog::builtin()).with_filter("zz-nonexistent");
		match picker.view() {
			PickerView::Browsing { cards, empty, .. } => {
				assert!(cards.is_empty());
				assert!(empty);
			}
			PickerView::Viewing { .. } => panic!("expected browsing view"),
		}
	}

	#[test]
	fn viewing_view_offers_back_action() {
		let mut picker = LanguagePicker::new(Catalog::builtin());
		picker.select_language("Go");
		let view = picker.view();
		assert!(!view.is_browsing());
		assert_eq!(
			view,
			PickerView::Viewing {
				language: "Go",
				on_back: PickerAction::Back,
			}
		);
	}

	#[test]
	fn cards_mark_the_selected_name() {
		let entry = LanguageEntry::new("Rust", "RS");
		assert!(Card::new(&entry, Some("Rust")).selected);
		assert!(!Card::new(&entry, Some("Ruby")).selected);
		assert!(!Card::new(&entry, None).selected);
	}
}
