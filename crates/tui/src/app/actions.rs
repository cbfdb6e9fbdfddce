use anyhow::Result;
use codedocs_catalog::{PickerAction, PickerView};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use super::App;
use crate::outcome::PickerOutcome;
use crate::viewer::{DocumentationViewer, ViewerSignal};

impl<V: DocumentationViewer> App<'_, V> {
	/// Process a keyboard event and return an outcome if the user exits.
	pub fn handle_key(&mut self, key: KeyEvent) -> Result<Option<PickerOutcome>> {
		if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
			return Ok(Some(self.outcome()));
		}

		if self.picker.selected_language().is_some() {
			self.handle_viewer_key(key);
			return Ok(None);
		}

		match key.code {
			KeyCode::Esc => {
				return Ok(Some(PickerOutcome::cancelled(self.picker.search_filter())));
			}
			KeyCode::Enter => self.activate_focused(),
			KeyCode::Left => self.move_focus_left(),
			KeyCode::Right => self.move_focus_right(),
			KeyCode::Up => self.move_focus_up(),
			KeyCode::Down => self.move_focus_down(),
			_ => {
				if self.search_input.input(key) {
					let text = self.search_input.text().to_string();
					self.picker.apply(PickerAction::SetFilter(text));
					self.sync_focus();
				}
			}
		}
		Ok(None)
	}

	/// Outcome describing the current state, used when the user quits.
	pub(crate) fn outcome(&self) -> PickerOutcome {
		match self.picker.selected_language() {
			Some(language) => PickerOutcome::viewed(language, self.picker.search_filter()),
			None => PickerOutcome::cancelled(self.picker.search_filter()),
		}
	}

	fn handle_viewer_key(&mut self, key: KeyEvent) {
		if self.viewer.handle_key(key) != ViewerSignal::Back {
			return;
		}
		let on_back = match self.picker.view() {
			PickerView::Viewing { on_back, .. } => on_back,
			PickerView::Browsing { .. } => return,
		};
		debug!("documentation viewer requested back");
		self.picker.apply(on_back);
		self.sync_focus();
	}

	fn activate_focused(&mut self) {
		let Some(focus) = self.focus else {
			return;
		};
		let action = match self.picker.view() {
			PickerView::Browsing { cards, .. } => cards.into_iter().nth(focus).map(|card| card.on_activate),
			PickerView::Viewing { .. } => None,
		};
		if let Some(action) = action {
			self.picker.apply(action);
		}
	}

	fn move_focus_left(&mut self) {
		if let Some(focus) = self.focus
			&& focus > 0
		{
			self.focus = Some(focus - 1);
		}
	}

	fn move_focus_right(&mut self) {
		if let Some(focus) = self.focus
			&& focus + 1 < self.visible_len()
		{
			self.focus = Some(focus + 1);
		}
	}

	fn move_focus_up(&mut self) {
		let columns = self.grid_columns.max(1);
		if let Some(focus) = self.focus
			&& focus >= columns
		{
			self.focus = Some(focus - columns);
		}
	}

	fn move_focus_down(&mut self) {
		let columns = self.grid_columns.max(1);
		if let Some(focus) = self.focus
			&& focus + columns < self.visible_len()
		{
			self.focus = Some(focus + columns);
		}
	}

	fn visible_len(&self) -> usize {
		self.picker.compute_filtered().len()
	}
}

#[cfg(test)]
mod tests {
	use codedocs_catalog::{Catalog, Phase};

	use super::*;
	use crate::App;

	fn press(app: &mut App<'_>, code: KeyCode) -> Option<PickerOutcome> {
		app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
			.expect("key handling succeeds")
	}

	fn type_text(app: &mut App<'_>, text: &str) {
		for ch in text.chars() {
			press(app, KeyCode::Char(ch));
		}
	}

	#[test]
	fn typing_updates_the_filter() {
		let mut app = App::new(Catalog::builtin());
		type_text(&mut app, "PY");
		assert_eq!(app.picker().search_filter(), "PY");
		assert_eq!(app.picker().compute_filtered().len(), 1);
	}

	#[test]
	fn enter_selects_the_focused_card_and_back_keeps_query() {
		let mut app = App::new(Catalog::builtin());
		type_text(&mut app, "ru");
		press(&mut app, KeyCode::Enter);
		assert_eq!(app.picker().phase(), Phase::Viewing("Rust".into()));

		press(&mut app, KeyCode::Char('x'));
		assert_eq!(app.picker().phase(), Phase::Viewing("Rust".into()));

		press(&mut app, KeyCode::Esc);
		assert_eq!(app.picker().phase(), Phase::Browsing);
		assert_eq!(app.search_input.text(), "ru");
		assert_eq!(app.picker().search_filter(), "ru");
	}

	#[test]
	fn arrows_walk_the_grid() {
		let mut app = App::new(Catalog::builtin());
		app.grid_columns = 4;
		press(&mut app, KeyCode::Right);
		assert_eq!(app.focus(), Some(1));
		press(&mut app, KeyCode::Down);
		assert_eq!(app.focus(), Some(5));
		press(&mut app, KeyCode::Left);
		press(&mut app, KeyCode::Up);
		assert_eq!(app.focus(), Some(0));
		press(&mut app, KeyCode::Up);
		press(&mut app, KeyCode::Left);
		assert_eq!(app.focus(), Some(0));

		press(&mut app, KeyCode::Down);
		press(&mut app, KeyCode::Down);
		press(&mut app, KeyCode::Down);
		press(&mut app, KeyCode::Down);
		assert_eq!(app.focus(), Some(12));
		press(&mut app, KeyCode::Enter);
		assert_eq!(app.picker().selected_language(), Some("React"));
	}

	#[test]
	fn enter_with_no_matches_does_nothing() {
		let mut app = App::new(Catalog::builtin());
		type_text(&mut app, "zz-nonexistent");
		assert_eq!(app.focus(), None);
		assert_eq!(press(&mut app, KeyCode::Enter), None);
		assert_eq!(app.picker().phase(), Phase::Browsing);
	}

	#[test]
	fn escape_while_browsing_cancels() {
		let mut app = App::new(Catalog::builtin());
		type_text(&mut app, "go");
		let outcome = press(&mut app, KeyCode::Esc).expect("escape exits");
		assert_eq!(outcome, PickerOutcome::cancelled("go"));
	}

	#[test]
	fn ctrl_c_while_viewing_reports_the_language() {
		let mut app = App::new(Catalog::builtin());
		press(&mut app, KeyCode::Enter);
		let outcome = app
			.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
			.expect("key handling succeeds")
			.expect("ctrl-c exits");
		assert_eq!(outcome, PickerOutcome::viewed("JavaScript", ""));
	}
}
