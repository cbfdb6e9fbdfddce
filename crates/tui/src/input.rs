//! Single-line query input backed by `tui-textarea`.

use ratatui::Frame;
use ratatui::crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::style::Style;
use tui_textarea::{CursorMove, Input, Key, TextArea};

/// Editable search text shown at the top of the picker.
#[derive(Debug, Clone)]
pub struct QueryInput<'a> {
	textarea: TextArea<'a>,
}

impl Default for QueryInput<'_> {
	fn default() -> Self {
		Self::new("")
	}
}

impl<'a> QueryInput<'a> {
	/// Create an input pre-filled with `initial`, cursor at the end.
	#[must_use]
	pub fn new(initial: impl Into<String>) -> Self {
		let initial = initial.into();
		let mut textarea = TextArea::new(vec![initial]);
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(CursorMove::End);
		Self { textarea }
	}

	/// Show `text` while the input is empty.
	pub fn set_placeholder(&mut self, text: impl Into<String>, style: Style) {
		self.textarea.set_placeholder_text(text);
		self.textarea.set_placeholder_style(style);
	}

	pub fn set_style(&mut self, style: Style) {
		self.textarea.set_style(style);
	}

	/// Current query text.
	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea.lines().first().map_or("", String::as_str)
	}

	/// Feed a key event to the input. Returns `true` when the text changed.
	///
	/// Keys that would insert a line break are ignored so the query always
	/// stays on one line.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		let input = Input::from(key);
		match input {
			Input {
				key: Key::Enter, ..
			}
			| Input {
				key: Key::Char('m' | 'j'),
				ctrl: true,
				..
			} => false,
			input => {
				let before = self.text().to_string();
				self.textarea.input(input);
				self.text() != before
			}
		}
	}

	pub(crate) fn render(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}
}
