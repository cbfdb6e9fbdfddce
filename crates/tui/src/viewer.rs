//! Seam between the picker and the documentation viewer.
//!
//! The viewer owns everything shown while a language is selected. The picker
//! only hands it the language name and waits for a [`ViewerSignal::Back`].

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::style::Theme;

/// What a viewer wants after handling a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerSignal {
	/// Keep showing the viewer.
	Stay,
	/// Return to the picker.
	Back,
}

/// A component that renders documentation for one language.
pub trait DocumentationViewer {
	/// Draw the documentation for `language` into `area`.
	fn render(&mut self, frame: &mut Frame, area: Rect, language: &str, theme: &Theme);

	/// React to a key press. Return [`ViewerSignal::Back`] once per request to
	/// leave the viewer.
	fn handle_key(&mut self, key: KeyEvent) -> ViewerSignal;
}

/// Minimal viewer that names the language and explains how to go back.
#[derive(Debug, Clone)]
pub struct PlaceholderViewer {
	back_hint: String,
}

impl PlaceholderViewer {
	#[must_use]
	pub fn new(back_hint: impl Into<String>) -> Self {
		Self {
			back_hint: back_hint.into(),
		}
	}
}

impl Default for PlaceholderViewer {
	fn default() -> Self {
		Self::new("Press Esc to go back")
	}
}

impl DocumentationViewer for PlaceholderViewer {
	fn render(&mut self, frame: &mut Frame, area: Rect, language: &str, theme: &Theme) {
		let block = Block::default()
			.borders(Borders::ALL)
			.border_set(ratatui::symbols::border::ROUNDED)
			.border_style(theme.card)
			.title(Span::styled(format!(" {language} "), theme.header));
		let inner = block.inner(area);
		frame.render_widget(block, area);

		let [_, body, hint] = Layout::vertical([
			Constraint::Length(1),
			Constraint::Min(1),
			Constraint::Length(1),
		])
		.areas(inner);

		let text = Paragraph::new(vec![
			Line::from(Span::styled(format!("{language} documentation"), theme.header)),
			Line::from(Span::styled(
				"Search concepts, functions, and best practices.",
				theme.muted,
			)),
		])
		.alignment(Alignment::Center);
		frame.render_widget(text, body);

		let hint_line = Paragraph::new(Span::styled(self.back_hint.as_str(), theme.muted))
			.alignment(Alignment::Center);
		frame.render_widget(hint_line, hint);
	}

	fn handle_key(&mut self, key: KeyEvent) -> ViewerSignal {
		match key.code {
			KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => ViewerSignal::Back,
			_ => ViewerSignal::Stay,
		}
	}
}

#[cfg(test)]
mod tests {
	use ratatui::crossterm::event::KeyModifiers;

	use super::*;

	#[test]
	fn back_keys_signal_back() {
		let mut viewer = PlaceholderViewer::default();
		for code in [KeyCode::Esc, KeyCode::Backspace, KeyCode::Char('b')] {
			assert_eq!(
				viewer.handle_key(KeyEvent::new(code, KeyModifiers::NONE)),
				ViewerSignal::Back
			);
		}
	}

	#[test]
	fn other_keys_stay() {
		let mut viewer = PlaceholderViewer::default();
		let key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
		assert_eq!(viewer.handle_key(key), ViewerSignal::Stay);
	}
}
