use ratatui::style::{Color, Style};

/// A theme containing styles for the picker's UI elements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
	/// Title, badge, and header text.
	pub header: Style,
	/// Secondary text such as the tagline, stats, and footer note.
	pub muted: Style,
	/// Borders and labels of unfocused cards.
	pub card: Style,
	/// The card under the keyboard cursor.
	pub focus: Style,
	/// A card whose language is the current selection.
	pub selected: Style,
	/// The search prompt.
	pub prompt: Style,
	/// Empty-state notice.
	pub empty: Style,
	/// Matched part of a card name.
	pub highlight: Style,
}

impl Theme {
	/// Style for the icon badge drawn inside a card.
	#[must_use]
	pub fn icon_style(&self) -> Style {
		Style::new()
			.fg(self.header.fg.unwrap_or(Color::Reset))
			.add_modifier(ratatui::style::Modifier::BOLD)
	}

	/// Border style for a card given its focus state.
	#[must_use]
	pub fn card_border(&self, focused: bool, selected: bool) -> Style {
		if focused {
			self.focus
		} else if selected {
			self.selected
		} else {
			self.card
		}
	}
}

/// Snapshot of a registered theme and its metadata.
#[derive(Debug, Clone)]
pub struct ThemeDescriptor {
	/// The name of the theme.
	pub name: String,
	/// Alternate names for the theme.
	pub aliases: Vec<String>,
	/// The theme configuration.
	pub theme: Theme,
}
