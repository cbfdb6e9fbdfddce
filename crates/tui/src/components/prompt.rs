use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders};

use crate::input::QueryInput;
use crate::style::Theme;

/// Argument bundle for rendering the input area.
pub struct InputContext<'a> {
	/// The search input widget.
	pub search_input: &'a QueryInput<'a>,
	/// Number of cards matching the query.
	pub matches: usize,
	/// Size of the whole catalog.
	pub total: usize,
	/// Rendering area, including the border.
	pub area: Rect,
	/// Color theme.
	pub theme: &'a Theme,
}

/// Render the bordered search row with a right-aligned match counter.
pub fn render_input(frame: &mut Frame, input: InputContext<'_>) {
	let InputContext {
		search_input,
		matches,
		total,
		area,
		theme,
	} = input;

	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(theme.card)
		.title(Span::styled(" Search ", theme.muted));
	let inner = block.inner(area);
	frame.render_widget(block, area);

	search_input.render(frame, inner);
	render_counter(frame, inner, &format!("{matches}/{total}"), theme);
}

fn render_counter(frame: &mut Frame, area: Rect, text: &str, theme: &Theme) {
	if area.width == 0 || area.height == 0 || text.is_empty() {
		return;
	}

	let line = Line::from(Span::styled(text.to_string(), theme.muted));
	let line_width = u16::try_from(line.width()).unwrap_or(u16::MAX);
	if line_width == 0 {
		return;
	}

	let buffer = frame.buffer_mut();
	let mut start_x = if line_width >= area.width {
		area.left()
	} else {
		area.right().saturating_sub(line_width)
	};

	// Keep clear of whatever the query or placeholder already drew.
	let input_row = area.top();
	let mut last_char_x: Option<u16> = None;
	for x in area.left()..area.right() {
		if let Some(cell) = buffer.cell((x, input_row))
			&& !cell.symbol().trim().is_empty()
		{
			last_char_x = Some(x);
		}
	}

	if let Some(last_x) = last_char_x {
		let min_start = last_x.saturating_add(3);
		if min_start > start_x {
			start_x = min_start;
		}
	}

	if start_x >= area.right() {
		return;
	}

	let max_width = area
		.right()
		.saturating_sub(start_x)
		.min(line_width)
		.min(area.width);

	if max_width == 0 {
		return;
	}

	buffer.set_line(start_x, input_row, &line, max_width);
}
