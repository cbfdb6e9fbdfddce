use codedocs_catalog::{Card, match_span};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthChar;

use crate::config::UiLabels;
use crate::style::Theme;

/// Height of a single card, borders included.
pub const CARD_HEIGHT: u16 = 3;

/// Argument bundle for rendering the card grid.
pub struct GridContext<'a> {
	/// Cards to draw, in order.
	pub cards: &'a [Card<'a>],
	/// Index of the card under the keyboard cursor.
	pub focus: Option<usize>,
	/// Current query, used to highlight matches.
	pub filter: &'a str,
	/// Text for the empty-state notice.
	pub labels: &'a UiLabels,
	/// Color theme.
	pub theme: &'a Theme,
}

/// Number of grid columns for a given width, mirroring the responsive
/// breakpoints of the picker (1, 2, 3, then 4 columns).
#[must_use]
pub fn columns_for_width(width: u16) -> usize {
	match width {
		0..40 => 1,
		40..80 => 2,
		80..120 => 3,
		_ => 4,
	}
}

/// First row to draw so that `focus_row` stays inside `visible_rows`.
#[must_use]
pub fn first_visible_row(focus_row: usize, visible_rows: usize) -> usize {
	if visible_rows == 0 {
		return focus_row;
	}
	(focus_row + 1).saturating_sub(visible_rows)
}

/// Render the cards as a grid, or the empty-state notice when there are none.
///
/// Returns the number of columns used so callers can map arrow keys onto the
/// grid.
pub fn render_grid(frame: &mut Frame, area: Rect, ctx: GridContext<'_>) -> usize {
	let columns = columns_for_width(area.width);
	if ctx.cards.is_empty() {
		render_empty_state(frame, area, ctx.labels, ctx.theme);
		return columns;
	}
	if area.height < CARD_HEIGHT || area.width == 0 {
		return columns;
	}

	let visible_rows = usize::from(area.height / CARD_HEIGHT);
	let focus_row = ctx.focus.map_or(0, |focus| focus / columns);
	let offset = first_visible_row(focus_row, visible_rows);

	let row_areas = Layout::vertical(vec![Constraint::Length(CARD_HEIGHT); visible_rows]).split(area);
	let rows = ctx.cards.chunks(columns).enumerate().skip(offset).take(visible_rows);
	for (slot, (row_index, row_cards)) in rows.enumerate() {
		let ratio = u32::try_from(columns).unwrap_or(1);
		let cells = Layout::horizontal(vec![Constraint::Ratio(1, ratio); columns])
			.spacing(1)
			.split(row_areas[slot]);
		for (column, card) in row_cards.iter().enumerate() {
			let index = row_index * columns + column;
			let focused = ctx.focus == Some(index);
			render_card(frame, cells[column], card, focused, ctx.filter, ctx.theme);
		}
	}

	columns
}

fn render_card(
	frame: &mut Frame,
	area: Rect,
	card: &Card<'_>,
	focused: bool,
	filter: &str,
	theme: &Theme,
) {
	let border_style = theme.card_border(focused, card.selected);
	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(border_style);
	let inner = block.inner(area);
	frame.render_widget(block, area);
	if inner.width == 0 {
		return;
	}

	let icon = format!("[{}] ", card.icon());
	let icon_width = icon.chars().filter_map(UnicodeWidthChar::width).sum::<usize>();
	let name_width = usize::from(inner.width).saturating_sub(icon_width);

	let name_style = if focused { theme.focus } else { theme.prompt };
	let mut spans = vec![Span::styled(icon, theme.icon_style())];
	spans.extend(highlighted_name(
		card.name(),
		filter,
		name_width,
		name_style,
		theme.highlight,
	));
	frame.render_widget(Paragraph::new(Line::from(spans)), inner);
}

/// Split `name` into spans, styling the matched part of `filter` and
/// truncating to `max_width` columns with a trailing ellipsis.
pub(crate) fn highlighted_name(
	name: &str,
	filter: &str,
	max_width: usize,
	base: Style,
	highlight: Style,
) -> Vec<Span<'static>> {
	let span = match_span(name, filter);
	let total_width: usize = name.chars().filter_map(UnicodeWidthChar::width).sum();
	let budget = if total_width > max_width {
		max_width.saturating_sub(1)
	} else {
		max_width
	};

	let mut spans: Vec<Span<'static>> = Vec::new();
	let mut used = 0;
	let mut current = String::new();
	let mut current_matched = false;
	for (index, ch) in name.chars().enumerate() {
		let width = ch.width().unwrap_or(0);
		if used + width > budget {
			break;
		}
		used += width;
		let matched = span.as_ref().is_some_and(|range| range.contains(&index));
		if matched != current_matched && !current.is_empty() {
			let style = if current_matched { highlight } else { base };
			spans.push(Span::styled(std::mem::take(&mut current), style));
		}
		current_matched = matched;
		current.push(ch);
	}
	if !current.is_empty() {
		let style = if current_matched { highlight } else { base };
		spans.push(Span::styled(current, style));
	}
	if total_width > max_width && max_width > 0 {
		spans.push(Span::styled("…", base));
	}
	spans
}

fn render_empty_state(frame: &mut Frame, area: Rect, labels: &UiLabels, theme: &Theme) {
	if area.height == 0 {
		return;
	}
	let top_padding = area.height.saturating_sub(3) / 2;
	let mut lines = vec![Line::default(); usize::from(top_padding)];
	lines.push(Line::from(Span::styled("</>", theme.muted)));
	lines.push(Line::from(Span::styled(labels.empty_title.as_str(), theme.header)));
	lines.push(Line::from(Span::styled(labels.empty_hint.as_str(), theme.empty)));
	frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
