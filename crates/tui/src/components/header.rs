use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::config::UiLabels;
use crate::style::Theme;

/// Rows needed by [`render_header`].
pub const HEADER_HEIGHT: u16 = 4;

/// Draw the badge, title, tagline, and stats line, centred.
pub fn render_header(frame: &mut Frame, area: Rect, labels: &UiLabels, total: usize, theme: &Theme) {
	let lines = vec![
		Line::from(Span::styled(format!("✦ {}", labels.badge), theme.muted)),
		Line::from(Span::styled(labels.title.as_str(), theme.header)),
		Line::from(Span::styled(labels.tagline.as_str(), theme.muted)),
		Line::from(Span::styled(labels.stats_line(total), theme.muted)),
	];
	frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Draw the footer note, centred.
pub fn render_footer(frame: &mut Frame, area: Rect, labels: &UiLabels, theme: &Theme) {
	let footer = Paragraph::new(Span::styled(labels.footer.as_str(), theme.muted))
		.alignment(Alignment::Center);
	frame.render_widget(footer, area);
}
