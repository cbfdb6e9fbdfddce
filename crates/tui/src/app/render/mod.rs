use codedocs_catalog::PickerView;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin, Rect};

use super::App;
use crate::components::grid::CARD_HEIGHT;
use crate::components::header::HEADER_HEIGHT;
use crate::components::{
	GridContext, InputContext, render_footer, render_grid, render_header, render_input,
};
use crate::viewer::DocumentationViewer;

const INPUT_HEIGHT: u16 = 3;

impl<V: DocumentationViewer> App<'_, V> {
	/// Draw the current view: the picker grid while browsing, the
	/// documentation viewer while a language is selected.
	pub fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		match self.picker.view() {
			PickerView::Viewing { language, .. } => {
				self.viewer.render(frame, area, language, &self.theme);
			}
			PickerView::Browsing {
				filter,
				cards,
				total,
				..
			} => {
				let [header, _, input, _, grid, footer] = browsing_layout(area);
				render_header(frame, header, &self.labels, total, &self.theme);
				render_input(
					frame,
					InputContext {
						search_input: &self.search_input,
						matches: cards.len(),
						total,
						area: input,
						theme: &self.theme,
					},
				);
				self.grid_columns = render_grid(
					frame,
					grid,
					GridContext {
						cards: &cards,
						focus: self.focus,
						filter,
						labels: &self.labels,
						theme: &self.theme,
					},
				);
				render_footer(frame, footer, &self.labels, &self.theme);
			}
		}
	}
}

fn browsing_layout(area: Rect) -> [Rect; 6] {
	Layout::vertical([
		Constraint::Length(HEADER_HEIGHT),
		Constraint::Length(1),
		Constraint::Length(INPUT_HEIGHT),
		Constraint::Length(1),
		Constraint::Min(CARD_HEIGHT),
		Constraint::Length(1),
	])
	.areas(area)
}
