use codedocs::UiLabels;
use serde::Deserialize;

use super::super::util::non_blank;
use crate::cli::CliArgs;

/// UI related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) initial_query: Option<String>,
	pub(super) theme: Option<String>,
	pub(super) title: Option<String>,
	pub(super) placeholder: Option<String>,
}

pub(super) struct UiResolution {
	pub(super) labels: UiLabels,
	pub(super) initial_query: String,
	pub(super) theme: Option<String>,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(query) = cli.initial_query.clone() {
			self.initial_query = Some(query);
		}
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
		if let Some(title) = cli.title.clone() {
			self.title = Some(title);
		}
		if let Some(placeholder) = cli.placeholder.clone() {
			self.placeholder = Some(placeholder);
		}
	}

	pub(super) fn finalize(self) -> UiResolution {
		let mut labels = UiLabels::default();
		if let Some(title) = non_blank(self.title) {
			labels = labels.with_title(title);
		}
		if let Some(placeholder) = non_blank(self.placeholder) {
			labels = labels.with_placeholder(placeholder);
		}

		UiResolution {
			labels,
			initial_query: self.initial_query.unwrap_or_default(),
			theme: non_blank(self.theme),
		}
	}
}
