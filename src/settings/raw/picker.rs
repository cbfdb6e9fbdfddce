use codedocs::SelectionPolicy;
use serde::Deserialize;

use crate::cli::CliArgs;

/// Selection behaviour prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct PickerSection {
	pub(super) strict_selection: Option<bool>,
}

impl PickerSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(strict) = cli.strict_selection {
			self.strict_selection = Some(strict);
		}
	}

	pub(super) fn policy(&self) -> SelectionPolicy {
		if self.strict_selection.unwrap_or(false) {
			SelectionPolicy::CatalogOnly
		} else {
			SelectionPolicy::Permissive
		}
	}
}
