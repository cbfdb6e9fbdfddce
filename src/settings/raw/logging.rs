use std::path::PathBuf;

use serde::Deserialize;

use super::super::util::non_blank;
use crate::cli::CliArgs;

/// Log destination and verbosity prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LoggingSection {
	pub(super) file: Option<PathBuf>,
	pub(super) level: Option<String>,
}

impl LoggingSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(file) = cli.log_file.clone() {
			self.file = Some(file);
		}
		if let Some(level) = cli.log_level.clone() {
			self.level = Some(level);
		}
	}

	pub(super) fn finalize(self) -> (Option<PathBuf>, Option<String>) {
		let file = self.file.filter(|path| !path.as_os_str().is_empty());
		(file, non_blank(self.level))
	}
}
