use std::path::PathBuf;

use codedocs::logging::parse_level;
use codedocs::{Catalog, SelectionPolicy, UiLabels};
use tracing_subscriber::filter::LevelFilter;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// sensible defaults.
#[derive(Debug, Default)]
pub struct ResolvedConfig {
	pub initial_query: String,
	pub theme: Option<String>,
	pub labels: UiLabels,
	pub policy: SelectionPolicy,
	/// Replacement catalog; `None` keeps the built-in languages.
	pub catalog: Option<Catalog>,
	pub log_file: Option<PathBuf>,
	pub log_level: Option<String>,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// The catalog the picker should browse.
	pub fn catalog(&self) -> &Catalog {
		self.catalog.as_ref().unwrap_or_else(|| Catalog::builtin())
	}

	/// Level used for the log file when `CODEDOCS_LOG` is unset.
	pub fn log_filter(&self) -> LevelFilter {
		self.log_level
			.as_deref()
			.and_then(parse_level)
			.unwrap_or(LevelFilter::WARN)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}
