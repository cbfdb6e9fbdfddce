use anyhow::{Error, Result};
use serde::Deserialize;
use std::env;

use crate::cli::CliArgs;

use super::resolved::{ConfigError, ConfigSources, ResolvedConfig, SettingSource};

mod catalog;
mod logging;
mod picker;
mod ui;

use catalog::CatalogSection;
use logging::LoggingSection;
use picker::PickerSection;
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	ui: UiSection,
	picker: PickerSection,
	catalog: CatalogSection,
	logging: LoggingSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.ui.apply_cli_overrides(cli);
		self.picker.apply_cli_overrides(cli);
		self.logging.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"CODEDOCS__UI__THEME",
				"--theme",
				"ui.theme",
			),
			log_level: detect_source(
				cli.log_level.is_some(),
				self.logging.level.is_some(),
				"CODEDOCS__LOGGING__LEVEL",
				"--log-level",
				"logging.level",
			),
		};

		let policy = self.picker.policy();
		let configured_languages = self.catalog.languages.as_ref().map_or(0, Vec::len);
		let catalog = self.catalog.resolve().map_err(|err| {
			ConfigError::invalid(
				"catalog.languages",
				format!("{configured_languages} entries"),
				SettingSource::ConfigKey("catalog.languages"),
				err.to_string(),
			)
		})?;
		let ui = self.ui.finalize();
		let (log_file, log_level) = self.logging.finalize();

		let config = ResolvedConfig {
			initial_query: ui.initial_query,
			theme: ui.theme,
			labels: ui.labels,
			policy,
			catalog,
			log_file,
			log_level,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}

#[cfg(test)]
mod tests;
