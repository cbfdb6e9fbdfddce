use codedocs::logging::parse_level;
use codedocs_tui::style;

use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if let Some(theme) = config.theme.as_deref()
		&& style::by_name(theme).is_none()
	{
		return Err(ConfigError::invalid(
			"ui.theme",
			theme,
			sources.source_for_theme(),
			format!("unknown theme; expected one of {}", style::names().join(", ")),
		));
	}

	if let Some(level) = config.log_level.as_deref()
		&& parse_level(level).is_none()
	{
		return Err(ConfigError::invalid(
			"logging.level",
			level,
			sources.source_for_log_level(),
			"expected off, error, warn, info, debug or trace",
		));
	}

	Ok(())
}
