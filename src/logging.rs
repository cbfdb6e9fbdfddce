//! Structured logging for the picker.
//!
//! The terminal belongs to the TUI while it runs, so log events only go
//! somewhere when a log file is configured. `CODEDOCS_LOG` accepts the usual
//! `EnvFilter` directives and overrides the configured level.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Environment variable holding filter directives.
pub const LOG_ENV: &str = "CODEDOCS_LOG";

/// Keeps the background log writer alive; drop it to flush.
#[must_use = "dropping the guard stops log output"]
pub struct LogGuard {
	_worker: Option<WorkerGuard>,
}

/// Install the global subscriber.
///
/// Without a `file`, nothing is installed and every event is discarded.
///
/// # Errors
///
/// Returns an error if the log directory cannot be created or a global
/// subscriber is already installed.
pub fn initialize(file: Option<&Path>, level: LevelFilter) -> Result<LogGuard> {
	let Some(file) = file else {
		return Ok(LogGuard { _worker: None });
	};

	let directory = file
		.parent()
		.filter(|parent| !parent.as_os_str().is_empty())
		.unwrap_or_else(|| Path::new("."));
	let file_name = file
		.file_name()
		.ok_or_else(|| anyhow!("log path {} has no file name", file.display()))?;
	fs::create_dir_all(directory)
		.with_context(|| format!("failed to create log directory {}", directory.display()))?;

	let appender = tracing_appender::rolling::never(directory, file_name);
	let (writer, guard) = tracing_appender::non_blocking(appender);

	tracing_subscriber::fmt()
		.with_env_filter(env_filter(level))
		.with_writer(writer)
		.with_ansi(false)
		.with_target(true)
		.try_init()
		.map_err(|err| anyhow!("failed to install log subscriber: {err}"))?;

	Ok(LogGuard {
		_worker: Some(guard),
	})
}

fn env_filter(level: LevelFilter) -> EnvFilter {
	EnvFilter::builder()
		.with_default_directive(level.into())
		.with_env_var(LOG_ENV)
		.from_env_lossy()
}

/// Parse a level name such as `debug` or `off`.
///
/// Only names are accepted; numeric verbosity levels are rejected.
pub fn parse_level(value: &str) -> Option<LevelFilter> {
	let value = value.trim();
	if value.starts_with(|ch: char| ch.is_ascii_digit()) {
		return None;
	}
	value.parse().ok()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn levels_parse_case_insensitively() {
		assert_eq!(parse_level("DEBUG"), Some(LevelFilter::DEBUG));
		assert_eq!(parse_level(" warn "), Some(LevelFilter::WARN));
		assert_eq!(parse_level("off"), Some(LevelFilter::OFF));
		assert_eq!(parse_level("chatty"), None);
	}

	#[test]
	fn numeric_levels_are_rejected() {
		assert_eq!(parse_level("0"), None);
		assert_eq!(parse_level(" 5 "), None);
	}

	#[test]
	fn no_file_installs_nothing() {
		let guard = initialize(None, LevelFilter::DEBUG).expect("no-op");
		assert!(guard._worker.is_none());
	}
}
