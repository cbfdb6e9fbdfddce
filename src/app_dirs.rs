//! Resolve configuration and data directories for `codedocs`.
//!
//! The helpers in this module respect environment overrides while falling back
//! to platform-appropriate locations provided by the `directories` crate.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const QUALIFIER: &str = "io";
const ORGANIZATION: &str = "albo";
const APPLICATION: &str = "codedocs";

const CONFIG_DIR_ENV: &str = "CODEDOCS_CONFIG_DIR";
const DATA_DIR_ENV: &str = "CODEDOCS_DATA_DIR";

fn project_dirs() -> Result<ProjectDirs> {
	ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
		.ok_or_else(|| anyhow!("unable to determine project directories for codedocs"))
}

/// Resolve an override directory from an environment variable.
///
/// An empty string is treated the same as an unset value.
fn dir_from_env(name: &str) -> Option<PathBuf> {
	let value = env::var_os(name)?;
	if value.is_empty() {
		None
	} else {
		Some(PathBuf::from(value))
	}
}

/// Return the configuration directory used to look up `config.toml`.
pub fn get_config_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(CONFIG_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.config_local_dir().to_path_buf())
}

/// Return the data directory reported in the long version banner.
pub fn get_data_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(DATA_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.data_local_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn unset_variables_yield_no_override() {
		assert_eq!(dir_from_env("CODEDOCS_TEST_SURELY_UNSET_DIR"), None);
	}

	#[test]
	fn config_dir_override_is_respected() {
		// SAFETY: Adjusting the override for the duration of this test.
		unsafe {
			env::set_var(CONFIG_DIR_ENV, "/tmp/codedocs-config-test");
		}
		let dir = get_config_dir().expect("override");
		unsafe {
			env::remove_var(CONFIG_DIR_ENV);
		}
		assert_eq!(dir, PathBuf::from("/tmp/codedocs-config-test"));
	}
}
