use std::path::PathBuf;

use clap::Parser;
use codedocs::{LanguageEntry, SelectionPolicy};

use super::RawConfig;
use crate::cli::CliArgs;

fn parse_raw(toml: &str) -> RawConfig {
	let config = config::Config::builder()
		.add_source(config::File::from_str(toml, config::FileFormat::Toml))
		.build()
		.expect("config builds");
	config.try_deserialize().expect("raw config deserializes")
}

#[test]
fn cli_overrides_take_precedence() {
	let cli = CliArgs::parse_from([
		"codedocs",
		"--query",
		"ru",
		"--theme",
		"paper",
		"--title",
		"Docs",
		"--placeholder",
		"Find...",
		"--strict-selection",
		"--log-file",
		"/tmp/codedocs.log",
		"--log-level",
		"debug",
	]);

	let mut config = parse_raw(
		r#"
		[ui]
		initial_query = "py"
		theme = "mono"
		title = "From file"

		[picker]
		strict_selection = false

		[logging]
		level = "info"
		"#,
	);
	config.apply_cli_overrides(&cli);

	assert_eq!(config.ui.initial_query, cli.initial_query);
	assert_eq!(config.ui.theme, cli.theme);
	assert_eq!(config.ui.title, cli.title);
	assert_eq!(config.ui.placeholder, cli.placeholder);
	assert_eq!(config.picker.strict_selection, Some(true));
	assert_eq!(config.logging.file, Some(PathBuf::from("/tmp/codedocs.log")));
	assert_eq!(config.logging.level.as_deref(), Some("debug"));
}

#[test]
fn file_values_survive_without_cli_flags() {
	let cli = CliArgs::parse_from(["codedocs"]);
	let mut config = parse_raw(
		r#"
		[ui]
		initial_query = "java"

		[picker]
		strict_selection = true
		"#,
	);
	config.apply_cli_overrides(&cli);

	let resolved = config.resolve(&cli).expect("resolves");
	assert_eq!(resolved.initial_query, "java");
	assert_eq!(resolved.policy, SelectionPolicy::CatalogOnly);
	assert_eq!(resolved.catalog().len(), 16);
}

#[test]
fn custom_catalog_replaces_builtin_languages() {
	let cli = CliArgs::parse_from(["codedocs"]);
	let config = parse_raw(
		r#"
		[catalog]
		languages = [
			{ name = "Zig", icon = "⚡" },
			{ name = "Nim", icon = "👑" },
		]
		"#,
	);

	let resolved = config.resolve(&cli).expect("resolves");
	let entries: Vec<&LanguageEntry> = resolved.catalog().iter().collect();
	assert_eq!(entries.len(), 2);
	assert_eq!(entries[0].name, "Zig");
	assert_eq!(entries[1].icon, "👑");
}

#[test]
fn empty_catalog_override_is_rejected() {
	let cli = CliArgs::parse_from(["codedocs"]);
	let config = parse_raw("[catalog]\nlanguages = []\n");

	let err = config.resolve(&cli).expect_err("empty catalog fails");
	let message = err.to_string();
	assert!(message.contains("catalog.languages"));
	assert!(message.contains("at least one language"));
}

#[test]
fn unknown_theme_reports_cli_flag() {
	let cli = CliArgs::parse_from(["codedocs", "--theme", "sparkles"]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);

	let err = config.resolve(&cli).expect_err("unknown theme fails");
	let message = err.to_string();
	assert!(message.contains("ui.theme"));
	assert!(message.contains("CLI flag `--theme`"));
	assert!(message.contains("value: sparkles"));
}

#[test]
fn unknown_log_level_reports_config_key() {
	let cli = CliArgs::parse_from(["codedocs"]);
	let config = parse_raw("[logging]\nlevel = \"chatty\"\n");

	let err = config.resolve(&cli).expect_err("unknown level fails");
	let message = err.to_string();
	assert!(message.contains("logging.level"));
	assert!(message.contains("configuration key"));
}

#[test]
fn numeric_log_level_is_rejected() {
	let cli = CliArgs::parse_from(["codedocs", "--log-level", "3"]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);

	let err = config.resolve(&cli).expect_err("numeric level fails");
	let message = err.to_string();
	assert!(message.contains("logging.level"));
	assert!(message.contains("value: 3"));
}
