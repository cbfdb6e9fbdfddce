use std::fmt::Write;
use std::path::PathBuf;

use clap::{
	ArgAction, ColorChoice, CommandFactory, FromArgMatches, Parser, ValueEnum,
	builder::{
		BoolishValueParser, Styles,
		styling::{AnsiColor, Effects},
	},
};
use codedocs::app_dirs;

/// Produce the full version banner including config and data directories.
fn long_version() -> &'static str {
	let config_dir = match app_dirs::get_config_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};
	let data_dir = match app_dirs::get_data_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};

	let mut details = format!("codedocs {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	let _ = writeln!(details, "config directory: {config_dir}");
	let _ = writeln!(details, "data directory: {data_dir}");

	Box::leak(details.into_boxed_str())
}

/// Create the clap styles used for custom colour output.
fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}

/// Parse command line arguments into the strongly typed [`CliArgs`] structure.
pub(crate) fn parse_cli() -> CliArgs {
	let mut matches = CliArgs::command().get_matches();
	CliArgs::from_arg_matches_mut(&mut matches).unwrap_or_else(|err| err.exit())
}

#[derive(Parser, Debug)]
#[command(
	name = "codedocs",
	version,
	long_version = long_version(),
	about = "Pick a programming language and browse its documentation",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
/// Command-line arguments accepted by the `codedocs` binary.
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "CODEDOCS_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'q',
		long = "query",
		value_name = "QUERY",
		help = "Provide an initial search query (default: empty)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: indigo)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Override the heading shown above the search field"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		long,
		value_name = "TEXT",
		help = "Override the search field placeholder"
	)]
	pub(crate) placeholder: Option<String>,
	#[arg(
		long = "strict-selection",
		value_parser = BoolishValueParser::new(),
		num_args = 0..=1,
		default_missing_value = "true",
		help = "Only allow selecting languages present in the catalog (default: disabled)"
	)]
	pub(crate) strict_selection: Option<bool>,
	#[arg(
		long = "log-file",
		value_name = "PATH",
		help = "Write logs to this file (default: logging disabled)"
	)]
	pub(crate) log_file: Option<PathBuf>,
	#[arg(
		long = "log-level",
		value_name = "LEVEL",
		help = "Minimum level written to the log file (default: warn)"
	)]
	pub(crate) log_level: Option<String>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		long = "list-languages",
		help = "Print the language catalog and exit (default: disabled)"
	)]
	pub(crate) list_languages: bool,
	#[arg(short = 'o', long = "output", value_enum, default_value_t = OutputFormat::Plain, help = "Choose how to print the result")]
	pub(crate) output: OutputFormat,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
/// Output formats supported by the CLI utility.
pub(crate) enum OutputFormat {
	Plain,
	Json,
}

#[cfg(test)]
mod tests {
	use super::*;

	fn parse(args: &[&str]) -> CliArgs {
		let mut matches = CliArgs::command()
			.try_get_matches_from(args)
			.expect("arguments parse");
		CliArgs::from_arg_matches_mut(&mut matches).expect("parses")
	}

	#[test]
	fn command_is_well_formed() {
		CliArgs::command().debug_assert();
	}

	#[test]
	fn parse_cli_accepts_default_arguments() {
		let parsed = parse(&["codedocs"]);
		assert_eq!(parsed.output, OutputFormat::Plain);
		assert_eq!(parsed.strict_selection, None);
		assert!(!parsed.list_languages);
	}

	#[test]
	fn strict_selection_flag_accepts_bare_and_valued_forms() {
		assert_eq!(
			parse(&["codedocs", "--strict-selection"]).strict_selection,
			Some(true)
		);
		assert_eq!(
			parse(&["codedocs", "--strict-selection", "off"]).strict_selection,
			Some(false)
		);
	}

	#[test]
	fn query_and_output_are_captured() {
		let parsed = parse(&["codedocs", "-q", "py", "-o", "json"]);
		assert_eq!(parsed.initial_query.as_deref(), Some("py"));
		assert_eq!(parsed.output, OutputFormat::Json);
	}
}
