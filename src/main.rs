mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_catalog, print_json, print_plain};
use codedocs::logging;
use codedocs_tui::style;
use settings::ResolvedConfig;
use workflow::PickerWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in style::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.list_languages {
		print_catalog(resolved.catalog());
		return Ok(());
	}

	if cli.print_config {
		resolved.print_summary();
	}

	let _log_guard = logging::initialize(resolved.log_file.as_deref(), resolved.log_filter())?;

	run_picker(cli.output, resolved)
}

/// Execute the picker workflow and print output in the chosen format.
fn run_picker(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
	let workflow = PickerWorkflow::from_config(settings);
	let outcome = workflow.run()?;

	match format {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}
