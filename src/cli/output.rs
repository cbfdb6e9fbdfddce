use anyhow::Result;
use codedocs::{Catalog, PickerOutcome};

/// Print a plain-text representation of the picker outcome.
pub(crate) fn print_plain(outcome: &PickerOutcome) {
	if !outcome.accepted {
		println!("Selection cancelled (query: '{}')", outcome.query);
		return;
	}

	match &outcome.language {
		Some(language) => println!("{language}"),
		None => println!("No selection"),
	}
}

/// Format the picker outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &PickerOutcome) -> Result<String> {
	Ok(serde_json::to_string_pretty(outcome)?)
}

/// Print the JSON representation of the picker outcome.
pub(crate) fn print_json(outcome: &PickerOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

fn format_catalog(catalog: &Catalog) -> String {
	catalog
		.iter()
		.map(|entry| format!("{}  {}", entry.icon, entry.name))
		.collect::<Vec<_>>()
		.join("\n")
}

/// Print every catalog entry as `ICON  Name`, one per line.
pub(crate) fn print_catalog(catalog: &Catalog) {
	println!("{}", format_catalog(catalog));
}
