use codedocs::SelectionPolicy;

use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	println!("Effective configuration:");
	println!(
		"  UI theme: {}",
		config
			.theme
			.as_deref()
			.unwrap_or("(use the library default)")
	);
	println!("  Title: {}", config.labels.title);
	println!("  Placeholder: {}", config.labels.placeholder);
	if !config.initial_query.is_empty() {
		println!("  Initial query: {}", config.initial_query);
	}
	println!(
		"  Strict selection: {}",
		bool_to_word(config.policy == SelectionPolicy::CatalogOnly)
	);
	println!(
		"  Languages: {} ({})",
		config.catalog().len(),
		if config.catalog.is_some() {
			"configured"
		} else {
			"built-in"
		}
	);
	match &config.log_file {
		Some(path) => println!("  Log file: {} ({})", path.display(), config.log_filter()),
		None => println!("  Log file: (disabled)"),
	}
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}
