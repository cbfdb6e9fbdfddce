use super::builtins::builtin_themes;
use super::types::{Theme, ThemeDescriptor};

/// Look up a bundled theme by name or alias, ignoring case and separators.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let wanted = normalize_name(name);
	builtin_themes()
		.descriptors
		.iter()
		.find(|descriptor| {
			normalize_name(&descriptor.name) == wanted
				|| descriptor
					.aliases
					.iter()
					.any(|alias| normalize_name(alias) == wanted)
		})
		.map(|descriptor| descriptor.theme)
}

/// Canonical names of the bundled themes, sorted alphabetically.
#[must_use]
pub fn names() -> Vec<String> {
	let mut names: Vec<String> = builtin_themes()
		.descriptors
		.iter()
		.map(|descriptor| descriptor.name.clone())
		.collect();
	names.sort_unstable_by_key(|name| name.to_ascii_lowercase());
	names
}

/// Snapshot of every bundled theme with its aliases.
#[must_use]
pub fn descriptors() -> Vec<ThemeDescriptor> {
	builtin_themes().descriptors.clone()
}

fn normalize_name(name: &str) -> String {
	name.trim()
		.chars()
		.filter(|ch| !matches!(ch, '-' | '_' | ' '))
		.flat_map(char::to_lowercase)
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn lookups_ignore_case_and_separators() {
		let indigo = by_name("indigo").expect("indigo theme");
		assert_eq!(by_name("INDIGO"), Some(indigo));
		assert_eq!(by_name(" Indigo "), Some(indigo));
	}

	#[test]
	fn aliases_resolve_to_their_theme() {
		assert_eq!(by_name("dark"), by_name("indigo"));
		assert_eq!(by_name("light"), by_name("paper"));
	}

	#[test]
	fn unknown_names_are_rejected() {
		assert!(by_name("no-such-theme").is_none());
	}

	#[test]
	fn names_are_sorted() {
		let names = names();
		let mut sorted = names.clone();
		sorted.sort_unstable_by_key(|name| name.to_ascii_lowercase());
		assert_eq!(names, sorted);
		assert!(names.iter().any(|name| name == "paper"));
	}
}
