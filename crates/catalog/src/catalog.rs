//! The ordered, immutable list of languages offered by the picker.

use std::sync::OnceLock;

use crate::entry::LanguageEntry;
use crate::error::CatalogError;

const BUILTIN_LANGUAGES: [(&str, &str); 16] = [
	("JavaScript", "JS"),
	("Python", "PY"),
	("TypeScript", "TS"),
	("Rust", "RS"),
	("Go", "GO"),
	("Java", "JV"),
	("C#", "C#"),
	("C++", "++"),
	("Ruby", "RB"),
	("PHP", "HP"),
	("Swift", "SW"),
	("Kotlin", "KT"),
	("React", "RE"),
	("Vue", "VU"),
	("Node", "ND"),
	("SQL", "SQ"),
];

/// Ordered collection of [`LanguageEntry`] values.
///
/// A catalog is built once at startup and only ever handed out by reference;
/// there is no way to mutate it after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
	entries: Vec<LanguageEntry>,
}

impl Catalog {
	/// Build a catalog from custom entries, keeping their order.
	///
	/// Names must be non-empty. Duplicate names are accepted.
	///
	/// # Errors
	///
	/// Returns [`CatalogError::Empty`] when `entries` is empty and
	/// [`CatalogError::EmptyName`] for the first entry whose name is blank.
	pub fn new(entries: Vec<LanguageEntry>) -> Result<Self, CatalogError> {
		if entries.is_empty() {
			return Err(CatalogError::Empty);
		}
		if let Some(index) = entries
			.iter()
			.position(|entry| entry.name.trim().is_empty())
		{
			return Err(CatalogError::EmptyName { index });
		}
		Ok(Self { entries })
	}

	/// The process-wide built-in catalog of sixteen languages.
	#[must_use]
	pub fn builtin() -> &'static Catalog {
		static BUILTIN: OnceLock<Catalog> = OnceLock::new();
		BUILTIN.get_or_init(|| Catalog {
			entries: BUILTIN_LANGUAGES
				.iter()
				.map(|(name, icon)| LanguageEntry::new(*name, *icon))
				.collect(),
		})
	}

	#[must_use]
	pub fn entries(&self) -> &[LanguageEntry] {
		&self.entries
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, LanguageEntry> {
		self.entries.iter()
	}

	/// Return `true` when an entry with exactly this name exists.
	#[must_use]
	pub fn contains(&self, name: &str) -> bool {
		self.entries.iter().any(|entry| entry.name == name)
	}

	/// Look up an entry by its exact name.
	#[must_use]
	pub fn get(&self, name: &str) -> Option<&LanguageEntry> {
		self.entries.iter().find(|entry| entry.name == name)
	}
}

impl<'a> IntoIterator for &'a Catalog {
	type Item = &'a LanguageEntry;
	type IntoIter = std::slice::Iter<'a, LanguageEntry>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}
