use codedocs::{Catalog, CatalogError, LanguageEntry};
use serde::Deserialize;

/// Optional replacement for the built-in language list.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct CatalogSection {
	pub(super) languages: Option<Vec<LanguageEntry>>,
}

impl CatalogSection {
	/// Build the configured catalog, or `None` when the built-in list applies.
	pub(super) fn resolve(self) -> Result<Option<Catalog>, CatalogError> {
		self.languages.map(Catalog::new).transpose()
	}
}
