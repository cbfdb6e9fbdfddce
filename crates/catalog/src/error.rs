use thiserror::Error;

/// Errors raised while building a custom [`Catalog`](crate::Catalog).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
	/// The catalog was given no entries at all.
	#[error("catalog must contain at least one language")]
	Empty,

	/// An entry at `index` has an empty or whitespace-only name.
	#[error("language at position {index} has an empty name")]
	EmptyName { index: usize },
}
