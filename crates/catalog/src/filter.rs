//! Case-insensitive substring filtering over a [`Catalog`].
//!
//! Both the entry name and the filter are lowercased before comparison. The
//! filter is not trimmed and matches are not scored: an entry either contains
//! the filter or it does not, and matches keep their catalog order.

use std::ops::Range;

use crate::catalog::Catalog;
use crate::entry::LanguageEntry;

/// Return `true` when `name` contains `filter`, ignoring case.
///
/// The empty filter matches every name.
#[must_use]
pub fn matches_filter(name: &str, filter: &str) -> bool {
	name.to_lowercase().contains(&filter.to_lowercase())
}

/// Return the catalog entries matching `filter`, in catalog order.
#[must_use]
pub fn filter_entries<'a>(catalog: &'a Catalog, filter: &str) -> Vec<&'a LanguageEntry> {
	let needle = filter.to_lowercase();
	catalog
		.iter()
		.filter(|entry| entry.name.to_lowercase().contains(&needle))
		.collect()
}

/// Locate the first case-insensitive occurrence of `filter` inside `name`.
///
/// The returned range is in `char` positions of `name`, suitable for styling
/// the matched part of a label. An empty filter yields `None`.
#[must_use]
pub fn match_span(name: &str, filter: &str) -> Option<Range<usize>> {
	if filter.is_empty() {
		return None;
	}
	let needle = filter.to_lowercase();

	// Lowercase the whole name exactly as the filter does. Per-char
	// lowercasing only supplies byte lengths; context rules such as a final
	// sigma never change them.
	let lowered = name.to_lowercase();
	let mut owners = Vec::with_capacity(lowered.len());
	for (index, ch) in name.chars().enumerate() {
		let width: usize = ch.to_lowercase().map(char::len_utf8).sum();
		owners.extend(std::iter::repeat_n(index, width));
	}

	let start = lowered.find(&needle)?;
	let end = start + needle.len();
	let first = *owners.get(start)?;
	let last = *owners.get(end - 1)?;
	Some(first..last + 1)
}
