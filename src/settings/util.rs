/// Trim a user supplied string, treating whitespace-only values as unset.
pub(super) fn non_blank(value: Option<String>) -> Option<String> {
	value
		.map(|text| text.trim().to_string())
		.filter(|text| !text.is_empty())
}
