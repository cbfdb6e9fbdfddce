/// A single language shown by the picker: its display name and a short icon
/// token rendered on the card.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LanguageEntry {
	pub name: String,
	pub icon: String,
}

impl LanguageEntry {
	/// Create a new [`LanguageEntry`] from the provided `name` and `icon`.
	#[must_use]
	pub fn new(name: impl Into<String>, icon: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			icon: icon.into(),
		}
	}
}
