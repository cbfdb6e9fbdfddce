use serde::Serialize;

/// What the picker reports when the user leaves it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickerOutcome {
	/// `true` when the user left while viewing a language.
	pub accepted: bool,
	/// The language that was being viewed, if any.
	pub language: Option<String>,
	/// Search text at the time of exit.
	pub query: String,
}

impl PickerOutcome {
	#[must_use]
	pub fn cancelled(query: impl Into<String>) -> Self {
		Self {
			accepted: false,
			language: None,
			query: query.into(),
		}
	}

	#[must_use]
	pub fn viewed(language: impl Into<String>, query: impl Into<String>) -> Self {
		Self {
			accepted: true,
			language: Some(language.into()),
			query: query.into(),
		}
	}
}
