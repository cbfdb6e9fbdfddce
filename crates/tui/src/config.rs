/// Human-readable text rendered around the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiLabels {
	/// Small badge shown above the title.
	pub badge: String,
	/// Main heading.
	pub title: String,
	/// One-line description under the heading.
	pub tagline: String,
	/// Placeholder shown inside the empty search input.
	pub placeholder: String,
	/// Note rendered beneath the grid.
	pub footer: String,
	/// Heading of the empty-state notice.
	pub empty_title: String,
	/// Hint under the empty-state heading.
	pub empty_hint: String,
	/// Hint rendered by the placeholder documentation viewer.
	pub back_hint: String,
}

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			badge: "AI-Powered Documentation".to_string(),
			title: "Code Docs".to_string(),
			tagline: "Instant documentation for any programming language.".to_string(),
			placeholder: "Search languages...".to_string(),
			footer: "Select a language to start exploring its documentation".to_string(),
			empty_title: "No languages found".to_string(),
			empty_hint: "Try searching for a different language".to_string(),
			back_hint: "Press Esc to go back".to_string(),
		}
	}
}

impl UiLabels {
	/// Replace the heading.
	#[must_use]
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = title.into();
		self
	}

	/// Replace the input placeholder.
	#[must_use]
	pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.placeholder = placeholder.into();
		self
	}

	/// Stats line shown under the tagline, e.g. `16+ Languages`.
	#[must_use]
	pub fn stats_line(&self, total: usize) -> String {
		format!("{total}+ Languages · Real-time Search · Code Examples")
	}
}
