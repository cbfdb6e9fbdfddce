mod loader;

use std::sync::OnceLock;

use include_dir::{Dir, include_dir};
pub(super) use loader::BuiltinThemes;
use loader::load_builtin_themes;

use crate::style::theme::types::Theme;

const BUILTIN_THEME_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/style/theme/builtins/themes");

/// Get the default built-in theme.
pub fn default_theme() -> Theme {
	builtin_themes().default_theme
}

pub(super) fn builtin_themes() -> &'static BuiltinThemes {
	static BUILTINS: OnceLock<BuiltinThemes> = OnceLock::new();
	BUILTINS.get_or_init(|| {
		load_builtin_themes(&BUILTIN_THEME_DIR)
			.unwrap_or_else(|error| panic!("failed to load built-in themes: {error:#}"))
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn bundled_themes_load() {
		let builtins = builtin_themes();
		assert!(builtins.descriptors.len() >= 2);
		assert_eq!(
			builtins.default_theme,
			builtins
				.descriptors
				.iter()
				.find(|descriptor| descriptor.name == "indigo")
				.map(|descriptor| descriptor.theme)
				.expect("indigo theme is bundled")
		);
	}
}
