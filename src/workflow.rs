use anyhow::Result;
use codedocs::{Picker, PickerOutcome};
use tracing::info;

use crate::settings::ResolvedConfig;

/// Coordinates building and running the interactive language picker.
pub(crate) struct PickerWorkflow {
	config: ResolvedConfig,
}

impl PickerWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Self {
		Self { config }
	}

	/// Translate the resolved configuration into a configured [`Picker`].
	fn picker(&self) -> Result<Picker<'_>> {
		let config = &self.config;
		let mut picker = Picker::new(config.catalog())
			.with_initial_query(config.initial_query.clone())
			.with_labels(config.labels.clone())
			.with_policy(config.policy);
		if let Some(theme) = config.theme.as_deref() {
			picker = picker.with_theme_name(theme)?;
		}
		Ok(picker)
	}

	pub(crate) fn run(self) -> Result<PickerOutcome> {
		info!(
			languages = self.config.catalog().len(),
			policy = ?self.config.policy,
			"starting picker"
		);
		let outcome = self.picker()?.run()?;
		info!(accepted = outcome.accepted, language = ?outcome.language, "picker closed");
		Ok(outcome)
	}
}

#[cfg(test)]
mod tests {
	use codedocs::{Catalog, LanguageEntry, Phase, SelectionPolicy};

	use super::*;

	#[test]
	fn picker_reflects_resolved_configuration() {
		let config = ResolvedConfig {
			initial_query: "ru".into(),
			theme: Some("mono".into()),
			policy: SelectionPolicy::CatalogOnly,
			..ResolvedConfig::default()
		};
		let workflow = PickerWorkflow::from_config(config);

		let app = workflow.picker().expect("picker builds").into_app();
		assert_eq!(app.picker().search_filter(), "ru");
		assert_eq!(app.picker().policy(), SelectionPolicy::CatalogOnly);
		assert_eq!(app.picker().phase(), Phase::Browsing);
	}

	#[test]
	fn picker_uses_configured_catalog() {
		let catalog = Catalog::new(vec![LanguageEntry::new("Zig", "⚡")]).expect("catalog");
		let config = ResolvedConfig {
			catalog: Some(catalog),
			..ResolvedConfig::default()
		};
		let workflow = PickerWorkflow::from_config(config);

		let app = workflow.picker().expect("picker builds").into_app();
		let names: Vec<&str> = app
			.picker()
			.compute_filtered()
			.into_iter()
			.map(|entry| entry.name.as_str())
			.collect();
		assert_eq!(names, ["Zig"]);
	}
}
