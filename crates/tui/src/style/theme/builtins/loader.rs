use anyhow::{Context, Result, anyhow, bail};
use include_dir::{Dir, File};
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

use crate::style::theme::types::{Theme, ThemeDescriptor};

pub(in crate::style::theme) struct BuiltinThemes {
	pub(in crate::style::theme) descriptors: Vec<ThemeDescriptor>,
	pub(in crate::style::theme) default_theme: Theme,
}

#[derive(Debug, Deserialize)]
struct ThemeConfig {
	name: String,
	#[serde(default)]
	aliases: Vec<String>,
	#[serde(default)]
	default: bool,
	styles: ThemeStylesConfig,
}

impl ThemeConfig {
	fn into_document(self, context: &str) -> Result<ThemeDocument> {
		let theme = self.styles.into_theme(&format!("{context}.styles"))?;
		let aliases = self
			.aliases
			.into_iter()
			.map(|alias| alias.trim().to_string())
			.filter(|alias| !alias.is_empty())
			.collect();

		Ok(ThemeDocument {
			descriptor: ThemeDescriptor {
				name: self.name,
				aliases,
				theme,
			},
			is_default: self.default,
		})
	}
}

#[derive(Debug, Deserialize)]
struct ThemeStylesConfig {
	header: StyleConfig,
	muted: StyleConfig,
	card: StyleConfig,
	focus: StyleConfig,
	selected: StyleConfig,
	prompt: StyleConfig,
	empty: StyleConfig,
	highlight: StyleConfig,
}

impl ThemeStylesConfig {
	fn into_theme(self, context: &str) -> Result<Theme> {
		Ok(Theme {
			header: self.header.to_style(&format!("{context}.header"))?,
			muted: self.muted.to_style(&format!("{context}.muted"))?,
			card: self.card.to_style(&format!("{context}.card"))?,
			focus: self.focus.to_style(&format!("{context}.focus"))?,
			selected: self.selected.to_style(&format!("{context}.selected"))?,
			prompt: self.prompt.to_style(&format!("{context}.prompt"))?,
			empty: self.empty.to_style(&format!("{context}.empty"))?,
			highlight: self.highlight.to_style(&format!("{context}.highlight"))?,
		})
	}
}

struct ThemeDocument {
	descriptor: ThemeDescriptor,
	is_default: bool,
}

#[derive(Debug, Deserialize)]
struct StyleConfig {
	#[serde(default)]
	fg: Option<String>,
	#[serde(default)]
	bg: Option<String>,
	#[serde(default)]
	modifiers: Vec<String>,
}

impl StyleConfig {
	fn to_style(&self, context: &str) -> Result<Style> {
		let mut style = Style::new();

		if let Some(fg) = &self.fg {
			let color = parse_color(fg)
				.with_context(|| format!("{context}: invalid foreground colour `{fg}`"))?;
			style = style.fg(color);
		}

		if let Some(bg) = &self.bg {
			let color = parse_color(bg)
				.with_context(|| format!("{context}: invalid background colour `{bg}`"))?;
			style = style.bg(color);
		}

		for modifier in &self.modifiers {
			let modifier_value = parse_modifier(modifier)
				.with_context(|| format!("{context}: invalid modifier `{modifier}`"))?;
			style = style.add_modifier(modifier_value);
		}

		Ok(style)
	}
}

pub(super) fn load_builtin_themes(dir: &Dir) -> Result<BuiltinThemes> {
	let mut descriptors: Vec<ThemeDescriptor> = Vec::new();
	let mut default_theme: Option<(Theme, String)> = None;

	let mut files: Vec<_> = dir.files().collect();
	files.sort_by(|a, b| a.path().cmp(b.path()));

	for file in files {
		let document = parse_theme_document(file)?;
		let name = document.descriptor.name.clone();

		if descriptors
			.iter()
			.any(|existing| existing.name.eq_ignore_ascii_case(&name))
		{
			bail!("built-in theme `{name}` is defined more than once");
		}

		if document.is_default {
			if let Some((_, existing_name)) = &default_theme {
				bail!(
					"multiple built-in themes are marked as default (`{existing_name}` and `{name}`)"
				);
			}
			default_theme = Some((document.descriptor.theme, name));
		}

		descriptors.push(document.descriptor);
	}

	let Some(first) = descriptors.first() else {
		bail!("no built-in theme definitions were found");
	};

	let default_theme = default_theme.map_or(first.theme, |(theme, _)| theme);

	Ok(BuiltinThemes {
		descriptors,
		default_theme,
	})
}

fn parse_theme_document(file: &File) -> Result<ThemeDocument> {
	let path = file.path();
	let contents = file
		.contents_utf8()
		.with_context(|| format!("{path:?} is not valid UTF-8"))?;

	let config: ThemeConfig = toml::from_str(contents)
		.with_context(|| format!("failed to parse built-in theme definition in {path:?}"))?;

	config.into_document(&format!("{path:?}"))
}

/// Colours are ratatui colour names (`dark gray`, `light-blue`), `#rrggbb`
/// hex values, or a 256-colour palette index.
fn parse_color(input: &str) -> Result<Color> {
	let value = input.trim();
	value
		.parse::<Color>()
		.map_err(|_| anyhow!("unknown colour `{value}`"))
}

/// Modifiers are ratatui modifier names in any case, with `-` or spaces
/// standing in for underscores. `underline` is accepted for `underlined`.
fn parse_modifier(input: &str) -> Result<Modifier> {
	let name: String = input
		.trim()
		.chars()
		.map(|ch| match ch {
			'-' | ' ' => '_',
			other => other.to_ascii_uppercase(),
		})
		.collect();
	let name = if name == "UNDERLINE" { "UNDERLINED" } else { name.as_str() };
	Modifier::from_name(name).ok_or_else(|| anyhow!("unknown modifier `{}`", input.trim()))
}
