//! Themes for the input line and the results overlay.
//!
//! A combo box names its results container class; the class is looked up
//! here by name or alias to pick the colours the overlay is drawn with.

mod loader;

use std::sync::OnceLock;

use include_dir::{Dir, include_dir};
use ratatui::style::Style;

use loader::{BuiltinThemes, load_builtin_themes, normalise_name};

const BUILTIN_THEME_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/style/themes");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Title shown in front of the input.
	pub prompt: Style,
	/// Text typed into the input.
	pub input: Style,
	/// Rows of the results overlay.
	pub results: Style,
	/// The highlighted row.
	pub highlight: Style,
	/// Quick-select preview line.
	pub preview: Style,
	/// Search failures.
	pub error: Style,
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

/// A named theme and the alternate names it answers to.
#[derive(Debug, Clone)]
pub struct ThemeRegistration {
	pub name: String,
	pub aliases: Vec<String>,
	pub theme: Theme,
}

impl ThemeRegistration {
	fn answers_to(&self, normalised: &str) -> bool {
		normalise_name(&self.name) == normalised
			|| self
				.aliases
				.iter()
				.any(|alias| normalise_name(alias) == normalised)
	}
}

fn builtins() -> &'static BuiltinThemes {
	static BUILTINS: OnceLock<BuiltinThemes> = OnceLock::new();
	BUILTINS.get_or_init(|| {
		load_builtin_themes(&BUILTIN_THEME_DIR)
			.unwrap_or_else(|error| panic!("failed to load built-in themes: {error:#}"))
	})
}

pub fn default_theme() -> Theme {
	builtins().default_theme
}

pub fn builtin_themes() -> &'static [ThemeRegistration] {
	&builtins().registrations
}

/// Look a theme up by name or alias, ignoring case and `-`/`_` differences.
pub fn by_name(name: &str) -> Option<Theme> {
	let normalised = normalise_name(name);
	builtin_themes()
		.iter()
		.find(|registration| registration.answers_to(&normalised))
		.map(|registration| registration.theme)
}

/// Canonical names of the built-in themes.
pub fn names() -> Vec<&'static str> {
	builtin_themes()
		.iter()
		.map(|registration| registration.name.as_str())
		.collect()
}

/// Theme for a results container class, falling back to the default.
pub fn for_class(class: &str) -> Theme {
	by_name(class).unwrap_or_else(|| {
		tracing::warn!(class, "unknown results container class, using default theme");
		default_theme()
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn builtins_load_with_default_class() {
		let names = names();
		assert!(names.contains(&"comboBoxResults"));
		assert!(names.contains(&"solarized"));
		assert_eq!(by_name("comboBoxResults"), Some(default_theme()));
	}

	#[test]
	fn lookups_accept_aliases_and_spelling_variants() {
		assert_eq!(by_name("Solarized_Dark"), by_name("solarized"));
		assert!(by_name("default").is_some());
		assert!(by_name("no-such-theme").is_none());
	}

	#[test]
	fn unknown_classes_fall_back_to_default() {
		assert_eq!(for_class("custom-class"), default_theme());
	}
}
