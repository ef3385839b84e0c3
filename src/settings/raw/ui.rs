use std::path::Path;

use serde::Deserialize;

use crate::cli::CliArgs;

/// `[ui]` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) title: Option<String>,
	pub(super) theme: Option<String>,
	pub(super) initial_query: Option<String>,
}

pub(super) struct UiResolution {
	pub(super) title: Option<String>,
	pub(super) theme: Option<String>,
	pub(super) initial_query: String,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(title) = cli.title.clone() {
			self.title = Some(title);
		}
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
		if let Some(query) = cli.initial_query.clone() {
			self.initial_query = Some(query);
		}
	}

	/// The title falls back to the records file stem.
	pub(super) fn finalize(self, records: Option<&Path>) -> UiResolution {
		let title = self.title.or_else(|| {
			records
				.and_then(Path::file_stem)
				.map(|stem| stem.to_string_lossy().into_owned())
		});

		UiResolution {
			title,
			theme: self.theme,
			initial_query: self.initial_query.unwrap_or_default(),
		}
	}
}
