use anyhow::{Context, Result};
use livecombo::provider::RecordIndex;
use livecombo_tui::{App, SearchOutcome, style};

use crate::settings::ResolvedConfig;

/// Builds the terminal session from resolved settings and runs it.
pub(crate) struct SearchWorkflow {
	config: ResolvedConfig,
	index: RecordIndex,
}

impl SearchWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let path = config
			.records
			.clone()
			.context("no records to search; pass --records FILE or set data.records")?;
		let index = RecordIndex::from_file(&path, &config.combo.text_field)?
			.with_limit(config.limit);
		if index.is_empty() {
			tracing::warn!(path = %path.display(), "records file is empty");
		}
		Ok(Self { config, index })
	}

	pub(crate) fn run(self) -> Result<SearchOutcome> {
		let mut app = self.build_app()?;
		app.run()
	}

	fn build_app(self) -> Result<App<'static>> {
		let Self { config, index } = self;
		let ResolvedConfig {
			combo,
			title,
			theme,
			initial_query,
			..
		} = config;

		let mut app = App::new(index, combo);
		if let Some(title) = title {
			app.set_title(title);
		}
		if let Some(name) = theme {
			match style::by_name(&name) {
				Some(theme) => app.set_theme(theme),
				None => tracing::warn!(theme = %name, "unknown theme; keeping the default"),
			}
		}
		if !initial_query.is_empty() {
			app.set_initial_query(&initial_query)?;
		}
		Ok(app)
	}
}

#[cfg(test)]
mod tests {
	use std::fs;

	use livecombo_core::ComboOptions;
	use serde_json::json;
	use tempfile::tempdir;

	use super::*;

	fn config(records: Option<std::path::PathBuf>) -> ResolvedConfig {
		ResolvedConfig {
			records,
			limit: 10,
			combo: ComboOptions::default(),
			title: Some("Cities".into()),
			theme: Some("slate".into()),
			initial_query: "ber".into(),
		}
	}

	#[test]
	fn missing_records_path_is_reported() {
		let err = SearchWorkflow::from_config(config(None))
			.err()
			.expect("workflow without records");
		assert!(err.to_string().contains("--records"));
	}

	#[test]
	fn app_is_seeded_from_settings() {
		let dir = tempdir().expect("tempdir");
		let path = dir.path().join("cities.json");
		let records = json!([{"Id": 1, "Text": "Berlin"}, {"Id": 2, "Text": "Bern"}]);
		fs::write(&path, records.to_string()).expect("write");

		let workflow = SearchWorkflow::from_config(config(Some(path))).expect("workflow");
		let app = workflow.build_app().expect("app");
		assert_eq!(app.query(), "ber");
		assert!(app.is_searching());
	}
}
