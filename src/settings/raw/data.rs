use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result, ensure};
use livecombo::provider::DEFAULT_LIMIT;
use serde::Deserialize;

use crate::cli::CliArgs;

/// `[data]` table describing the bundled record provider.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct DataSection {
	pub(super) records: Option<PathBuf>,
	pub(super) limit: Option<usize>,
}

impl DataSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(path) = cli.records.clone() {
			self.records = Some(path);
		}
		if let Some(value) = cli.limit {
			self.limit = Some(value);
		}
	}

	/// Absolute records path (when configured) and the match limit.
	pub(super) fn resolve(self) -> Result<(Option<PathBuf>, usize)> {
		let limit = self.limit.unwrap_or(DEFAULT_LIMIT);
		let Some(mut records) = self.records else {
			return Ok((None, limit));
		};

		if records.is_relative() {
			records = env::current_dir()
				.context("failed to resolve current directory for records")?
				.join(records);
		}
		ensure!(
			records.is_file(),
			"records file {} does not exist",
			records.display()
		);

		Ok((Some(records), limit))
	}
}
