use std::path::PathBuf;

use livecombo_core::ComboOptions;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from flags, config files and
/// defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
	pub records: Option<PathBuf>,
	pub limit: usize,
	pub combo: ComboOptions,
	pub title: Option<String>,
	pub theme: Option<String>,
	pub initial_query: String,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		print!("{}", summary::render_summary(self));
	}
}
