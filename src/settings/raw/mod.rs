use std::env;

use anyhow::{Error, Result};
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod combo;
mod data;
mod ui;

use combo::ComboSection;
use data::DataSection;
use ui::UiSection;

/// Mirror of the configuration file before CLI overrides and validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	combo: ComboSection,
	ui: UiSection,
	data: DataSection,
}

impl RawConfig {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.combo.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
		self.data.apply_cli_overrides(cli);
	}

	/// Fill defaults, validate and produce the [`ResolvedConfig`].
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			id_field: detect_source(
				cli.id_field.is_some(),
				self.combo.id_field.is_some(),
				"LIVECOMBO__COMBO__ID_FIELD",
				"--id-field",
				"combo.id_field",
			),
			text_field: detect_source(
				cli.text_field.is_some(),
				self.combo.text_field.is_some(),
				"LIVECOMBO__COMBO__TEXT_FIELD",
				"--text-field",
				"combo.text_field",
			),
			max_visible_items: detect_source(
				cli.max_visible_items.is_some(),
				self.combo.max_visible_items.is_some(),
				"LIVECOMBO__COMBO__MAX_VISIBLE_ITEMS",
				"--max-visible",
				"combo.max_visible_items",
			),
			limit: detect_source(
				cli.limit.is_some(),
				self.data.limit.is_some(),
				"LIVECOMBO__DATA__LIMIT",
				"--limit",
				"data.limit",
			),
		};

		let combo = self.combo.finalize();
		let (records, limit) = self.data.resolve()?;
		let ui = self.ui.finalize(records.as_deref());

		let config = ResolvedConfig {
			records,
			limit,
			combo,
			title: ui.title,
			theme: ui.theme,
			initial_query: ui.initial_query,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}

#[cfg(test)]
mod tests;
