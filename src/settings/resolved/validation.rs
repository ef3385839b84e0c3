use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(config: &ResolvedConfig, sources: &ConfigSources) -> Result<(), ConfigError> {
	let combo = &config.combo;

	if combo.id_field.is_empty() {
		return Err(ConfigError::invalid(
			"combo.id_field",
			combo.id_field.clone(),
			ConfigSources::source_for(&sources.id_field),
			"must not be empty",
		));
	}

	if combo.text_field.is_empty() {
		return Err(ConfigError::invalid(
			"combo.text_field",
			combo.text_field.clone(),
			ConfigSources::source_for(&sources.text_field),
			"must not be empty",
		));
	}

	if combo.max_visible_items == 0 {
		return Err(ConfigError::invalid(
			"combo.max_visible_items",
			"0",
			ConfigSources::source_for(&sources.max_visible_items),
			"must be at least 1",
		));
	}

	if config.limit == 0 {
		return Err(ConfigError::invalid(
			"data.limit",
			"0",
			ConfigSources::source_for(&sources.limit),
			"must be at least 1",
		));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use livecombo_core::ComboOptions;

	use super::super::SettingSource;
	use super::*;

	fn config(combo: ComboOptions, limit: usize) -> ResolvedConfig {
		ResolvedConfig {
			records: None,
			limit,
			combo,
			title: None,
			theme: None,
			initial_query: String::new(),
		}
	}

	#[test]
	fn defaults_are_valid() {
		let config = config(ComboOptions::default(), 50);
		assert!(validate(&config, &ConfigSources::default()).is_ok());
	}

	#[test]
	fn validation_rejects_zero_visible_items() {
		let combo = ComboOptions {
			max_visible_items: 0,
			..ComboOptions::default()
		};
		let sources = ConfigSources {
			max_visible_items: Some(SettingSource::Environment(
				"LIVECOMBO__COMBO__MAX_VISIBLE_ITEMS",
			)),
			..ConfigSources::default()
		};

		let err = validate(&config(combo, 50), &sources).unwrap_err();
		assert_eq!(err.key, "combo.max_visible_items");
		let message = err.to_string();
		assert!(message.contains("value: 0"));
		assert!(message.contains("environment variable"));
	}

	#[test]
	fn validation_rejects_empty_id_field() {
		let combo = ComboOptions {
			id_field: String::new(),
			..ComboOptions::default()
		};
		let sources = ConfigSources {
			id_field: Some(SettingSource::ConfigKey("combo.id_field")),
			..ConfigSources::default()
		};

		let err = validate(&config(combo, 50), &sources).unwrap_err();
		assert_eq!(err.key, "combo.id_field");
		assert!(err.to_string().contains("configuration key"));
	}

	#[test]
	fn validation_rejects_zero_limit() {
		let err = validate(
			&config(ComboOptions::default(), 0),
			&ConfigSources::default(),
		)
		.unwrap_err();
		assert_eq!(err.key, "data.limit");
		assert_eq!(err.origin, SettingSource::Default);
	}
}
