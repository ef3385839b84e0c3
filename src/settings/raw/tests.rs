use std::fs;
use std::path::PathBuf;

use clap::Parser;
use tempfile::tempdir;

use super::RawConfig;
use crate::cli::CliArgs;

#[test]
fn cli_overrides_take_precedence() {
	let mut cli = CliArgs::parse_from(["livecombo"]);
	cli.records = Some(PathBuf::from("/tmp/records.json"));
	cli.limit = Some(5);
	cli.title = Some("title".into());
	cli.theme = Some("slate".into());
	cli.initial_query = Some("query".into());
	cli.results_class = Some("light".into());
	cli.min_query_length = Some(1);
	cli.id_field = Some("code".into());
	cli.text_field = Some("name".into());
	cli.max_visible_items = Some(4);
	cli.debounce_ms = Some(120);

	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);

	assert_eq!(config.data.records, cli.records);
	assert_eq!(config.data.limit, cli.limit);
	assert_eq!(config.ui.title, cli.title);
	assert_eq!(config.ui.theme, cli.theme);
	assert_eq!(config.ui.initial_query, cli.initial_query);
	assert_eq!(config.combo.results_container_class, cli.results_class);
	assert_eq!(config.combo.min_query_length, Some(1));
	assert_eq!(config.combo.id_field, cli.id_field);
	assert_eq!(config.combo.text_field, cli.text_field);
	assert_eq!(config.combo.max_visible_items, Some(4));
	assert_eq!(config.combo.debounce_ms, Some(120));
}

#[test]
fn unset_values_resolve_to_defaults() {
	let cli = CliArgs::parse_from(["livecombo"]);
	let resolved = RawConfig::default().resolve(&cli).expect("resolve");

	assert_eq!(resolved.combo, livecombo_core::ComboOptions::default());
	assert_eq!(resolved.limit, livecombo::provider::DEFAULT_LIMIT);
	assert_eq!(resolved.records, None);
	assert_eq!(resolved.title, None);
	assert!(resolved.initial_query.is_empty());
}

#[test]
fn title_defaults_to_records_file_stem() {
	let dir = tempdir().expect("tempdir");
	let records = dir.path().join("cities.json");
	fs::write(&records, "[]").expect("write");

	let mut cli = CliArgs::parse_from(["livecombo"]);
	cli.records = Some(records.clone());
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);
	let resolved = config.resolve(&cli).expect("resolve");

	assert_eq!(resolved.title.as_deref(), Some("cities"));
	assert_eq!(resolved.records, Some(records));
}

#[test]
fn missing_records_file_is_rejected() {
	let mut cli = CliArgs::parse_from(["livecombo"]);
	cli.records = Some(PathBuf::from("/definitely/not/here.json"));
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);

	let err = config.resolve(&cli).unwrap_err();
	assert!(err.to_string().contains("does not exist"));
}

#[test]
fn blank_field_names_are_rejected() {
	let mut cli = CliArgs::parse_from(["livecombo"]);
	cli.text_field = Some("   ".into());
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);

	let err = config.resolve(&cli).unwrap_err();
	let message = err.to_string();
	assert!(message.contains("combo.text_field"));
	assert!(message.contains("CLI flag `--text-field`"));
}
