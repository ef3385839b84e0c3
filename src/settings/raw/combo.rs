use livecombo_core::ComboOptions;
use serde::Deserialize;

use crate::cli::CliArgs;

/// `[combo]` table; unset keys keep the engine defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct ComboSection {
	pub(super) results_container_class: Option<String>,
	pub(super) min_query_length: Option<usize>,
	pub(super) id_field: Option<String>,
	pub(super) text_field: Option<String>,
	pub(super) max_visible_items: Option<usize>,
	pub(super) debounce_ms: Option<u64>,
}

impl ComboSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(class) = cli.results_class.clone() {
			self.results_container_class = Some(class);
		}
		if let Some(value) = cli.min_query_length {
			self.min_query_length = Some(value);
		}
		if let Some(field) = cli.id_field.clone() {
			self.id_field = Some(field);
		}
		if let Some(field) = cli.text_field.clone() {
			self.text_field = Some(field);
		}
		if let Some(value) = cli.max_visible_items {
			self.max_visible_items = Some(value);
		}
		if let Some(value) = cli.debounce_ms {
			self.debounce_ms = Some(value);
		}
	}

	pub(super) fn finalize(self) -> ComboOptions {
		let defaults = ComboOptions::default();
		ComboOptions {
			results_container_class: self
				.results_container_class
				.unwrap_or(defaults.results_container_class),
			min_query_length: self.min_query_length.unwrap_or(defaults.min_query_length),
			id_field: self
				.id_field
				.map(|field| field.trim().to_string())
				.unwrap_or(defaults.id_field),
			text_field: self
				.text_field
				.map(|field| field.trim().to_string())
				.unwrap_or(defaults.text_field),
			max_visible_items: self.max_visible_items.unwrap_or(defaults.max_visible_items),
			debounce_ms: self.debounce_ms.unwrap_or(defaults.debounce_ms),
		}
	}
}
