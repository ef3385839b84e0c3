use std::fmt::Write;

use super::ResolvedConfig;

pub(super) fn render_summary(config: &ResolvedConfig) -> String {
	let combo = &config.combo;
	let mut out = String::new();
	let _ = writeln!(out, "Effective configuration:");
	match &config.records {
		Some(path) => {
			let _ = writeln!(out, "  Records: {}", path.display());
		}
		None => {
			let _ = writeln!(out, "  Records: (none)");
		}
	}
	let _ = writeln!(out, "  Match limit: {}", config.limit);
	let _ = writeln!(out, "  Results class: {}", combo.results_container_class);
	let _ = writeln!(out, "  Min query length: {}", combo.min_query_length);
	let _ = writeln!(out, "  Id field: {}", combo.id_field);
	let _ = writeln!(out, "  Text field: {}", combo.text_field);
	let _ = writeln!(out, "  Max visible items: {}", combo.max_visible_items);
	match combo.debounce_ms {
		0 => {
			let _ = writeln!(out, "  Debounce: off");
		}
		ms => {
			let _ = writeln!(out, "  Debounce: {ms} ms");
		}
	}
	let _ = writeln!(
		out,
		"  UI theme: {}",
		config
			.theme
			.as_deref()
			.unwrap_or("(derived from the results class)")
	);
	if let Some(title) = &config.title {
		let _ = writeln!(out, "  Prompt title: {title}");
	}
	if !config.initial_query.is_empty() {
		let _ = writeln!(out, "  Initial query: {}", config.initial_query);
	}
	out
}
