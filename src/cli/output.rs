use anyhow::Result;
use livecombo_tui::SearchOutcome;

/// Print a plain-text representation of the session outcome.
pub(crate) fn print_plain(outcome: &SearchOutcome) {
	println!("{}", format_outcome_plain(outcome));
}

pub(crate) fn format_outcome_plain(outcome: &SearchOutcome) -> String {
	if !outcome.accepted {
		return format!("Search cancelled (query: '{}')", outcome.query);
	}

	match &outcome.selection {
		Some(selection) => format!("{}\t{}", id_text(&selection.id), selection.text),
		None => "No selection".to_string(),
	}
}

/// Identifiers print bare when they are strings, as JSON otherwise.
fn id_text(id: &serde_json::Value) -> String {
	match id {
		serde_json::Value::String(id) => id.clone(),
		other => other.to_string(),
	}
}

pub(crate) fn format_outcome_json(outcome: &SearchOutcome) -> Result<String> {
	Ok(serde_json::to_string_pretty(outcome)?)
}

/// Print the JSON representation of the session outcome.
pub(crate) fn print_json(outcome: &SearchOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use livecombo_tui::Selection;
	use serde_json::{Value, json};

	use super::*;

	fn accepted() -> SearchOutcome {
		SearchOutcome {
			accepted: true,
			query: "Berlin".into(),
			selection: Some(Selection {
				id: json!("DE-BE"),
				text: "Berlin".into(),
				record: json!({"Id": "DE-BE", "Text": "Berlin"}),
			}),
		}
	}

	#[test]
	fn json_format_includes_selection() {
		let json = format_outcome_json(&accepted()).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["accepted"], true);
		assert_eq!(value["selection"]["id"], "DE-BE");
		assert_eq!(value["selection"]["record"]["Text"], "Berlin");
	}

	#[test]
	fn plain_format_prints_id_and_text() {
		assert_eq!(format_outcome_plain(&accepted()), "DE-BE\tBerlin");

		let mut numeric = accepted();
		if let Some(selection) = numeric.selection.as_mut() {
			selection.id = json!(7);
		}
		assert_eq!(format_outcome_plain(&numeric), "7\tBerlin");
	}

	#[test]
	fn cancelled_sessions_report_the_query() {
		let outcome = SearchOutcome {
			accepted: false,
			query: "ber".into(),
			selection: None,
		};
		assert_eq!(
			format_outcome_plain(&outcome),
			"Search cancelled (query: 'ber')"
		);
		let json = format_outcome_json(&outcome).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["selection"], Value::Null);
	}
}
