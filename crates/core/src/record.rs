//! Opaque search records and the data attached to each rendered entry.

use serde_json::Value;

/// A single result item returned by the search provider.
///
/// Records are passed through untouched from the provider to the select and
/// quick-select handlers.
pub type Record = Value;

/// A record paired with the id and label looked up through the configured
/// field names.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
	/// Value of the configured id field, `Null` when the record lacks it.
	pub id: Value,
	/// Rendered label taken from the configured text field.
	pub text: String,
	/// The original record.
	pub record: Record,
}

impl Entry {
	/// Attach id and label to `record` using the given field names.
	pub fn from_record(record: Record, id_field: &str, text_field: &str) -> Self {
		let id = field(&record, id_field).cloned().unwrap_or(Value::Null);
		let text = label(field(&record, text_field));
		Self { id, text, record }
	}
}

fn field<'a>(record: &'a Record, name: &str) -> Option<&'a Value> {
	record.as_object().and_then(|object| object.get(name))
}

/// Render a field value for display without coercing its type.
pub fn label(value: Option<&Value>) -> String {
	match value {
		None | Some(Value::Null) => String::new(),
		Some(Value::String(text)) => text.clone(),
		Some(other) => other.to_string(),
	}
}

/// Interpret a raw provider payload.
///
/// Arrays yield their elements in order. `null` and every other shape are
/// treated as an absent result.
pub fn records_from_payload(payload: Value) -> Option<Vec<Record>> {
	match payload {
		Value::Array(items) => Some(items),
		_ => None,
	}
}
