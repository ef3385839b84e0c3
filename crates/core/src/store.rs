//! The ordered result set backing an overlay and its highlight.

use crate::navigation::{Direction, Highlight};
use crate::record::{Entry, Record};

/// Outcome of [`ResultStore::replace`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Replaced {
	/// The payload was empty or absent; the caller must close the overlay.
	Empty,
	/// The store now holds `len` entries with the first one highlighted.
	Populated { len: usize },
}

/// Current result set in provider order plus the keyboard highlight.
///
/// The highlight is either [`Highlight::Idle`] or an in-bounds index into
/// the entries held right now.
#[derive(Debug, Default)]
pub struct ResultStore {
	entries: Vec<Entry>,
	highlight: Highlight,
}

impl ResultStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// Atomically swap in a fresh result set.
	pub fn replace(
		&mut self,
		records: Option<Vec<Record>>,
		id_field: &str,
		text_field: &str,
	) -> Replaced {
		let records = records.unwrap_or_default();
		if records.is_empty() {
			self.clear();
			return Replaced::Empty;
		}

		self.entries = records
			.into_iter()
			.map(|record| Entry::from_record(record, id_field, text_field))
			.collect();
		self.highlight = Highlight::initial(self.entries.len());
		Replaced::Populated {
			len: self.entries.len(),
		}
	}

	pub fn clear(&mut self) {
		self.entries.clear();
		self.highlight = Highlight::Idle;
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn entries(&self) -> &[Entry] {
		&self.entries
	}

	pub fn entry(&self, index: usize) -> Option<&Entry> {
		self.entries.get(index)
	}

	pub fn highlight(&self) -> Highlight {
		self.highlight
	}

	pub fn highlighted_entry(&self) -> Option<&Entry> {
		self.highlight.index().and_then(|index| self.entries.get(index))
	}

	/// Highlight `index`, returning `false` when it is out of bounds.
	pub fn set_highlight(&mut self, index: usize) -> bool {
		if index >= self.entries.len() {
			return false;
		}
		self.highlight = Highlight::Highlighted(index);
		true
	}

	/// Move the highlight one step and return the newly highlighted index.
	pub(crate) fn step(&mut self, direction: Direction) -> Option<usize> {
		self.highlight = self.highlight.step(direction, self.entries.len());
		self.highlight.index()
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	fn alpha_beta() -> Vec<Record> {
		vec![
			json!({"Id": 1, "Text": "Alpha"}),
			json!({"Id": 2, "Text": "Beta"}),
		]
	}

	#[test]
	fn replace_keeps_provider_order_and_highlights_first() {
		let mut store = ResultStore::new();
		let replaced = store.replace(Some(alpha_beta()), "Id", "Text");

		assert_eq!(replaced, Replaced::Populated { len: 2 });
		let labels: Vec<&str> = store.entries().iter().map(|e| e.text.as_str()).collect();
		assert_eq!(labels, ["Alpha", "Beta"]);
		assert_eq!(store.highlight(), Highlight::Highlighted(0));
	}

	#[test]
	fn replace_resets_highlight_regardless_of_prior_state() {
		let mut store = ResultStore::new();
		store.replace(Some(alpha_beta()), "Id", "Text");
		assert!(store.set_highlight(1));

		store.replace(Some(alpha_beta()), "Id", "Text");
		assert_eq!(store.highlight(), Highlight::Highlighted(0));
	}

	#[test]
	fn empty_or_absent_payload_clears_everything() {
		let mut store = ResultStore::new();
		store.replace(Some(alpha_beta()), "Id", "Text");

		assert_eq!(store.replace(Some(Vec::new()), "Id", "Text"), Replaced::Empty);
		assert!(store.is_empty());
		assert_eq!(store.highlight(), Highlight::Idle);

		store.replace(Some(alpha_beta()), "Id", "Text");
		assert_eq!(store.replace(None, "Id", "Text"), Replaced::Empty);
		assert!(store.highlighted_entry().is_none());
	}

	#[test]
	fn out_of_bounds_highlight_is_rejected() {
		let mut store = ResultStore::new();
		store.replace(Some(alpha_beta()), "Id", "Text");
		assert!(!store.set_highlight(2));
		assert_eq!(store.highlight(), Highlight::Highlighted(0));
	}
}
