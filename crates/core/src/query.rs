//! Query gating and the single in-flight query contract.
//!
//! Every accepted keystroke issues a [`QueryRequest`] tagged with a
//! monotonically increasing sequence number. Responses are only applied when
//! their sequence number matches the latest request, so a slow early query can
//! never repaint over a faster later one.

use std::time::{Duration, Instant};

use anyhow::Result;
use serde_json::Value;

/// A query handed to the search backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
	pub seq: u64,
	pub query: String,
}

/// Host-side boundary that carries queries to the search provider.
///
/// Implementations must not resolve synchronously from inside `submit`; the
/// response is delivered later through [`crate::Page::resolve`].
pub trait SearchBackend {
	fn submit(&mut self, request: QueryRequest);
}

impl<F> SearchBackend for F
where
	F: FnMut(QueryRequest),
{
	fn submit(&mut self, request: QueryRequest) {
		self(request)
	}
}

/// The search function executed off the UI thread by a host worker.
///
/// Providers answer with a raw JSON payload. An array lists the records in
/// display order; `null` or any other shape means there are no results.
pub trait SearchProvider: Send + 'static {
	fn search(&mut self, query: &str) -> Result<Value>;
}

impl<F> SearchProvider for F
where
	F: FnMut(&str) -> Result<Value> + Send + 'static,
{
	fn search(&mut self, query: &str) -> Result<Value> {
		self(query)
	}
}

/// What the controller decided for a text change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gate {
	/// Input is too short or was dismissed; the overlay must close.
	Close,
	/// Send this request to the backend now.
	Dispatch(QueryRequest),
	/// A query is armed and will be released by [`QueryController::tick`].
	Deferred,
}

#[derive(Debug, Clone)]
struct Pending {
	query: String,
	due: Instant,
}

#[derive(Debug)]
pub struct QueryController {
	min_query_length: usize,
	debounce: Duration,
	next_seq: u64,
	latest: Option<(u64, String)>,
	pending: Option<Pending>,
}

impl QueryController {
	pub fn new(min_query_length: usize, debounce: Duration) -> Self {
		Self {
			min_query_length,
			debounce,
			next_seq: 0,
			latest: None,
			pending: None,
		}
	}

	/// Gate a text change. Empty or short input closes without querying.
	pub fn input(&mut self, text: &str, now: Instant) -> Gate {
		if text.is_empty() || text.chars().count() < self.min_query_length {
			self.invalidate();
			return Gate::Close;
		}

		if self.debounce.is_zero() {
			self.pending = None;
			return Gate::Dispatch(self.issue(text.to_string()));
		}

		self.pending = Some(Pending {
			query: text.to_string(),
			due: now + self.debounce,
		});
		Gate::Deferred
	}

	/// Release an armed query whose quiet period has elapsed.
	pub fn tick(&mut self, now: Instant) -> Option<QueryRequest> {
		let due = self.pending.as_ref()?.due;
		if now < due {
			return None;
		}
		let pending = self.pending.take()?;
		Some(self.issue(pending.query))
	}

	/// When the armed query becomes due, if any.
	pub fn next_due(&self) -> Option<Instant> {
		self.pending.as_ref().map(|pending| pending.due)
	}

	fn issue(&mut self, query: String) -> QueryRequest {
		self.next_seq = self.next_seq.saturating_add(1);
		let seq = self.next_seq;
		self.latest = Some((seq, query.clone()));
		tracing::debug!(seq, query = %query, "issuing search query");
		QueryRequest { seq, query }
	}

	/// Whether a response tagged `seq` belongs to the latest request.
	pub fn accepts(&self, seq: u64) -> bool {
		matches!(&self.latest, Some((latest, _)) if *latest == seq)
	}

	/// Settle the latest request, returning its query text. Stale or
	/// duplicate responses yield `None`.
	pub fn complete(&mut self, seq: u64) -> Option<String> {
		if !self.accepts(seq) {
			tracing::debug!(seq, "discarding stale search response");
			return None;
		}
		self.latest.take().map(|(_, query)| query)
	}

	/// Forget the outstanding and armed queries.
	pub fn invalidate(&mut self) {
		self.latest = None;
		self.pending = None;
	}

	pub fn is_in_flight(&self) -> bool {
		self.latest.is_some()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn immediate(min: usize) -> QueryController {
		QueryController::new(min, Duration::ZERO)
	}

	#[test]
	fn short_input_closes_without_querying() {
		let mut controller = immediate(3);
		let now = Instant::now();
		assert_eq!(controller.input("", now), Gate::Close);
		assert_eq!(controller.input("a", now), Gate::Close);
		assert_eq!(controller.input("ab", now), Gate::Close);
		assert!(!controller.is_in_flight());
	}

	#[test]
	fn long_enough_input_dispatches_with_increasing_sequence() {
		let mut controller = immediate(3);
		let now = Instant::now();
		assert_eq!(
			controller.input("abc", now),
			Gate::Dispatch(QueryRequest {
				seq: 1,
				query: "abc".into()
			})
		);
		assert_eq!(
			controller.input("abcd", now),
			Gate::Dispatch(QueryRequest {
				seq: 2,
				query: "abcd".into()
			})
		);
	}

	#[test]
	fn zero_minimum_still_gates_empty_text() {
		let mut controller = immediate(0);
		assert_eq!(controller.input("", Instant::now()), Gate::Close);
		assert!(matches!(
			controller.input("x", Instant::now()),
			Gate::Dispatch(_)
		));
	}

	#[test]
	fn length_counts_characters() {
		let mut controller = immediate(3);
		assert!(matches!(
			controller.input("åäö", Instant::now()),
			Gate::Dispatch(_)
		));
	}

	#[test]
	fn only_latest_response_is_accepted() {
		let mut controller = immediate(1);
		let now = Instant::now();
		controller.input("a", now);
		controller.input("ab", now);

		assert_eq!(controller.complete(1), None);
		assert_eq!(controller.complete(2), Some("ab".to_string()));
		assert_eq!(controller.complete(2), None);
	}

	#[test]
	fn closing_invalidates_outstanding_query() {
		let mut controller = immediate(3);
		let now = Instant::now();
		controller.input("abc", now);
		assert_eq!(controller.input("ab", now), Gate::Close);
		assert!(!controller.accepts(1));
	}

	#[test]
	fn debounce_releases_only_the_last_keystroke() {
		let mut controller = QueryController::new(1, Duration::from_millis(100));
		let start = Instant::now();
		assert_eq!(controller.input("a", start), Gate::Deferred);
		assert_eq!(
			controller.input("ab", start + Duration::from_millis(50)),
			Gate::Deferred
		);

		assert_eq!(controller.tick(start + Duration::from_millis(120)), None);
		let request = controller
			.tick(start + Duration::from_millis(150))
			.expect("query released");
		assert_eq!(request.query, "ab");
		assert_eq!(request.seq, 1);
		assert_eq!(controller.next_due(), None);
	}

	#[test]
	fn closing_drops_armed_query() {
		let mut controller = QueryController::new(3, Duration::from_millis(10));
		let start = Instant::now();
		controller.input("abc", start);
		controller.input("", start);
		assert_eq!(controller.tick(start + Duration::from_secs(1)), None);
	}
}
