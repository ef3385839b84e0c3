//! A single combo box instance wiring the store, overlay, query controller
//! and keyboard state machine together.

use std::time::Instant;

use crate::config::{ComboConfig, ComboOptions, Handlers};
use crate::error::{ComboError, Result};
use crate::navigation::{Direction, Highlight, NavEvent};
use crate::overlay::Overlay;
use crate::page::{ComboId, Document};
use crate::query::{Gate, QueryController, SearchBackend};
use crate::record::records_from_payload;
use crate::store::{Replaced, ResultStore};

/// Raw provider payload delivered by a host for a previously issued query.
pub type SearchResponse = anyhow::Result<serde_json::Value>;

/// What happened to a search response handed to [`ComboBox::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
	/// The response replaced the result set and the overlay is open.
	Applied { len: usize },
	/// The response was empty and the overlay was closed.
	Closed,
	/// A newer query was issued (or the overlay was dismissed) first.
	Stale,
}

pub struct ComboBox {
	id: ComboId,
	options: ComboOptions,
	handlers: Handlers,
	search: Box<dyn SearchBackend>,
	store: ResultStore,
	overlay: Overlay,
	query: QueryController,
}

impl ComboBox {
	pub(crate) fn new(id: ComboId, config: ComboConfig) -> Self {
		let ComboConfig {
			options,
			handlers,
			search,
		} = config;
		let overlay = Overlay::new(options.max_visible_items);
		let query = QueryController::new(options.min_query_length, options.debounce());
		Self {
			id,
			options,
			handlers,
			search,
			store: ResultStore::new(),
			overlay,
			query,
		}
	}

	/// Feed a keyboard or text event through the state machine.
	pub(crate) fn handle(&mut self, event: NavEvent, now: Instant, document: &mut Document) {
		match event {
			NavEvent::Down => self.move_highlight(Direction::Down),
			NavEvent::Up => self.move_highlight(Direction::Up),
			NavEvent::Enter => {
				if let Some(index) = self.store.highlight().index() {
					self.commit(index, document);
				}
			}
			NavEvent::Escape => self.close(document),
			NavEvent::TextChanged(text) => match self.query.input(&text, now) {
				Gate::Close => self.close(document),
				Gate::Dispatch(request) => self.search.submit(request),
				Gate::Deferred => {}
			},
		}
	}

	/// Release a debounced query once it is due.
	pub(crate) fn tick(&mut self, now: Instant) {
		if let Some(request) = self.query.tick(now) {
			self.search.submit(request);
		}
	}

	/// Apply the provider's answer to query `seq`.
	///
	/// Payloads that are not arrays count as absent and close the overlay.
	/// Provider failures close it too and are then reported to the caller.
	pub(crate) fn resolve(
		&mut self,
		seq: u64,
		response: SearchResponse,
		document: &mut Document,
	) -> Result<Resolution> {
		let Some(query) = self.query.complete(seq) else {
			return Ok(Resolution::Stale);
		};

		match response {
			Ok(payload) => {
				let replaced = self.store.replace(
					records_from_payload(payload),
					&self.options.id_field,
					&self.options.text_field,
				);
				match replaced {
					Replaced::Empty => {
						self.close(document);
						Ok(Resolution::Closed)
					}
					Replaced::Populated { len } => {
						self.overlay.repaint(&self.store);
						self.quick_select(0);
						self.open(document);
						Ok(Resolution::Applied { len })
					}
				}
			}
			Err(err) => {
				let message = format!("{err:#}");
				tracing::warn!(seq, query = %query, error = %message, "search provider failed");
				self.close(document);
				Err(ComboError::Search { query, message })
			}
		}
	}

	/// Position and reveal the overlay. Does nothing while there are no results.
	pub(crate) fn open(&mut self, document: &mut Document) {
		if self.store.is_empty() {
			return;
		}
		if self.overlay.show() {
			let subscription = document.subscribe(self.id);
			self.overlay.attach_subscription(subscription);
			tracing::debug!(combo = ?self.id, rows = self.store.len(), "overlay opened");
		}
	}

	/// Hide the overlay, drop the current results and notify `on_close`.
	pub(crate) fn close(&mut self, document: &mut Document) {
		self.query.invalidate();
		if let Some(subscription) = self.overlay.hide() {
			document.unsubscribe(subscription);
		}
		self.store.clear();
		(self.handlers.close)();
	}

	/// Commit entry `index` as if its row had been clicked.
	pub(crate) fn commit(&mut self, index: usize, document: &mut Document) -> bool {
		let Some(entry) = self.store.entry(index) else {
			return false;
		};
		tracing::info!(combo = ?self.id, index, text = %entry.text, "entry selected");
		(self.handlers.select)(&entry.id, &entry.text, &entry.record);
		self.close(document);
		true
	}

	/// Release document resources without running callbacks.
	pub(crate) fn teardown(&mut self, document: &mut Document) {
		self.query.invalidate();
		if let Some(subscription) = self.overlay.hide() {
			document.unsubscribe(subscription);
		}
		self.store.clear();
	}

	pub(crate) fn set_anchor(&mut self, anchor: ratatui::layout::Rect) {
		self.overlay.set_anchor(anchor);
	}

	fn move_highlight(&mut self, direction: Direction) {
		if self.store.is_empty() {
			return;
		}
		if let Some(index) = self.store.step(direction) {
			self.overlay.scroll_into_view(index, direction);
			self.quick_select(index);
		}
	}

	fn quick_select(&mut self, index: usize) {
		let Some(handler) = self.handlers.quick_select.as_mut() else {
			return;
		};
		if let Some(entry) = self.store.entry(index) {
			handler(&entry.record);
		}
	}

	pub fn id(&self) -> ComboId {
		self.id
	}

	pub fn store(&self) -> &ResultStore {
		&self.store
	}

	pub fn overlay(&self) -> &Overlay {
		&self.overlay
	}

	pub fn highlight(&self) -> Highlight {
		self.store.highlight()
	}

	pub fn is_open(&self) -> bool {
		self.overlay.is_open()
	}

	pub fn is_query_in_flight(&self) -> bool {
		self.query.is_in_flight()
	}

	pub fn next_query_due(&self) -> Option<Instant> {
		self.query.next_due()
	}
}
