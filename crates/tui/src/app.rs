//! State of the terminal combo box session.
//!
//! The [`App`] owns a [`Page`] with a single combo box instance, the text
//! input feeding it and the worker answering its queries. Engine callbacks
//! are queued as [`Signal`]s and drained after every event.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::Instant;

use anyhow::Result;
use livecombo_core::{
	ComboConfig, ComboId, ComboOptions, Handlers, NavEvent, Page, Record, SearchProvider,
};
use ratatui::crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use serde::Serialize;
use serde_json::Value;
use throbber_widgets_tui::ThrobberState;

use crate::input::QueryInput;
use crate::keys::{KeyRoute, route};
use crate::style::{Theme, for_class};
use crate::worker::{QueryResponse, WorkerHandle, spawn};

/// A committed entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Selection {
	pub id: Value,
	pub text: String,
	pub record: Record,
}

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchOutcome {
	pub accepted: bool,
	pub query: String,
	pub selection: Option<Selection>,
}

impl SearchOutcome {
	fn cancelled(query: &str) -> Self {
		Self {
			accepted: false,
			query: query.to_string(),
			selection: None,
		}
	}
}

#[derive(Debug)]
enum Signal {
	QuickSelect(Record),
	Selected(Selection),
	Closed,
}

pub struct App<'a> {
	pub(crate) page: Page,
	pub(crate) combo: ComboId,
	pub(crate) input: QueryInput<'a>,
	pub(crate) title: Option<String>,
	pub(crate) theme: Theme,
	pub(crate) throbber_state: ThrobberState,
	/// Record under the highlight, shown as a preview line.
	pub(crate) preview: Option<Record>,
	/// Last provider failure, cleared by the next edit.
	pub(crate) error: Option<String>,
	worker: WorkerHandle,
	responses: Receiver<QueryResponse>,
	signals: Rc<RefCell<VecDeque<Signal>>>,
}

impl<'a> Drop for App<'a> {
	fn drop(&mut self) {
		self.worker.shutdown();
	}
}

impl<'a> App<'a> {
	/// Build a session whose queries are answered by `provider` on a
	/// background thread.
	pub fn new(provider: impl SearchProvider, options: ComboOptions) -> Self {
		let (worker, responses) = spawn(provider);
		let signals = Rc::new(RefCell::new(VecDeque::new()));
		let theme = for_class(&options.results_container_class);

		let config = ComboConfig::new(worker.clone())
			.with_options(options)
			.with_handlers(signal_handlers(&signals));
		let mut page = Page::new();
		let combo = page.init(config);

		Self {
			page,
			combo,
			input: QueryInput::new(""),
			title: None,
			theme,
			throbber_state: ThrobberState::default(),
			preview: None,
			error: None,
			worker,
			responses,
			signals,
		}
	}

	pub fn set_title(&mut self, title: impl Into<String>) {
		self.title = Some(title.into());
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.theme = theme;
	}

	/// Prefill the input and run it through the query gate.
	pub fn set_initial_query(&mut self, query: &str) -> Result<()> {
		self.input.set_text(query);
		self.page
			.handle(self.combo, NavEvent::TextChanged(query.to_string()))?;
		Ok(())
	}

	pub fn query(&self) -> &str {
		self.input.text()
	}

	pub fn page(&self) -> &Page {
		&self.page
	}

	pub fn combo(&self) -> ComboId {
		self.combo
	}

	/// Process a key press, returning an outcome once the session ends.
	pub fn handle_key(&mut self, key: KeyEvent) -> Result<Option<SearchOutcome>> {
		match route(&key) {
			KeyRoute::Quit => return Ok(Some(SearchOutcome::cancelled(self.query()))),
			KeyRoute::Nav(NavEvent::Escape) if !self.is_open() => {
				return Ok(Some(SearchOutcome::cancelled(self.query())));
			}
			KeyRoute::Nav(event) => self.page.handle(self.combo, event)?,
			KeyRoute::Edit => {
				self.input.input(key);
				self.error = None;
				let text = self.input.text().to_string();
				self.page.handle(self.combo, NavEvent::TextChanged(text))?;
			}
		}
		Ok(self.drain_signals())
	}

	/// Forward left clicks to the page.
	pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<SearchOutcome> {
		if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
			self.page.click(mouse.column, mouse.row);
		}
		self.drain_signals()
	}

	/// Release due debounced queries and apply any responses that arrived.
	pub fn pump_search_results(&mut self) -> Option<SearchOutcome> {
		self.page.tick(Instant::now());
		loop {
			match self.responses.try_recv() {
				Ok(QueryResponse { seq, response }) => {
					if let Err(err) = self.page.resolve(self.combo, seq, response) {
						self.error = Some(err.to_string());
					}
				}
				Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
			}
		}
		self.drain_signals()
	}

	pub fn is_open(&self) -> bool {
		self.page
			.get(self.combo)
			.is_some_and(|combo| combo.is_open())
	}

	pub fn is_searching(&self) -> bool {
		self.page
			.get(self.combo)
			.is_some_and(|combo| combo.is_query_in_flight() || combo.next_query_due().is_some())
	}

	fn drain_signals(&mut self) -> Option<SearchOutcome> {
		let mut outcome = None;
		loop {
			let Some(signal) = self.signals.borrow_mut().pop_front() else {
				break;
			};
			match signal {
				Signal::QuickSelect(record) => self.preview = Some(record),
				Signal::Closed => self.preview = None,
				Signal::Selected(selection) => {
					self.input.set_text(selection.text.clone());
					outcome = Some(SearchOutcome {
						accepted: true,
						query: self.query().to_string(),
						selection: Some(selection),
					});
				}
			}
		}
		outcome
	}
}

fn signal_handlers(signals: &Rc<RefCell<VecDeque<Signal>>>) -> Handlers {
	let quick = Rc::clone(signals);
	let select = Rc::clone(signals);
	let close = Rc::clone(signals);
	Handlers::new()
		.on_quick_select(move |record| {
			quick
				.borrow_mut()
				.push_back(Signal::QuickSelect(record.clone()))
		})
		.on_select(move |id, text, record| {
			select.borrow_mut().push_back(Signal::Selected(Selection {
				id: id.clone(),
				text: text.to_string(),
				record: record.clone(),
			}))
		})
		.on_close(move || close.borrow_mut().push_back(Signal::Closed))
}

#[cfg(test)]
mod tests;
