//! Arena of combo box instances sharing one document.
//!
//! Instances are keyed by [`ComboId`]. Outside-click dismissal is modelled as
//! explicit one-shot subscriptions on the [`Document`], released on close or
//! teardown so that creating and destroying instances never leaks listeners.

use std::time::Instant;

use ratatui::layout::Rect;
use slotmap::{SlotMap, new_key_type};

use crate::combo::{ComboBox, Resolution, SearchResponse};
use crate::command::{Command, Method};
use crate::config::ComboConfig;
use crate::error::{ComboError, Result};
use crate::navigation::NavEvent;

new_key_type! {
	/// Identifies a combo box instance inside a [`Page`].
	pub struct ComboId;

	/// Handle of an outside-click subscription on the [`Document`].
	pub struct ListenerId;
}

/// Page-wide listener registry.
#[derive(Debug, Default)]
pub struct Document {
	outside_click: SlotMap<ListenerId, ComboId>,
}

impl Document {
	/// Register a one-shot outside-click listener owned by `owner`.
	pub fn subscribe(&mut self, owner: ComboId) -> ListenerId {
		self.outside_click.insert(owner)
	}

	/// Remove a listener. Returns `false` if it already fired or was removed.
	pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
		self.outside_click.remove(id).is_some()
	}

	/// Fire every listener once, returning their owners.
	fn drain(&mut self) -> Vec<ComboId> {
		self.outside_click.drain().map(|(_, owner)| owner).collect()
	}

	pub fn listener_count(&self) -> usize {
		self.outside_click.len()
	}

	pub fn listeners_for(&self, owner: ComboId) -> usize {
		self.outside_click
			.values()
			.filter(|candidate| **candidate == owner)
			.count()
	}
}

/// Result of routing a pointer click through the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
	/// A rendered entry of this instance was committed. Every other open
	/// instance was dismissed.
	Committed(ComboId),
	/// The click was outside every result list; this many listeners fired.
	Dismissed(usize),
}

#[derive(Default)]
pub struct Page {
	combos: SlotMap<ComboId, ComboBox>,
	document: Document,
}

impl Page {
	pub fn new() -> Self {
		Self::default()
	}

	/// Create a new instance from `config`.
	pub fn init(&mut self, config: ComboConfig) -> ComboId {
		let id = self.combos.insert_with_key(|id| ComboBox::new(id, config));
		tracing::debug!(combo = ?id, "combo box initialised");
		id
	}

	pub fn get(&self, id: ComboId) -> Option<&ComboBox> {
		self.combos.get(id)
	}

	pub fn len(&self) -> usize {
		self.combos.len()
	}

	pub fn is_empty(&self) -> bool {
		self.combos.is_empty()
	}

	pub fn document(&self) -> &Document {
		&self.document
	}

	fn with_combo<R>(
		&mut self,
		id: ComboId,
		f: impl FnOnce(&mut ComboBox, &mut Document) -> R,
	) -> Result<R> {
		let combo = self
			.combos
			.get_mut(id)
			.ok_or_else(|| ComboError::UnknownInstance(format!("{id:?}")))?;
		Ok(f(combo, &mut self.document))
	}

	pub fn open(&mut self, id: ComboId) -> Result<()> {
		self.with_combo(id, |combo, document| combo.open(document))
	}

	pub fn close(&mut self, id: ComboId) -> Result<()> {
		self.with_combo(id, |combo, document| combo.close(document))
	}

	pub fn handle(&mut self, id: ComboId, event: NavEvent) -> Result<()> {
		self.handle_at(id, event, Instant::now())
	}

	pub fn handle_at(&mut self, id: ComboId, event: NavEvent, now: Instant) -> Result<()> {
		self.with_combo(id, |combo, document| combo.handle(event, now, document))
	}

	/// Release debounced queries that are due on every instance.
	pub fn tick(&mut self, now: Instant) {
		for combo in self.combos.values_mut() {
			combo.tick(now);
		}
	}

	/// Deliver the response to query `seq` of instance `id`.
	pub fn resolve(
		&mut self,
		id: ComboId,
		seq: u64,
		response: SearchResponse,
	) -> Result<Resolution> {
		self.with_combo(id, |combo, document| combo.resolve(seq, response, document))?
	}

	/// Update the measured geometry of the input backing instance `id`.
	pub fn set_anchor(&mut self, id: ComboId, anchor: Rect) -> Result<()> {
		self.with_combo(id, |combo, _| combo.set_anchor(anchor))
	}

	/// Route a pointer click at `(column, row)`.
	///
	/// A click on a rendered entry commits it. The click still reaches the
	/// document, so every other instance's outside-click listener fires.
	pub fn click(&mut self, column: u16, row: u16) -> ClickOutcome {
		let hit = self
			.combos
			.iter()
			.find_map(|(id, combo)| combo.overlay().item_at(column, row).map(|index| (id, index)));
		if let Some((id, index)) = hit
			&& let Some(combo) = self.combos.get_mut(id)
		{
			combo.commit(index, &mut self.document);
			self.dismiss_outside();
			return ClickOutcome::Committed(id);
		}

		ClickOutcome::Dismissed(self.dismiss_outside())
	}

	/// Fire and drain every outside-click listener, closing its owner.
	fn dismiss_outside(&mut self) -> usize {
		let owners = self.document.drain();
		for owner in &owners {
			if let Some(combo) = self.combos.get_mut(*owner) {
				combo.close(&mut self.document);
			}
		}
		owners.len()
	}

	/// Tear down instance `id`, releasing its document subscriptions.
	pub fn remove(&mut self, id: ComboId) -> bool {
		match self.combos.remove(id) {
			Some(mut combo) => {
				combo.teardown(&mut self.document);
				true
			}
			None => false,
		}
	}

	/// Run a typed command. `Init` without a target creates an instance; with
	/// a target it re-initialises that instance in place.
	pub fn dispatch(&mut self, target: Option<ComboId>, command: Command) -> Result<ComboId> {
		match (command, target) {
			(Command::Init(config), None) => Ok(self.init(*config)),
			(Command::Init(config), Some(id)) => {
				let combo = self
					.combos
					.get_mut(id)
					.ok_or_else(|| ComboError::UnknownInstance(format!("{id:?}")))?;
				combo.teardown(&mut self.document);
				*combo = ComboBox::new(id, *config);
				Ok(id)
			}
			(Command::Open, Some(id)) => self.open(id).map(|()| id),
			(Command::Close, Some(id)) => self.close(id).map(|()| id),
			(_, None) => Err(ComboError::UnknownInstance("none".to_string())),
		}
	}

	/// Name-based entry point for hosts that route operations by string.
	pub fn call(&mut self, id: ComboId, method: &str) -> Result<()> {
		match method.parse::<Method>()? {
			Method::Init => Err(ComboError::MissingOptions),
			Method::Open => self.open(id),
			Method::Close => self.close(id),
		}
	}
}
