//! Positioned, scrollable projection of a [`ResultStore`].
//!
//! Rows are one terminal line tall, so scroll offsets and item heights are
//! both measured in rows.

use std::ops::Range;

use ratatui::layout::Rect;

use crate::navigation::Direction;
use crate::page::ListenerId;
use crate::store::ResultStore;

#[derive(Debug, Clone)]
pub struct Overlay {
	max_visible: usize,
	visible: bool,
	rows: Vec<String>,
	anchor: Rect,
	area: Rect,
	scroll: usize,
	subscription: Option<ListenerId>,
}

impl Overlay {
	pub fn new(max_visible: usize) -> Self {
		Self {
			max_visible: max_visible.max(1),
			visible: false,
			rows: Vec::new(),
			anchor: Rect::default(),
			area: Rect::default(),
			scroll: 0,
			subscription: None,
		}
	}

	/// Record the measured geometry of the input this overlay hangs from.
	pub fn set_anchor(&mut self, anchor: Rect) {
		self.anchor = anchor;
		if self.visible {
			self.measure();
		}
	}

	/// Rebuild the rendered rows from the store.
	pub fn repaint(&mut self, store: &ResultStore) {
		self.rows = store.entries().iter().map(|e| e.text.clone()).collect();
		self.measure();
	}

	fn measure(&mut self) {
		let height = self.rows.len().min(self.max_visible);
		self.area = Rect {
			x: self.anchor.x,
			y: self.anchor.y.saturating_add(self.anchor.height),
			width: self.anchor.width,
			height: u16::try_from(height).unwrap_or(u16::MAX),
		};
	}

	/// Reveal and reposition. Returns `true` on the closed to open transition.
	pub(crate) fn show(&mut self) -> bool {
		self.measure();
		self.scroll = 0;
		if self.visible {
			return false;
		}
		self.visible = true;
		true
	}

	/// Hide and clear the rows, handing back the outside-click subscription.
	pub(crate) fn hide(&mut self) -> Option<ListenerId> {
		self.visible = false;
		self.rows.clear();
		self.scroll = 0;
		self.measure();
		self.subscription.take()
	}

	pub(crate) fn attach_subscription(&mut self, id: ListenerId) {
		self.subscription = Some(id);
	}

	/// Keep `index` inside the viewport after a highlight move.
	pub fn scroll_into_view(&mut self, index: usize, direction: Direction) {
		let viewport = self.viewport();
		if viewport == 0 {
			return;
		}
		let top = index as isize - self.scroll as isize;
		match direction {
			Direction::Down => {
				if top < 0 {
					self.scroll = 0;
				} else if top as usize >= viewport {
					self.scroll += 1;
				}
			}
			Direction::Up => {
				if top < 0 {
					self.scroll = self.scroll.saturating_sub(1);
				}
			}
		}

		// Jumps of more than one row (Up from idle) still land in view.
		if index < self.scroll {
			self.scroll = index;
		} else if index >= self.scroll + viewport {
			self.scroll = index + 1 - viewport;
		}
	}

	/// Entry index under a pointer position, if it hits a rendered row.
	pub fn item_at(&self, column: u16, row: u16) -> Option<usize> {
		if !self.visible || !contains(self.area, column, row) {
			return None;
		}
		let index = self.scroll + usize::from(row - self.area.y);
		(index < self.rows.len()).then_some(index)
	}

	/// Indices of the rows currently inside the viewport.
	pub fn visible_range(&self) -> Range<usize> {
		let end = (self.scroll + self.viewport()).min(self.rows.len());
		self.scroll.min(end)..end
	}

	fn viewport(&self) -> usize {
		usize::from(self.area.height)
	}

	pub fn is_open(&self) -> bool {
		self.visible
	}

	pub fn rows(&self) -> &[String] {
		&self.rows
	}

	pub fn area(&self) -> Rect {
		self.area
	}

	pub fn scroll(&self) -> usize {
		self.scroll
	}
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
	column >= area.x
		&& column < area.x.saturating_add(area.width)
		&& row >= area.y
		&& row < area.y.saturating_add(area.height)
}
