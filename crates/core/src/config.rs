//! Per-instance configuration: options, callbacks and the search boundary.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::query::SearchBackend;
use crate::record::Record;

/// Plain settings for a combo box instance.
///
/// Every field has a default so partial configuration files merge over them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComboOptions {
	/// Style class of the results container; hosts resolve it to a theme.
	pub results_container_class: String,
	/// Inputs shorter than this many characters never query.
	pub min_query_length: usize,
	/// Record field used as the selection id.
	pub id_field: String,
	/// Record field rendered as the entry label.
	pub text_field: String,
	/// Rows shown before the overlay starts scrolling.
	pub max_visible_items: usize,
	/// Quiet period before a keystroke is turned into a query. Zero queries on
	/// every keystroke.
	pub debounce_ms: u64,
}

impl Default for ComboOptions {
	fn default() -> Self {
		Self {
			results_container_class: "comboBoxResults".to_string(),
			min_query_length: 3,
			id_field: "Id".to_string(),
			text_field: "Text".to_string(),
			max_visible_items: 8,
			debounce_ms: 0,
		}
	}
}

impl ComboOptions {
	pub fn debounce(&self) -> Duration {
		Duration::from_millis(self.debounce_ms)
	}
}

type QuickSelectFn = Box<dyn FnMut(&Record)>;
type SelectFn = Box<dyn FnMut(&Value, &str, &Record)>;
type CloseFn = Box<dyn FnMut()>;

/// Callbacks invoked by a combo box. Unset callbacks are no-ops.
pub struct Handlers {
	pub(crate) quick_select: Option<QuickSelectFn>,
	pub(crate) select: SelectFn,
	pub(crate) close: CloseFn,
}

impl Default for Handlers {
	fn default() -> Self {
		Self {
			quick_select: None,
			select: Box::new(|_, _, _| {}),
			close: Box::new(|| {}),
		}
	}
}

impl Handlers {
	pub fn new() -> Self {
		Self::default()
	}

	/// Fired whenever the highlight lands on an entry, before any commit.
	pub fn on_quick_select(mut self, handler: impl FnMut(&Record) + 'static) -> Self {
		self.quick_select = Some(Box::new(handler));
		self
	}

	/// Fired with `(id, text, record)` when an entry is committed.
	pub fn on_select(mut self, handler: impl FnMut(&Value, &str, &Record) + 'static) -> Self {
		self.select = Box::new(handler);
		self
	}

	/// Fired on every close, whether or not the overlay was open.
	pub fn on_close(mut self, handler: impl FnMut() + 'static) -> Self {
		self.close = Box::new(handler);
		self
	}
}

/// Everything needed to initialise a combo box instance.
pub struct ComboConfig {
	pub options: ComboOptions,
	pub handlers: Handlers,
	pub search: Box<dyn SearchBackend>,
}

impl ComboConfig {
	/// Default options and no-op handlers around the given search backend.
	pub fn new(search: impl SearchBackend + 'static) -> Self {
		Self {
			options: ComboOptions::default(),
			handlers: Handlers::default(),
			search: Box::new(search),
		}
	}

	pub fn with_options(mut self, options: ComboOptions) -> Self {
		self.options = options;
		self
	}

	pub fn with_handlers(mut self, handlers: Handlers) -> Self {
		self.handlers = handlers;
		self
	}
}
