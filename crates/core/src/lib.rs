//! Headless engine for a live-search combo box.
//!
//! A text input queries an asynchronous search provider as the user types,
//! the answers are projected into an overlay list hanging below the input,
//! and the keyboard or pointer picks a candidate. This crate owns the
//! interaction state machine only; hosts supply the text input, rendering and
//! the transport that carries [`QueryRequest`]s to a [`SearchProvider`].

mod combo;
mod command;
mod config;
mod error;
mod navigation;
mod overlay;
mod page;
mod query;
mod record;
mod store;

pub use combo::{ComboBox, Resolution, SearchResponse};
pub use command::{Command, Method};
pub use config::{ComboConfig, ComboOptions, Handlers};
pub use error::{ComboError, Result};
pub use navigation::{Direction, Highlight, NavEvent};
pub use overlay::Overlay;
pub use page::{ClickOutcome, ComboId, Document, ListenerId, Page};
pub use query::{Gate, QueryController, QueryRequest, SearchBackend, SearchProvider};
pub use record::{Entry, Record, label, records_from_payload};
pub use store::{Replaced, ResultStore};
