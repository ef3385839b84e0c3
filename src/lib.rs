//! Library side of the `livecombo` binary.
//!
//! The combo box engine lives in `livecombo-core` and the terminal host in
//! `livecombo-tui`; this crate adds directory resolution, log setup and the
//! bundled JSON record provider.

pub mod app_dirs;
pub mod logging;
pub mod provider;

pub use livecombo_core::{ComboOptions, Record};
pub use livecombo_tui::{SearchOutcome, Selection, run};
pub use provider::{ProviderError, RecordIndex};
