//! Terminal host for the livecombo engine.
//!
//! Wires a single combo box to a text input line, renders its overlay below
//! the input, runs the search provider on a worker thread and turns the
//! engine's callbacks into a [`SearchOutcome`].

mod app;
pub mod input;
mod keys;
mod render;
mod runtime;
pub mod style;
mod worker;

pub use app::{App, SearchOutcome, Selection};
pub use input::QueryInput;
pub use keys::{KeyRoute, route};
pub use runtime::run;
pub use style::{Theme, ThemeRegistration, builtin_themes, default_theme};
pub use worker::{QueryResponse, WorkerHandle, spawn};
