use thiserror::Error;

/// Errors surfaced to hosts driving a [`crate::Page`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ComboError {
	/// A name-based call referenced an operation that does not exist.
	#[error("method {0} does not exist on livecombo")]
	UnknownMethod(String),
	/// `init` was requested by name without an options payload.
	#[error("method init requires combo options")]
	MissingOptions,
	/// The target instance was never created or has been removed.
	#[error("no combo box instance with id {0}")]
	UnknownInstance(String),
	/// The search provider failed for the latest query.
	#[error("search for '{query}' failed: {message}")]
	Search { query: String, message: String },
}

pub type Result<T, E = ComboError> = std::result::Result<T, E>;
