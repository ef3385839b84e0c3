//! Diagnostic logging to a file.
//!
//! The terminal is owned by the UI, so events go to a log file in the data
//! directory. The filter is read from `LIVECOMBO_LOG` and defaults to `warn`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

use crate::app_dirs;

pub const FILTER_ENV: &str = "LIVECOMBO_LOG";
const DEFAULT_FILTER: &str = "warn";
const LOG_FILE_NAME: &str = "livecombo.log";

/// Default log path inside the data directory.
pub fn default_log_path() -> Result<PathBuf> {
	Ok(app_dirs::get_data_dir()?.join(LOG_FILE_NAME))
}

/// Build the level filter from `LIVECOMBO_LOG`, falling back to `warn`.
pub fn env_filter() -> EnvFilter {
	EnvFilter::try_from_env(FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber writing to `path`, or to the default log
/// file when `path` is `None`.
pub fn initialize(path: Option<&Path>) -> Result<PathBuf> {
	let path = match path {
		Some(path) => path.to_path_buf(),
		None => default_log_path()?,
	};
	let directory = match path.parent() {
		Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
		_ => PathBuf::from("."),
	};
	fs::create_dir_all(&directory)
		.with_context(|| format!("failed to create log directory: {}", directory.display()))?;
	let file_name = path
		.file_name()
		.context("log file path has no file name")?
		.to_owned();

	let appender = tracing_appender::rolling::never(&directory, file_name);
	let (writer, guard) = tracing_appender::non_blocking(appender);
	// Flushes on drop; the subscriber lives for the whole process.
	std::mem::forget(guard);

	tracing_subscriber::registry()
		.with(env_filter())
		.with(
			fmt::layer()
				.with_target(true)
				.with_thread_ids(true)
				.with_ansi(false)
				.with_writer(writer),
		)
		.try_init()
		.context("failed to install tracing subscriber")?;

	tracing::info!(path = %path.display(), "livecombo logging initialized");
	Ok(path)
}
