//! Fuzzy search over a JSON file of records.
//!
//! [`RecordIndex`] is the search provider bundled with the binary: it loads an
//! array of records once, then scores each query against every record's text
//! field with `frizbee`.

use std::fs;
use std::path::{Path, PathBuf};

use frizbee::{Config, match_list};
use livecombo_core::{Record, SearchProvider, label};
use serde_json::Value;
use thiserror::Error;

/// Datasets at least this large enable frizbee's prefilter.
pub const PREFILTER_ENABLE_THRESHOLD: usize = 1_000;

/// Default number of matches returned per query.
pub const DEFAULT_LIMIT: usize = 50;

#[derive(Debug, Error)]
pub enum ProviderError {
	#[error("failed to read records from {}: {source}", .path.display())]
	Read {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("failed to parse records in {}: {source}", .path.display())]
	Parse {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},
	#[error("records in {} must be a JSON array", .path.display())]
	NotAnArray { path: PathBuf },
}

/// In-memory record set with precomputed haystacks.
#[derive(Debug, Clone)]
pub struct RecordIndex {
	records: Vec<Record>,
	haystacks: Vec<String>,
	limit: usize,
}

impl RecordIndex {
	/// Index `records`, matching queries against `text_field`.
	pub fn new(records: Vec<Record>, text_field: &str) -> Self {
		let haystacks = records
			.iter()
			.map(|record| label(record.get(text_field)))
			.collect();
		Self {
			records,
			haystacks,
			limit: DEFAULT_LIMIT,
		}
	}

	/// Load a JSON array of records from `path`.
	pub fn from_file(path: &Path, text_field: &str) -> Result<Self, ProviderError> {
		let contents = fs::read_to_string(path).map_err(|source| ProviderError::Read {
			path: path.to_path_buf(),
			source,
		})?;
		let value: Value =
			serde_json::from_str(&contents).map_err(|source| ProviderError::Parse {
				path: path.to_path_buf(),
				source,
			})?;
		let Value::Array(records) = value else {
			return Err(ProviderError::NotAnArray {
				path: path.to_path_buf(),
			});
		};
		tracing::debug!(path = %path.display(), count = records.len(), "loaded records");
		Ok(Self::new(records, text_field))
	}

	pub fn with_limit(mut self, limit: usize) -> Self {
		self.limit = limit;
		self
	}

	pub fn len(&self) -> usize {
		self.records.len()
	}

	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}

	/// Records matching `query`, best score first, at most `limit` of them.
	/// Equal scores keep file order.
	pub fn query(&self, query: &str) -> Vec<Record> {
		let trimmed = query.trim();
		if trimmed.is_empty() {
			return self.records.iter().take(self.limit).cloned().collect();
		}

		let config = config_for_query(trimmed, self.haystacks.len());
		let haystacks: Vec<&str> = self.haystacks.iter().map(String::as_str).collect();
		let mut matches: Vec<(usize, u16)> = match_list(trimmed, &haystacks, &config)
			.into_iter()
			.filter(|entry| entry.score > 0)
			.map(|entry| (entry.index as usize, entry.score))
			.collect();
		matches.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

		matches
			.into_iter()
			.take(self.limit)
			.map(|(index, _)| self.records[index].clone())
			.collect()
	}
}

impl SearchProvider for RecordIndex {
	fn search(&mut self, query: &str) -> anyhow::Result<Value> {
		Ok(Value::Array(self.query(query)))
	}
}

/// Matching options for `query`; typo tolerance grows with query length.
pub fn config_for_query(query: &str, dataset_len: usize) -> Config {
	let mut config = Config {
		prefilter: false,
		..Config::default()
	};

	let length = query.chars().count();
	let mut allowed_typos: u16 = match length {
		0 | 1 => 0,
		2..=4 => 1,
		5..=7 => 2,
		8..=12 => 3,
		_ => 4,
	};
	if let Ok(max_reasonable) = u16::try_from(length.saturating_sub(1)) {
		allowed_typos = allowed_typos.min(max_reasonable);
	}

	if dataset_len >= PREFILTER_ENABLE_THRESHOLD {
		config.prefilter = true;
		config.max_typos = Some(allowed_typos);
	} else {
		config.max_typos = None;
	}
	config.sort = false;

	config
}
