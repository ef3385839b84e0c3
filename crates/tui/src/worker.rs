//! Background thread running the search provider.
//!
//! The UI thread hands queries over a channel and polls for responses. The
//! worker skips queries that were superseded before it got to them; stale
//! responses that still slip through are discarded by the engine.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use livecombo_core::{QueryRequest, SearchBackend, SearchProvider, SearchResponse};

#[derive(Debug)]
pub(crate) enum WorkerCommand {
	Query(QueryRequest),
	Shutdown,
}

/// A provider answer tagged with the query it belongs to.
#[derive(Debug)]
pub struct QueryResponse {
	pub seq: u64,
	pub response: SearchResponse,
}

/// Sending half of the worker, plugged into a combo box as its backend.
#[derive(Debug, Clone)]
pub struct WorkerHandle {
	tx: Sender<WorkerCommand>,
	latest_seq: Arc<AtomicU64>,
}

impl WorkerHandle {
	pub fn shutdown(&self) {
		let _ = self.tx.send(WorkerCommand::Shutdown);
	}
}

impl SearchBackend for WorkerHandle {
	fn submit(&mut self, request: QueryRequest) {
		self.latest_seq.store(request.seq, Ordering::Release);
		if self.tx.send(WorkerCommand::Query(request)).is_err() {
			tracing::warn!("search worker is gone; dropping query");
		}
	}
}

/// Launch the worker thread for `provider`.
pub fn spawn(provider: impl SearchProvider) -> (WorkerHandle, Receiver<QueryResponse>) {
	let (command_tx, command_rx) = mpsc::channel();
	let (response_tx, response_rx) = mpsc::channel();
	let latest_seq = Arc::new(AtomicU64::new(0));
	let thread_latest = Arc::clone(&latest_seq);

	thread::spawn(move || worker_loop(provider, command_rx, response_tx, thread_latest));

	(
		WorkerHandle {
			tx: command_tx,
			latest_seq,
		},
		response_rx,
	)
}

fn worker_loop(
	mut provider: impl SearchProvider,
	command_rx: Receiver<WorkerCommand>,
	response_tx: Sender<QueryResponse>,
	latest_seq: Arc<AtomicU64>,
) {
	while let Ok(command) = command_rx.recv() {
		match command {
			WorkerCommand::Query(request) => {
				if request.seq < latest_seq.load(Ordering::Acquire) {
					tracing::trace!(seq = request.seq, "skipping superseded query");
					continue;
				}
				let response = provider.search(&request.query);
				if response_tx
					.send(QueryResponse {
						seq: request.seq,
						response,
					})
					.is_err()
				{
					break;
				}
			}
			WorkerCommand::Shutdown => break,
		}
	}
}

#[cfg(test)]
mod tests {
	use std::time::Duration;

	use anyhow::{Result, bail};
	use serde_json::{Value, json};

	use super::*;

	fn echo(query: &str) -> Result<Value> {
		if query == "fail" {
			bail!("provider refused");
		}
		Ok(json!([{"Id": 1, "Text": query}]))
	}

	#[test]
	fn responses_carry_their_sequence_number() {
		let (mut handle, rx) = spawn(echo);
		handle.submit(QueryRequest {
			seq: 1,
			query: "abc".into(),
		});

		let response = rx.recv_timeout(Duration::from_secs(1)).expect("response");
		assert_eq!(response.seq, 1);
		let payload = response.response.expect("payload");
		assert_eq!(payload, json!([{"Id": 1, "Text": "abc"}]));
		handle.shutdown();
	}

	#[test]
	fn provider_errors_are_forwarded() {
		let (mut handle, rx) = spawn(echo);
		handle.submit(QueryRequest {
			seq: 7,
			query: "fail".into(),
		});

		let response = rx.recv_timeout(Duration::from_secs(1)).expect("response");
		assert_eq!(response.seq, 7);
		let err = response.response.unwrap_err();
		assert_eq!(err.to_string(), "provider refused");
		handle.shutdown();
	}

	#[test]
	fn shutdown_stops_worker() {
		let (mut handle, rx) = spawn(echo);
		handle.shutdown();
		handle.submit(QueryRequest {
			seq: 1,
			query: "late".into(),
		});
		assert!(rx.recv_timeout(Duration::from_millis(200)).is_err());
	}
}
