//! Terminal event loop.

use std::collections::VecDeque;
use std::io::stdout;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;

use anyhow::{Result, anyhow};
use livecombo_core::{ComboOptions, SearchProvider};
use ratatui::crossterm::event::{
	self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind,
};
use ratatui::crossterm::execute;

use crate::{App, SearchOutcome};

/// Construct an [`App`] around `provider` and run it to completion.
pub fn run(provider: impl SearchProvider, options: ComboOptions) -> Result<SearchOutcome> {
	let mut app = App::new(provider, options);
	app.run()
}

impl<'a> App<'a> {
	/// Pump the terminal event loop until the user commits or cancels.
	pub fn run(&mut self) -> Result<SearchOutcome> {
		let mut terminal = ratatui::init();
		terminal.clear()?;
		execute!(stdout(), EnableMouseCapture)?;

		let (event_tx, event_rx) = mpsc::channel();
		let event_loop_running = Arc::new(AtomicBool::new(true));
		let event_loop_flag = Arc::clone(&event_loop_running);

		let event_thread = thread::spawn(move || -> Result<()> {
			while event_loop_flag.load(Ordering::Relaxed) {
				if event::poll(Duration::from_millis(50))? {
					let event = event::read()?;
					if event_tx.send(event).is_err() {
						break;
					}
				}
			}
			Ok(())
		});

		let mut pending_events = VecDeque::new();

		let result: Result<SearchOutcome> = 'event_loop: loop {
			loop {
				match event_rx.try_recv() {
					Ok(event) => pending_events.push_back(event),
					Err(mpsc::TryRecvError::Empty) => break,
					Err(mpsc::TryRecvError::Disconnected) => {
						break 'event_loop Err(anyhow!("input event channel disconnected"));
					}
				}
			}

			let mut maybe_outcome = None;
			while let Some(event) = pending_events.pop_front() {
				let outcome = match event {
					Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key)?,
					Event::Mouse(mouse) => self.handle_mouse(mouse),
					_ => None,
				};
				if outcome.is_some() {
					maybe_outcome = outcome;
					break;
				}
			}

			if let Some(outcome) = maybe_outcome.or_else(|| self.pump_search_results()) {
				break Ok(outcome);
			}
			self.throbber_state.calc_next();

			terminal.draw(|frame| self.draw(frame))?;

			thread::sleep(Duration::from_millis(16));
		};

		ratatui::restore();
		execute!(stdout(), DisableMouseCapture)?;

		event_loop_running.store(false, Ordering::Relaxed);
		match event_thread.join() {
			Ok(join_result) => join_result?,
			Err(err) => std::panic::resume_unwind(err),
		}

		match &result {
			Ok(outcome) if outcome.accepted => tracing::info!(query = %outcome.query, "session committed"),
			Ok(_) => tracing::debug!("session cancelled"),
			Err(err) => tracing::error!(error = %err, "session aborted"),
		}
		result
	}
}
