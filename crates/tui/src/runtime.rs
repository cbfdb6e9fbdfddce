//! Application runtime and event loop.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;

use anyhow::{Result, anyhow};
use codedocs_catalog::Catalog;
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use crate::App;
use crate::outcome::PickerOutcome;
use crate::viewer::DocumentationViewer;

/// Construct an [`App`] for the provided catalog and run it to completion.
pub fn run(catalog: &Catalog) -> Result<PickerOutcome> {
	let mut app = App::new(catalog);
	app.run()
}

impl<V: DocumentationViewer> App<'_, V> {
	/// Pump the terminal event loop until the user exits with an outcome.
	pub fn run(&mut self) -> Result<PickerOutcome> {
		let mut terminal = ratatui::init();
		terminal.clear()?;
		info!("picker started");

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

		let result: Result<PickerOutcome> = 'event_loop: loop {
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
				if let Event::Key(key) = event
					&& key.kind == KeyEventKind::Press
				{
					match self.handle_key(key) {
						Ok(Some(outcome)) => {
							maybe_outcome = Some(Ok(outcome));
							break;
						}
						Ok(None) => {}
						Err(err) => {
							maybe_outcome = Some(Err(err));
							break;
						}
					}
				}
			}

			if let Some(outcome) = maybe_outcome {
				break outcome;
			}

			if let Err(err) = terminal.draw(|frame| self.draw(frame)) {
				break Err(err.into());
			}

			thread::sleep(Duration::from_millis(16));
		};

		ratatui::restore();

		event_loop_running.store(false, Ordering::Relaxed);
		match event_thread.join() {
			Ok(join_result) => join_result?,
			Err(err) => std::panic::resume_unwind(err),
		}

		if let Ok(outcome) = &result {
			info!(accepted = outcome.accepted, language = ?outcome.language, "picker finished");
		}
		result
	}
}
