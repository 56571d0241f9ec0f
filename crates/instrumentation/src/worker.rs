// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Background flush worker, one per logger.
//!
//! Producers never wait for the worker: they push into the pending buffer and
//! drop a wake token into a single-slot channel. A full channel means a wake
//! is already queued and the worker will see the new entry when it drains.

use std::{
	sync::Arc,
	thread::{self, JoinHandle},
};

use crossbeam_channel::{Receiver, Sender, TrySendError, bounded};
use parking_lot::Mutex;
use tracing::debug;

use crate::sink::Sink;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Signal {
	Wake,
	Shutdown,
}

pub(crate) struct FlushWorker {
	sender: Sender<Signal>,
	handle: Option<JoinHandle<()>>,
}

impl FlushWorker {
	pub(crate) fn spawn(name: String, sink: Arc<Mutex<Sink>>) -> Self {
		let (sender, receiver) = bounded(1);

		let handle = thread::Builder::new()
			.name(name.clone())
			.spawn(move || {
				debug!(worker = %name, "flush worker started");
				worker_loop(&sink, receiver);
				debug!(worker = %name, "flush worker stopped");
			})
			.expect("Failed to spawn flush worker");

		Self {
			sender,
			handle: Some(handle),
		}
	}

	/// Non-blocking wake-up
	pub(crate) fn wake(&self) {
		match self.sender.try_send(Signal::Wake) {
			Ok(()) | Err(TrySendError::Full(_)) => {}
			Err(TrySendError::Disconnected(_)) => {
				debug!("flush worker already gone, entry stays buffered");
			}
		}
	}

	/// Asks the worker to drain what is left and exit, then joins it.
	pub(crate) fn shutdown(mut self) {
		self.stop();
	}

	fn stop(&mut self) {
		if let Some(handle) = self.handle.take() {
			let _ = self.sender.send(Signal::Shutdown);
			let _ = handle.join();
		}
	}
}

impl Drop for FlushWorker {
	fn drop(&mut self) {
		self.stop();
	}
}

fn worker_loop(sink: &Mutex<Sink>, receiver: Receiver<Signal>) {
	// entries buffered while no worker was running
	sink.lock().drain();

	for signal in receiver.iter() {
		sink.lock().drain();
		if signal == Signal::Shutdown {
			return;
		}
	}
	// every sender dropped without a shutdown signal
	sink.lock().drain();
}
