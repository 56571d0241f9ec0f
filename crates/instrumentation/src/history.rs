// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Bounded history of recent log entries

use std::{collections::VecDeque, fmt::Write};

use parking_lot::Mutex;

use crate::entry::LogEntry;

/// Maximum number of entries retained
pub const MAX_HISTORY_SIZE: usize = 100;

/// Ring of the most recent entries of one logger, oldest first.
///
/// Readers always get an owned copy, so a snapshot never changes after it
/// was taken.
pub struct LogHistory {
	entries: Mutex<VecDeque<LogEntry>>,
}

impl LogHistory {
	pub fn new() -> Self {
		Self {
			entries: Mutex::new(VecDeque::with_capacity(MAX_HISTORY_SIZE + 1)),
		}
	}

	pub fn add_log(&self, entry: LogEntry) {
		push_bounded(&mut self.entries.lock(), entry);
	}

	/// Appends `entry` and returns the snapshot that includes it, both under
	/// one lock hold so no concurrent append can land in between.
	pub fn add_log_and_snapshot(&self, entry: LogEntry) -> Vec<String> {
		let mut entries = self.entries.lock();
		push_bounded(&mut entries, entry);
		entries.iter().map(LogEntry::to_plain_string).collect()
	}

	/// Plain renderings of all retained entries, most recent last
	pub fn snapshot(&self) -> Vec<String> {
		self.entries.lock().iter().map(LogEntry::to_plain_string).collect()
	}

	pub fn get_history(&self) -> Vec<String> {
		self.snapshot()
	}

	pub fn get_history_as_string(&self) -> String {
		let entries = self.entries.lock();
		let mut result = String::from("Log History (most recent last):\n");
		for entry in entries.iter() {
			let _ = writeln!(result, "  {entry}");
		}
		result
	}

	pub fn len(&self) -> usize {
		self.entries.lock().len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.lock().is_empty()
	}

	pub fn capacity(&self) -> usize {
		MAX_HISTORY_SIZE
	}
}

fn push_bounded(entries: &mut VecDeque<LogEntry>, entry: LogEntry) {
	entries.push_back(entry);
	while entries.len() > MAX_HISTORY_SIZE {
		entries.pop_front();
	}
}

impl Default for LogHistory {
	fn default() -> Self {
		Self::new()
	}
}
