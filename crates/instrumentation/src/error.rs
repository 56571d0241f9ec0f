// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{fmt::Write, io, path::PathBuf};

pub type Result<T> = std::result::Result<T, Error>;

/// Configuration errors. These never escape a logger: they are reported as
/// console warnings and the logger falls back to a safe state.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Invalid log level {0}")]
	InvalidLevel(u8),

	#[error("Failed to open log file {}", path.display())]
	OpenLogFile {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	#[error("Invalid instrumentation config: {0}")]
	Config(#[from] serde_json::Error),
}

/// Returned by a logger for every accepted ERROR entry.
///
/// Carries the rendered entry and the logger's history as it was when the
/// entry was recorded. The history is an owned copy; later activity on the
/// logger is never visible through it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct LoggedRuntimeError {
	message: String,
	history: Vec<String>,
}

impl LoggedRuntimeError {
	pub(crate) fn new(message: String, history: Vec<String>) -> Self {
		Self {
			message,
			history,
		}
	}

	pub fn message(&self) -> &str {
		&self.message
	}

	/// History lines captured when the error was raised, most recent last
	pub fn history(&self) -> &[String] {
		&self.history
	}

	pub fn full_message(&self) -> String {
		let mut result = self.message.clone();
		result.push_str("\nLog History (most recent last):\n");
		for line in &self.history {
			let _ = writeln!(result, "  {line}");
		}
		result
	}
}
