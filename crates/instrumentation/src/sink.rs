// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Console and file sinks together with the pending buffer they drain.
//!
//! Everything here lives behind one lock per logger, so changing outputs or
//! the file location can never race with a drain writing to the same handle.

use std::{
	fs::{File, OpenOptions},
	io::{self, BufWriter, Write},
	mem,
	path::{Path, PathBuf},
};

use tracing::{debug, warn};

use crate::{
	entry::LogEntry,
	error::{Error, Result},
	output::{Output, Outputs},
};

/// Prefix of every console line
pub const CONSOLE_TAG: &str = "[TEMP] ";
/// Prefix of every file line
pub const FILE_TAG: &str = "[PERM] ";

pub type ConsoleWriter = Box<dyn Write + Send>;

pub(crate) struct Sink {
	library_name: String,
	outputs: Outputs,
	file_name: PathBuf,
	/// Open iff `outputs` contains `Output::File`
	file: Option<BufWriter<File>>,
	console: ConsoleWriter,
	pending: Vec<LogEntry>,
	failures: u64,
	file_opens: u64,
}

impl Sink {
	pub(crate) fn new(library_name: String, outputs: Outputs, file_name: PathBuf, console: ConsoleWriter) -> Self {
		let mut sink = Self {
			library_name,
			outputs: outputs.without(Output::File),
			file_name,
			file: None,
			console,
			pending: Vec::new(),
			failures: 0,
			file_opens: 0,
		};
		sink.set_outputs(outputs);
		sink
	}

	pub(crate) fn outputs(&self) -> Outputs {
		self.outputs
	}

	pub(crate) fn file_name(&self) -> &Path {
		&self.file_name
	}

	pub(crate) fn is_file_open(&self) -> bool {
		self.file.is_some()
	}

	pub(crate) fn pending_len(&self) -> usize {
		self.pending.len()
	}

	pub(crate) fn failures(&self) -> u64 {
		self.failures
	}

	/// Successful opens of the log file since creation
	#[cfg(test)]
	pub(crate) fn file_opens(&self) -> u64 {
		self.file_opens
	}

	pub(crate) fn push(&mut self, entry: LogEntry) {
		self.pending.push(entry);
	}

	/// Moves the file handle in line with the requested outputs. Setting the
	/// current value is a no-op.
	pub(crate) fn set_outputs(&mut self, outputs: Outputs) {
		if outputs == self.outputs {
			return;
		}

		let wants_file = outputs.contains(Output::File);
		if !wants_file {
			self.close_file();
			self.outputs = outputs;
			return;
		}

		if self.file.is_some() {
			self.outputs = outputs;
			return;
		}

		match open_log_file(&self.file_name) {
			Ok(file) => {
				self.attach_file(file);
				self.outputs = outputs;
			}
			Err(err) => self.fall_back_to_console(err),
		}
	}

	/// Points the file sink at `path`, reopening it when the file output is
	/// active.
	pub(crate) fn set_file_name(&mut self, path: PathBuf) {
		self.close_file();
		self.file_name = path;

		if !self.outputs.contains(Output::File) {
			return;
		}

		match open_log_file(&self.file_name) {
			Ok(file) => self.attach_file(file),
			Err(err) => self.fall_back_to_console(err),
		}
	}

	/// Writes every pending entry to the active sinks and empties the buffer.
	/// Returns the number of entries drained.
	pub(crate) fn drain(&mut self) -> usize {
		if self.pending.is_empty() {
			return 0;
		}

		let pending = mem::take(&mut self.pending);

		if self.outputs.contains(Output::Console) {
			let result = write_lines(&mut self.console, pending.iter().map(LogEntry::to_colored_string), CONSOLE_TAG);
			self.record(result, "console");
		}

		if self.outputs.contains(Output::File) {
			if let Some(file) = self.file.as_mut() {
				let result = write_lines(file, pending.iter().map(LogEntry::to_plain_string), FILE_TAG);
				self.record(result, "file");
			}
		}

		pending.len()
	}

	/// Writes a diagnostic straight to the console, bypassing the buffer.
	pub(crate) fn warn(&mut self, message: &str) {
		warn!(library = %self.library_name, "{message}");

		if self.outputs.contains(Output::Console) {
			let result = writeln!(self.console, "[WARNING] {}: {}", self.library_name, message)
				.and_then(|_| self.console.flush());
			self.record(result, "console");
		}
	}

	fn attach_file(&mut self, file: BufWriter<File>) {
		self.file = Some(file);
		self.file_opens += 1;
		debug!(library = %self.library_name, path = %self.file_name.display(), opens = self.file_opens, "log file opened");
	}

	fn close_file(&mut self) {
		if let Some(mut file) = self.file.take() {
			let result = file.flush();
			self.record(result, "file");
		}
	}

	fn fall_back_to_console(&mut self, err: Error) {
		self.file = None;
		self.outputs = Outputs::CONSOLE;
		self.warn(&format!("{err}, disabling file output"));
	}

	fn record(&mut self, result: io::Result<()>, sink: &str) {
		if let Err(err) = result {
			self.failures += 1;
			debug!(library = %self.library_name, sink, error = %err, "log sink write failed");
		}
	}
}

impl Drop for Sink {
	fn drop(&mut self) {
		self.close_file();
	}
}

fn open_log_file(path: &Path) -> Result<BufWriter<File>> {
	OpenOptions::new()
		.create(true)
		.append(true)
		.open(path)
		.map(BufWriter::new)
		.map_err(|source| Error::OpenLogFile {
			path: path.to_path_buf(),
			source,
		})
}

fn write_lines<W, I>(writer: &mut W, lines: I, tag: &str) -> io::Result<()>
where
	W: Write + ?Sized,
	I: Iterator<Item = String>,
{
	for line in lines {
		writeln!(writer, "{tag}{line}")?;
	}
	writer.flush()
}
