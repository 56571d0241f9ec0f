// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Per-subsystem logger

use std::{
	path::PathBuf,
	sync::{
		Arc,
		atomic::{AtomicBool, AtomicU8, AtomicU64, Ordering},
	},
};

use parking_lot::Mutex;

use crate::{
	arg::{Arg, render_args},
	config::LoggerConfig,
	entry::LogEntry,
	error::LoggedRuntimeError,
	history::LogHistory,
	level::LogLevel,
	output::Outputs,
	sink::{ConsoleWriter, Sink},
	worker::FlushWorker,
};

/// Logger owning the enable/level/output state, pending buffer, history and
/// flush worker of one subsystem.
///
/// All methods take `&self` and are safe to call from any thread. The pending
/// buffer, the file handle and the output set share one lock; the history
/// has its own and is only appended to while the sink lock is held.
pub struct BaseLogger {
	library_name: String,
	enabled: AtomicBool,
	min_level: AtomicU8,
	colored_console: AtomicBool,
	counts: [AtomicU64; 4],
	history: LogHistory,
	sink: Arc<Mutex<Sink>>,
	worker: Mutex<Option<FlushWorker>>,
}

impl BaseLogger {
	pub fn new(
		library_name: impl Into<String>,
		file_name: impl Into<PathBuf>,
		config: &LoggerConfig,
		console: ConsoleWriter,
	) -> Self {
		let library_name = library_name.into();
		let sink = Sink::new(library_name.clone(), config.outputs, file_name.into(), console);

		Self {
			library_name,
			enabled: AtomicBool::new(config.enabled),
			min_level: AtomicU8::new(config.min_level.into()),
			colored_console: AtomicBool::new(config.colored_console),
			counts: Default::default(),
			history: LogHistory::new(),
			sink: Arc::new(Mutex::new(sink)),
			worker: Mutex::new(None),
		}
	}

	pub fn library_name(&self) -> &str {
		&self.library_name
	}

	/// Records an entry.
	///
	/// Disabled loggers and levels below the minimum are dropped without any
	/// side effect. Every accepted ERROR entry comes back as
	/// `Err(LoggedRuntimeError)` carrying the history up to and including it,
	/// whether or not a sink has seen the entry yet.
	pub fn log(
		&self,
		level: LogLevel,
		component: &str,
		sub_component: &str,
		message: &str,
		args: &[Arg],
	) -> Result<(), LoggedRuntimeError> {
		if !self.is_enabled() || level < self.min_level() {
			return Ok(());
		}

		self.counts[level.index()].fetch_add(1, Ordering::Relaxed);

		let entry = LogEntry::new(
			LogEntry::now(),
			level,
			self.library_name.as_str(),
			component,
			sub_component,
			message,
			render_args(args),
			self.is_colored_console(),
		);

		// history and pending buffer must see entries in the same order
		let failure = {
			let mut sink = self.sink.lock();
			let failure = if level == LogLevel::Error {
				let message = entry.to_plain_string();
				let history = self.history.add_log_and_snapshot(entry.clone());
				Some(LoggedRuntimeError::new(message, history))
			} else {
				self.history.add_log(entry.clone());
				None
			};
			sink.push(entry);
			failure
		};
		self.wake();

		match failure {
			Some(err) => Err(err),
			None => Ok(()),
		}
	}

	/// Like [`BaseLogger::log`] for levels arriving as integers. An unknown
	/// level is reported on the console and the call is ignored.
	pub fn log_raw(
		&self,
		level: u8,
		component: &str,
		sub_component: &str,
		message: &str,
		args: &[Arg],
	) -> Result<(), LoggedRuntimeError> {
		match LogLevel::try_from(level) {
			Ok(level) => self.log(level, component, sub_component, message, args),
			Err(err) => {
				self.sink.lock().warn(&format!("{err}, ignoring log"));
				Ok(())
			}
		}
	}

	pub fn set_enabled(&self, enabled: bool) {
		self.enabled.store(enabled, Ordering::Release);
	}

	pub fn is_enabled(&self) -> bool {
		self.enabled.load(Ordering::Acquire)
	}

	pub fn set_min_level(&self, level: LogLevel) {
		self.min_level.store(level.into(), Ordering::Release);
	}

	/// Rejects unknown levels, keeping the previous minimum.
	pub fn set_min_level_raw(&self, level: u8) {
		match LogLevel::try_from(level) {
			Ok(level) => self.set_min_level(level),
			Err(err) => self.sink.lock().warn(&format!("{err}, keeping previous minimum level")),
		}
	}

	pub fn min_level(&self) -> LogLevel {
		// only valid levels are ever stored
		LogLevel::try_from(self.min_level.load(Ordering::Acquire)).unwrap_or(LogLevel::Info)
	}

	/// Opens or closes the log file as the file output comes and goes. When
	/// the file cannot be opened the logger falls back to console only.
	pub fn set_outputs(&self, outputs: impl Into<Outputs>) {
		self.sink.lock().set_outputs(outputs.into());
	}

	pub fn outputs(&self) -> Outputs {
		self.sink.lock().outputs()
	}

	pub fn set_output_location(&self, path: impl Into<PathBuf>) {
		self.sink.lock().set_file_name(path.into());
	}

	pub fn output_location(&self) -> PathBuf {
		self.sink.lock().file_name().to_path_buf()
	}

	pub fn is_file_open(&self) -> bool {
		self.sink.lock().is_file_open()
	}

	pub fn enable_colored_console(&self, enabled: bool) {
		self.colored_console.store(enabled, Ordering::Release);
	}

	pub fn is_colored_console(&self) -> bool {
		self.colored_console.load(Ordering::Acquire)
	}

	pub fn get_log_count(&self, level: LogLevel) -> u64 {
		self.counts[level.index()].load(Ordering::Relaxed)
	}

	pub fn get_total_log_count(&self) -> u64 {
		self.counts.iter().map(|count| count.load(Ordering::Relaxed)).sum()
	}

	pub fn history(&self) -> &LogHistory {
		&self.history
	}

	pub fn get_history(&self) -> Vec<String> {
		self.history.snapshot()
	}

	pub fn get_history_as_string(&self) -> String {
		self.history.get_history_as_string()
	}

	/// Entries accepted but not yet written to any sink
	pub fn pending_count(&self) -> usize {
		self.sink.lock().pending_len()
	}

	/// Sink writes that failed after the sink was opened
	pub fn sink_failures(&self) -> u64 {
		self.sink.lock().failures()
	}

	/// Drains the pending buffer on the calling thread. Returns the number of
	/// entries written.
	pub fn synchronous_flush(&self) -> usize {
		self.sink.lock().drain()
	}

	/// Starts the flush worker. Does nothing when it is already running.
	pub fn start(&self) {
		let mut worker = self.worker.lock();
		if worker.is_none() {
			let name = format!("spectra-flush-{}", self.library_name.replace("::", "-"));
			*worker = Some(FlushWorker::spawn(name, Arc::clone(&self.sink)));
		}
	}

	/// Stops the flush worker after it drained the remaining entries and
	/// waits for its thread to exit. Does nothing when it is not running.
	pub fn shutdown(&self) {
		let worker = self.worker.lock().take();
		if let Some(worker) = worker {
			worker.shutdown();
		}
	}

	pub fn is_running(&self) -> bool {
		self.worker.lock().is_some()
	}

	fn wake(&self) {
		if let Some(worker) = self.worker.lock().as_ref() {
			worker.wake();
		}
	}
}

impl Drop for BaseLogger {
	fn drop(&mut self) {
		self.shutdown();
		self.synchronous_flush();
	}
}

#[cfg(test)]
mod tests {
	use std::fs;

	use spectra_testing::{CapturedOutput, temp_dir, wait_for, wait_for_lines};

	use super::*;
	use crate::output::Output;

	fn logger(config: LoggerConfig, file_name: PathBuf) -> (BaseLogger, CapturedOutput) {
		let console = CapturedOutput::new();
		let logger = BaseLogger::new("spectra::test", file_name, &config, Box::new(console.clone()));
		(logger, console)
	}

	fn console_only() -> LoggerConfig {
		LoggerConfig::default().outputs(Output::Console)
	}

	#[test]
	fn test_accepts_and_buffers() {
		let (logger, console) = logger(console_only(), PathBuf::from("unused.txt"));

		logger.log(LogLevel::Info, "Comp", "Sub", "hello", &[Arg::from(42)]).unwrap();

		assert_eq!(logger.get_log_count(LogLevel::Info), 1);
		assert_eq!(logger.get_total_log_count(), 1);
		assert_eq!(logger.pending_count(), 1);
		assert_eq!(logger.history().len(), 1);
		assert!(console.is_empty());

		assert_eq!(logger.synchronous_flush(), 1);
		assert_eq!(logger.pending_count(), 0);

		let lines = console.lines();
		assert_eq!(lines.len(), 1);
		assert!(lines[0].starts_with("[TEMP] ["));
		assert!(lines[0].ends_with("[INFO] spectra::test::Comp::Sub: hello (details: 42)"));
	}

	#[test]
	fn test_filtered_calls_have_no_side_effects() {
		let (logger, _console) = logger(console_only().min_level(LogLevel::Warning), PathBuf::from("unused.txt"));

		logger.log(LogLevel::Debug, "C", "S", "dropped", &[]).unwrap();
		logger.log(LogLevel::Info, "C", "S", "dropped", &[]).unwrap();

		logger.set_enabled(false);
		logger.log(LogLevel::Warning, "C", "S", "dropped", &[]).unwrap();
		logger.log(LogLevel::Error, "C", "S", "dropped", &[]).unwrap();

		assert_eq!(logger.get_total_log_count(), 0);
		assert!(logger.history().is_empty());
		assert_eq!(logger.pending_count(), 0);
	}

	#[test]
	fn test_error_returns_history_ending_with_entry() {
		let (logger, _console) = logger(console_only(), PathBuf::from("unused.txt"));

		logger.log(LogLevel::Info, "C", "S", "before", &[]).unwrap();
		let err = logger.log(LogLevel::Error, "C", "S", "Division by zero: {} / {}", &[Arg::from(3), Arg::from(0)]).unwrap_err();

		assert!(err.message().ends_with("[ERROR] spectra::test::C::S: Division by zero: {} / {} (details: 3, 0)"));
		assert_eq!(err.history().len(), 2);
		assert_eq!(err.history().last().unwrap(), err.message());
		assert_eq!(logger.get_log_count(LogLevel::Error), 1);
		assert_eq!(logger.pending_count(), 2);

		logger.log(LogLevel::Info, "C", "S", "after", &[]).unwrap();
		assert_eq!(err.history().len(), 2);
	}

	#[test]
	fn test_invalid_raw_level_warns_and_ignores() {
		let (logger, console) = logger(console_only(), PathBuf::from("unused.txt"));

		logger.log_raw(9, "C", "S", "bogus", &[]).unwrap();

		assert_eq!(logger.get_total_log_count(), 0);
		assert_eq!(logger.pending_count(), 0);
		assert_eq!(console.lines(), vec!["[WARNING] spectra::test: Invalid log level 9, ignoring log"]);

		logger.log_raw(2, "C", "S", "valid", &[]).unwrap();
		assert_eq!(logger.get_log_count(LogLevel::Warning), 1);
	}

	#[test]
	fn test_invalid_raw_level_silent_without_console() {
		temp_dir(|dir| {
			let (logger, console) = logger(LoggerConfig::default().outputs(Output::File), dir.join("log.txt"));
			logger.log_raw(200, "C", "S", "bogus", &[]).unwrap();
			assert!(console.is_empty());
			Ok(())
		})
		.unwrap();
	}

	#[test]
	fn test_set_min_level_raw_keeps_previous() {
		let (logger, console) = logger(console_only(), PathBuf::from("unused.txt"));

		logger.set_min_level_raw(2);
		assert_eq!(logger.min_level(), LogLevel::Warning);

		logger.set_min_level_raw(4);
		assert_eq!(logger.min_level(), LogLevel::Warning);
		assert_eq!(console.lines(), vec!["[WARNING] spectra::test: Invalid log level 4, keeping previous minimum level"]);
	}

	#[test]
	fn test_colored_flag_is_captured_per_entry() {
		let (logger, console) = logger(console_only(), PathBuf::from("unused.txt"));

		logger.log(LogLevel::Info, "C", "S", "plain", &[]).unwrap();
		logger.enable_colored_console(true);
		logger.log(LogLevel::Info, "C", "S", "green", &[]).unwrap();
		logger.synchronous_flush();

		let lines = console.lines();
		assert!(!lines[0].contains('\u{1b}'));
		assert!(lines[1].contains("\u{1b}[32mgreen\u{1b}[0m"));
	}

	#[test]
	fn test_same_outputs_is_noop() {
		temp_dir(|dir| {
			let path = dir.join("log.txt");
			let (logger, console) = logger(LoggerConfig::default(), path.clone());
			assert!(logger.is_file_open());

			logger.log(LogLevel::Info, "C", "S", "one", &[]).unwrap();
			logger.set_outputs(Outputs::ALL);
			assert_eq!(logger.sink.lock().file_opens(), 1);
			logger.synchronous_flush();

			assert!(logger.is_file_open());
			assert_eq!(logger.outputs(), Outputs::ALL);
			assert_eq!(logger.sink_failures(), 0);
			assert_eq!(console.lines().len(), 1);
			assert!(!console.contents().contains("[WARNING]"));
			assert_eq!(fs::read_to_string(&path)?.lines().count(), 1);

			logger.set_outputs(Outputs::CONSOLE);
			logger.set_outputs(Outputs::ALL);
			assert_eq!(logger.sink.lock().file_opens(), 2);
			Ok(())
		})
		.unwrap();
	}

	#[test]
	fn test_file_open_failure_falls_back_to_console() {
		temp_dir(|dir| {
			let (logger, console) = logger(console_only(), dir.join("missing").join("log.txt"));

			logger.set_outputs(Output::File);
			assert_eq!(logger.outputs(), Outputs::CONSOLE);
			assert!(!logger.is_file_open());
			assert!(console.lines()[0].starts_with("[WARNING] spectra::test: Failed to open log file"));

			logger.log(LogLevel::Info, "C", "S", "console only", &[]).unwrap();
			logger.synchronous_flush();
			assert!(console.lines()[1].ends_with("console only"));
			Ok(())
		})
		.unwrap();
	}

	#[test]
	fn test_worker_drains_in_background() {
		let (logger, console) = logger(console_only(), PathBuf::from("unused.txt"));
		logger.start();
		assert!(logger.is_running());

		for n in 0..10 {
			logger.log(LogLevel::Info, "C", "S", &format!("#{n}"), &[]).unwrap();
		}

		let lines = wait_for_lines(&console, 10);
		assert!(lines[9].ends_with(": #9"));
		assert_eq!(logger.pending_count(), 0);

		logger.shutdown();
		assert!(!logger.is_running());
	}

	#[test]
	fn test_shutdown_drains_remaining() {
		let (logger, console) = logger(console_only(), PathBuf::from("unused.txt"));
		logger.start();
		for n in 0..50 {
			logger.log(LogLevel::Info, "C", "S", &format!("#{n}"), &[]).unwrap();
		}
		logger.shutdown();

		assert_eq!(logger.pending_count(), 0);
		let lines = console.lines();
		assert_eq!(lines.len(), 50);
		for (n, line) in lines.iter().enumerate() {
			assert!(line.ends_with(&format!(": #{n}")));
		}
	}

	#[test]
	fn test_start_drains_entries_logged_while_stopped() {
		let (logger, console) = logger(console_only(), PathBuf::from("unused.txt"));
		logger.log(LogLevel::Info, "C", "S", "early", &[]).unwrap();
		assert_eq!(logger.pending_count(), 1);

		logger.start();
		wait_for(|| console.lines().len() == 1, "worker should pick up buffered entries");
		logger.shutdown();
	}

	#[test]
	fn test_start_and_shutdown_are_idempotent() {
		let (logger, _console) = logger(console_only(), PathBuf::from("unused.txt"));
		logger.shutdown();
		logger.start();
		logger.start();
		assert!(logger.is_running());
		logger.shutdown();
		logger.shutdown();
		assert!(!logger.is_running());
	}

	#[test]
	fn test_drop_flushes_pending() {
		let console = CapturedOutput::new();
		{
			let logger = BaseLogger::new("spectra::test", "unused.txt", &console_only(), Box::new(console.clone()));
			logger.log(LogLevel::Warning, "C", "S", "last words", &[]).unwrap();
		}
		assert!(console.contents().contains("last words"));
	}
}
