// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Registry of the per-component loggers

use std::{
	path::PathBuf,
	sync::atomic::{AtomicBool, Ordering},
};

use tracing::debug;

use crate::{
	arg::Arg, builder::InstrumentationBuilder, component::ComponentKey, error::LoggedRuntimeError,
	level::LogLevel, logger::BaseLogger, output::Outputs,
};

/// Owns one [`BaseLogger`] per [`ComponentKey`] and the lifecycle of their
/// flush workers.
///
/// Built explicitly through [`InstrumentationBuilder`] and passed by
/// reference to whatever needs to log. Every operation takes the component
/// key last and delegates to the owning logger.
pub struct Instrumentation {
	/// Indexed by `ComponentKey::index`, in registration order
	loggers: Vec<BaseLogger>,
	running: AtomicBool,
}

impl Instrumentation {
	pub fn builder() -> InstrumentationBuilder {
		InstrumentationBuilder::new()
	}

	pub(crate) fn new(loggers: Vec<BaseLogger>) -> Self {
		debug_assert_eq!(loggers.len(), ComponentKey::ALL.len());
		Self {
			loggers,
			running: AtomicBool::new(false),
		}
	}

	pub fn logger(&self, key: ComponentKey) -> &BaseLogger {
		&self.loggers[key.index()]
	}

	/// Starts every flush worker in registration order
	pub fn init(&self) {
		if self.running.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire).is_err() {
			return;
		}

		for key in ComponentKey::ALL {
			self.logger(key).start();
		}
		debug!("instrumentation started");
	}

	/// Stops every flush worker in registration order. Each worker drains its
	/// remaining entries and is joined before the next one is stopped.
	pub fn shutdown(&self) {
		if self.running.compare_exchange(true, false, Ordering::AcqRel, Ordering::Acquire).is_err() {
			return;
		}

		for key in ComponentKey::ALL {
			self.logger(key).shutdown();
		}
		debug!("instrumentation stopped");
	}

	pub fn is_running(&self) -> bool {
		self.running.load(Ordering::Acquire)
	}

	pub fn log(
		&self,
		level: LogLevel,
		component: &str,
		sub_component: &str,
		message: &str,
		key: ComponentKey,
		args: &[Arg],
	) -> Result<(), LoggedRuntimeError> {
		self.logger(key).log(level, component, sub_component, message, args)
	}

	pub fn log_raw(
		&self,
		level: u8,
		component: &str,
		sub_component: &str,
		message: &str,
		key: ComponentKey,
		args: &[Arg],
	) -> Result<(), LoggedRuntimeError> {
		self.logger(key).log_raw(level, component, sub_component, message, args)
	}

	pub fn set_enabled(&self, enabled: bool, key: ComponentKey) {
		self.logger(key).set_enabled(enabled);
	}

	pub fn is_enabled(&self, key: ComponentKey) -> bool {
		self.logger(key).is_enabled()
	}

	pub fn set_min_level(&self, level: LogLevel, key: ComponentKey) {
		self.logger(key).set_min_level(level);
	}

	pub fn set_min_level_raw(&self, level: u8, key: ComponentKey) {
		self.logger(key).set_min_level_raw(level);
	}

	pub fn min_level(&self, key: ComponentKey) -> LogLevel {
		self.logger(key).min_level()
	}

	pub fn set_outputs(&self, outputs: impl Into<Outputs>, key: ComponentKey) {
		self.logger(key).set_outputs(outputs);
	}

	pub fn outputs(&self, key: ComponentKey) -> Outputs {
		self.logger(key).outputs()
	}

	pub fn set_output_location(&self, path: impl Into<PathBuf>, key: ComponentKey) {
		self.logger(key).set_output_location(path);
	}

	pub fn output_location(&self, key: ComponentKey) -> PathBuf {
		self.logger(key).output_location()
	}

	pub fn enable_colored_console(&self, enabled: bool, key: ComponentKey) {
		self.logger(key).enable_colored_console(enabled);
	}

	pub fn get_log_count(&self, level: LogLevel, key: ComponentKey) -> u64 {
		self.logger(key).get_log_count(level)
	}

	pub fn get_total_log_count(&self, key: ComponentKey) -> u64 {
		self.logger(key).get_total_log_count()
	}

	pub fn get_history(&self, key: ComponentKey) -> Vec<String> {
		self.logger(key).get_history()
	}

	pub fn get_history_as_string(&self, key: ComponentKey) -> String {
		self.logger(key).get_history_as_string()
	}

	pub fn synchronous_flush(&self, key: ComponentKey) -> usize {
		self.logger(key).synchronous_flush()
	}
}

impl Drop for Instrumentation {
	fn drop(&mut self) {
		self.shutdown();
	}
}
