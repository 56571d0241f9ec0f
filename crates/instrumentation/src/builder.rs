// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Builder pattern for configuring the instrumentation registry

use std::{
	collections::BTreeMap,
	io::{self, Write},
	path::PathBuf,
};

use crate::{
	component::ComponentKey,
	config::{InstrumentationConfig, LoggerConfig},
	instrumentation::Instrumentation,
	logger::BaseLogger,
	sink::ConsoleWriter,
};

/// Builder for an [`Instrumentation`] registry
pub struct InstrumentationBuilder {
	config: InstrumentationConfig,
	consoles: BTreeMap<ComponentKey, ConsoleWriter>,
}

impl InstrumentationBuilder {
	/// Create a new builder with default settings: every logger enabled at
	/// INFO, writing to stderr and to its file in the working directory.
	pub fn new() -> Self {
		Self {
			config: InstrumentationConfig::default(),
			consoles: BTreeMap::new(),
		}
	}

	pub fn with_config(mut self, config: InstrumentationConfig) -> Self {
		self.config = config;
		self
	}

	/// Directory relative log file names are resolved against
	pub fn log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
		self.config.log_dir = Some(dir.into());
		self
	}

	/// Adjust the configuration of one logger
	pub fn configure<F>(mut self, key: ComponentKey, configurator: F) -> Self
	where
		F: FnOnce(LoggerConfig) -> LoggerConfig,
	{
		let current = self.config.logger(key);
		self.config.loggers.insert(key, configurator(current));
		self
	}

	/// Replace the console stream of one logger (stderr by default)
	pub fn console<W>(mut self, key: ComponentKey, writer: W) -> Self
	where
		W: Write + Send + 'static,
	{
		self.consoles.insert(key, Box::new(writer));
		self
	}

	/// Builds the registry. Log files of loggers with the file output are
	/// opened here; workers start with [`Instrumentation::init`].
	pub fn build(mut self) -> Instrumentation {
		let loggers = ComponentKey::ALL
			.into_iter()
			.map(|key| {
				let console: ConsoleWriter = match self.consoles.remove(&key) {
					Some(writer) => writer,
					None => Box::new(io::stderr()),
				};
				BaseLogger::new(
					key.library_name(),
					self.config.file_path(key),
					&self.config.logger(key),
					console,
				)
			})
			.collect();

		Instrumentation::new(loggers)
	}
}

impl Default for InstrumentationBuilder {
	fn default() -> Self {
		Self::new()
	}
}
