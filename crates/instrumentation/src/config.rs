// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	collections::BTreeMap,
	path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{component::ComponentKey, error::Result, level::LogLevel, output::Outputs};

/// Initial state of one logger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
	pub enabled: bool,
	pub min_level: LogLevel,
	pub outputs: Outputs,
	/// Overrides the component's default file name
	pub file_name: Option<PathBuf>,
	pub colored_console: bool,
}

impl Default for LoggerConfig {
	fn default() -> Self {
		Self {
			enabled: true,
			min_level: LogLevel::Info,
			outputs: Outputs::ALL,
			file_name: None,
			colored_console: false,
		}
	}
}

impl LoggerConfig {
	pub fn enabled(mut self, enabled: bool) -> Self {
		self.enabled = enabled;
		self
	}

	pub fn min_level(mut self, level: LogLevel) -> Self {
		self.min_level = level;
		self
	}

	pub fn outputs(mut self, outputs: impl Into<Outputs>) -> Self {
		self.outputs = outputs.into();
		self
	}

	pub fn file_name(mut self, file_name: impl Into<PathBuf>) -> Self {
		self.file_name = Some(file_name.into());
		self
	}

	pub fn colored_console(mut self, colored: bool) -> Self {
		self.colored_console = colored;
		self
	}
}

/// Configuration for every registered logger
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstrumentationConfig {
	/// Directory relative file names are resolved against
	pub log_dir: Option<PathBuf>,
	pub loggers: BTreeMap<ComponentKey, LoggerConfig>,
}

impl InstrumentationConfig {
	pub fn from_json(json: &str) -> Result<Self> {
		Ok(serde_json::from_str(json)?)
	}

	pub fn logger(&self, key: ComponentKey) -> LoggerConfig {
		self.loggers.get(&key).cloned().unwrap_or_default()
	}

	/// File the logger for `key` writes to
	pub fn file_path(&self, key: ComponentKey) -> PathBuf {
		let file_name = self
			.loggers
			.get(&key)
			.and_then(|config| config.file_name.clone())
			.unwrap_or_else(|| PathBuf::from(key.default_file_name()));

		resolve(self.log_dir.as_deref(), file_name)
	}
}

fn resolve(log_dir: Option<&Path>, file_name: PathBuf) -> PathBuf {
	match log_dir {
		Some(dir) if file_name.is_relative() => dir.join(file_name),
		_ => file_name,
	}
}
