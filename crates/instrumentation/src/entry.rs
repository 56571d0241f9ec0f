// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Log entry type and its renderings

use std::fmt;

use chrono::Local;
use colored::Color;

use crate::level::LogLevel;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One accepted log event. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
	timestamp: String,
	level: LogLevel,
	library_name: String,
	component: String,
	sub_component: String,
	message: String,
	formatted_args: Vec<String>,
	colored: bool,
}

impl LogEntry {
	#[allow(clippy::too_many_arguments)]
	pub fn new(
		timestamp: impl Into<String>,
		level: LogLevel,
		library_name: impl Into<String>,
		component: impl Into<String>,
		sub_component: impl Into<String>,
		message: impl Into<String>,
		formatted_args: Vec<String>,
		colored: bool,
	) -> Self {
		Self {
			timestamp: timestamp.into(),
			level,
			library_name: library_name.into(),
			component: component.into(),
			sub_component: sub_component.into(),
			message: message.into(),
			formatted_args,
			colored,
		}
	}

	/// Current local time at second resolution
	pub fn now() -> String {
		Local::now().format(TIMESTAMP_FORMAT).to_string()
	}

	pub fn timestamp(&self) -> &str {
		&self.timestamp
	}

	pub fn level(&self) -> LogLevel {
		self.level
	}

	pub fn library_name(&self) -> &str {
		&self.library_name
	}

	pub fn component(&self) -> &str {
		&self.component
	}

	pub fn sub_component(&self) -> &str {
		&self.sub_component
	}

	pub fn message(&self) -> &str {
		&self.message
	}

	pub fn formatted_args(&self) -> &[String] {
		&self.formatted_args
	}

	pub fn is_colored(&self) -> bool {
		self.colored
	}

	pub fn to_plain_string(&self) -> String {
		let mut result = format!(
			"[{}] [{}] {}::{}::{}: {}",
			self.timestamp, self.level, self.library_name, self.component, self.sub_component, self.message
		);
		if let Some(details) = self.details() {
			result.push_str(&details);
		}
		result
	}

	/// Console rendering: level, component, sub-component, message and
	/// details each wrapped in the level colour. Plain when the entry was
	/// created without colour. Only the entry's flag decides, the terminal
	/// and colour environment variables are not consulted.
	pub fn to_colored_string(&self) -> String {
		if !self.colored {
			return self.to_plain_string();
		}

		let color = level_color(self.level);
		let mut result = format!(
			"[{}] [{}] {}::{}::{}: {}",
			self.timestamp,
			paint(self.level.as_str(), color),
			self.library_name,
			paint(&self.component, color),
			paint(&self.sub_component, color),
			paint(&self.message, color),
		);
		if let Some(details) = self.details() {
			result.push_str(&paint(&details, color));
		}
		result
	}

	fn details(&self) -> Option<String> {
		if self.formatted_args.is_empty() {
			None
		} else {
			Some(format!(" (details: {})", self.formatted_args.join(", ")))
		}
	}
}

impl fmt::Display for LogEntry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.to_plain_string())
	}
}

fn paint(span: &str, color: Color) -> String {
	format!("\x1b[{}m{}\x1b[0m", color.to_fg_str(), span)
}

pub(crate) fn level_color(level: LogLevel) -> Color {
	match level {
		LogLevel::Debug => Color::Blue,
		LogLevel::Info => Color::Green,
		LogLevel::Warning => Color::Yellow,
		LogLevel::Error => Color::Red,
	}
}
