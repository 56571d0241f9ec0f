// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum LogLevel {
	Debug = 0,
	Info = 1,
	Warning = 2,
	Error = 3,
}

impl LogLevel {
	/// All levels in ascending severity
	pub const ALL: [LogLevel; 4] = [LogLevel::Debug, LogLevel::Info, LogLevel::Warning, LogLevel::Error];

	pub fn as_str(&self) -> &'static str {
		match self {
			LogLevel::Debug => "DEBUG",
			LogLevel::Info => "INFO",
			LogLevel::Warning => "WARNING",
			LogLevel::Error => "ERROR",
		}
	}

	pub(crate) fn index(self) -> usize {
		self as usize
	}
}

impl TryFrom<u8> for LogLevel {
	type Error = Error;

	fn try_from(value: u8) -> Result<Self, Error> {
		match value {
			0 => Ok(LogLevel::Debug),
			1 => Ok(LogLevel::Info),
			2 => Ok(LogLevel::Warning),
			3 => Ok(LogLevel::Error),
			other => Err(Error::InvalidLevel(other)),
		}
	}
}

impl From<LogLevel> for u8 {
	fn from(level: LogLevel) -> Self {
		level as u8
	}
}

impl fmt::Display for LogLevel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
