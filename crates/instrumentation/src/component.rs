// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt;

use serde::{Deserialize, Serialize};

/// Selects the logger that owns a log call
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKey {
	Math,
	Benchmark,
}

impl ComponentKey {
	/// Registration order
	pub const ALL: [ComponentKey; 2] = [ComponentKey::Math, ComponentKey::Benchmark];

	pub fn library_name(&self) -> &'static str {
		match self {
			ComponentKey::Math => "spectra::core::math",
			ComponentKey::Benchmark => "spectra::benchmark",
		}
	}

	pub fn default_file_name(&self) -> &'static str {
		match self {
			ComponentKey::Math => "math_log.txt",
			ComponentKey::Benchmark => "benchmark_log.txt",
		}
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			ComponentKey::Math => "math",
			ComponentKey::Benchmark => "benchmark",
		}
	}

	pub(crate) fn index(self) -> usize {
		self as usize
	}
}

impl fmt::Display for ComponentKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
