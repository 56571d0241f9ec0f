// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{fmt, ops::BitOr};

use serde::{Deserialize, Serialize};

/// A sink a logger can write to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Output {
	/// Transient logs on the console stream
	Console,
	/// Persistent logs in the logger's file
	File,
}

/// Set of active outputs. Console and file membership are independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Output>", into = "Vec<Output>")]
pub struct Outputs {
	console: bool,
	file: bool,
}

impl Outputs {
	pub const NONE: Outputs = Outputs {
		console: false,
		file: false,
	};

	pub const CONSOLE: Outputs = Outputs {
		console: true,
		file: false,
	};

	pub const FILE: Outputs = Outputs {
		console: false,
		file: true,
	};

	pub const ALL: Outputs = Outputs {
		console: true,
		file: true,
	};

	pub fn contains(&self, output: Output) -> bool {
		match output {
			Output::Console => self.console,
			Output::File => self.file,
		}
	}

	pub fn with(mut self, output: Output) -> Self {
		self.set(output, true);
		self
	}

	pub fn without(mut self, output: Output) -> Self {
		self.set(output, false);
		self
	}

	pub fn is_empty(&self) -> bool {
		!self.console && !self.file
	}

	pub fn iter(&self) -> impl Iterator<Item = Output> + '_ {
		[Output::Console, Output::File].into_iter().filter(|output| self.contains(*output))
	}

	fn set(&mut self, output: Output, present: bool) {
		match output {
			Output::Console => self.console = present,
			Output::File => self.file = present,
		}
	}
}

impl From<Output> for Outputs {
	fn from(output: Output) -> Self {
		Outputs::NONE.with(output)
	}
}

impl From<Vec<Output>> for Outputs {
	fn from(outputs: Vec<Output>) -> Self {
		outputs.into_iter().collect()
	}
}

impl From<Outputs> for Vec<Output> {
	fn from(outputs: Outputs) -> Self {
		outputs.iter().collect()
	}
}

impl FromIterator<Output> for Outputs {
	fn from_iter<I: IntoIterator<Item = Output>>(iter: I) -> Self {
		iter.into_iter().fold(Outputs::NONE, Outputs::with)
	}
}

impl BitOr for Output {
	type Output = Outputs;

	fn bitor(self, rhs: Output) -> Outputs {
		Outputs::from(self).with(rhs)
	}
}

impl BitOr<Output> for Outputs {
	type Output = Outputs;

	fn bitor(self, rhs: Output) -> Outputs {
		self.with(rhs)
	}
}

impl BitOr for Outputs {
	type Output = Outputs;

	fn bitor(self, rhs: Outputs) -> Outputs {
		Outputs {
			console: self.console || rhs.console,
			file: self.file || rhs.file,
		}
	}
}

impl fmt::Display for Outputs {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.is_empty() {
			return f.write_str("NONE");
		}
		let names: Vec<&str> = self
			.iter()
			.map(|output| match output {
				Output::Console => "CONSOLE",
				Output::File => "FILE",
			})
			.collect();
		f.write_str(&names.join(" | "))
	}
}
