// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{io, sync::Arc};

use parking_lot::Mutex;

/// In-memory writer standing in for a console stream.
///
/// Clones share the same buffer, so a test keeps one handle and hands the
/// other to the code under test.
#[derive(Clone, Default)]
pub struct CapturedOutput {
	buffer: Arc<Mutex<Vec<u8>>>,
}

impl CapturedOutput {
	pub fn new() -> Self {
		Self::default()
	}

	/// Everything written so far, lossily decoded as UTF-8
	pub fn contents(&self) -> String {
		String::from_utf8_lossy(&self.buffer.lock()).into_owned()
	}

	/// Written content split into lines, without trailing newlines
	pub fn lines(&self) -> Vec<String> {
		self.contents().lines().map(str::to_string).collect()
	}

	pub fn is_empty(&self) -> bool {
		self.buffer.lock().is_empty()
	}

	pub fn clear(&self) {
		self.buffer.lock().clear();
	}
}

impl io::Write for CapturedOutput {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		self.buffer.lock().extend_from_slice(buf);
		Ok(buf.len())
	}

	fn flush(&mut self) -> io::Result<()> {
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use super::*;

	#[test]
	fn test_clones_share_buffer() {
		let output = CapturedOutput::new();
		let mut writer = output.clone();

		writeln!(writer, "first").unwrap();
		writeln!(writer, "second").unwrap();

		assert_eq!(output.lines(), vec!["first".to_string(), "second".to_string()]);
	}

	#[test]
	fn test_clear() {
		let output = CapturedOutput::new();
		let mut writer = output.clone();

		write!(writer, "data").unwrap();
		assert!(!output.is_empty());

		output.clear();
		assert!(output.is_empty());
		assert_eq!(output.contents(), "");
	}
}
