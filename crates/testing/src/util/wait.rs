// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Polling helpers for background flush workers.
//!
//! A running worker writes to its sinks some time after the producer
//! returns. Tests poll the sink until it reaches the expected state.

use std::{
	thread::sleep,
	time::{Duration, Instant},
};

use crate::capture::CapturedOutput;

/// Upper bound for a worker to catch up with its producers
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(1);

/// Polls `condition` every `poll_interval` until it holds.
///
/// Panics with `timeout_message` once `timeout` has elapsed.
pub fn wait_for_condition<F>(condition: F, timeout: Duration, poll_interval: Duration, timeout_message: &str)
where
	F: Fn() -> bool,
{
	let deadline = Instant::now() + timeout;

	while !condition() {
		if Instant::now() >= deadline {
			panic!("Timeout after {timeout:?}: {timeout_message}");
		}
		sleep(poll_interval);
	}
}

pub fn wait_for<F>(condition: F, message: &str)
where
	F: Fn() -> bool,
{
	wait_for_condition(condition, DEFAULT_TIMEOUT, DEFAULT_POLL_INTERVAL, message);
}

/// Waits until `output` holds at least `count` newline-terminated lines and
/// returns them
pub fn wait_for_lines(output: &CapturedOutput, count: usize) -> Vec<String> {
	wait_for(|| output.contents().matches('\n').count() >= count, &format!("expected {count} console lines"));
	output.lines()
}
