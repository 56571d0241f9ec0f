// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Logging macros for convenient usage

/// Call site of the macro as a log argument
#[macro_export]
macro_rules! location {
	() => {
		$crate::Arg::Location {
			file: file!(),
			line: line!(),
		}
	};
}

/// Main logging macro. Every trailing argument is converted with
/// `Arg::from`, the message is kept verbatim.
///
/// ```ignore
/// log!(instrumentation, LogLevel::Warning, ComponentKey::Math, "S_int4", "add", "Overflow: {} + {}", a, b)?;
/// ```
#[macro_export]
macro_rules! log {
	($instrumentation:expr, $level:expr, $key:expr, $component:expr, $sub_component:expr, $msg:expr $(, $arg:expr)* $(,)?) => {
		$instrumentation.log(
			$level,
			$component,
			$sub_component,
			$msg,
			$key,
			&[$($crate::Arg::from($arg)),*],
		)
	};
}

/// Debug level logging
#[macro_export]
macro_rules! log_debug {
	($instrumentation:expr, $key:expr, $($rest:tt)+) => {
		$crate::log!($instrumentation, $crate::LogLevel::Debug, $key, $($rest)+)
	};
}

/// Info level logging
#[macro_export]
macro_rules! log_info {
	($instrumentation:expr, $key:expr, $($rest:tt)+) => {
		$crate::log!($instrumentation, $crate::LogLevel::Info, $key, $($rest)+)
	};
}

/// Warning level logging
#[macro_export]
macro_rules! log_warning {
	($instrumentation:expr, $key:expr, $($rest:tt)+) => {
		$crate::log!($instrumentation, $crate::LogLevel::Warning, $key, $($rest)+)
	};
}

/// Error level logging. Always evaluates to `Err(LoggedRuntimeError)` when
/// the logger accepts the entry.
#[macro_export]
macro_rules! log_error {
	($instrumentation:expr, $key:expr, $($rest:tt)+) => {
		$crate::log!($instrumentation, $crate::LogLevel::Error, $key, $($rest)+)
	};
}
