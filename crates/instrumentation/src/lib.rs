// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! In-process instrumentation pipeline for the Spectra libraries.
//!
//! This crate provides:
//! - Leveled log entries tagged by library, component and sub-component
//! - A bounded history of the most recent entries per logger
//! - Asynchronous delivery to console and file sinks through one background
//!   flush worker per logger
//! - ERROR entries returned as [`LoggedRuntimeError`] values that carry the
//!   history at the time of the failure
//!
//! # Usage
//!
//! ```ignore
//! let instrumentation = Instrumentation::builder()
//!     .log_dir("logs")
//!     .configure(ComponentKey::Math, |config| config.min_level(LogLevel::Warning))
//!     .build();
//! instrumentation.init();
//!
//! log_warning!(instrumentation, ComponentKey::Math, "S_int4", "add", "Overflow in addition: {} + {}", 7, 1)?;
//!
//! instrumentation.shutdown();
//! ```

#![cfg_attr(not(debug_assertions), deny(warnings))]

mod macros;

pub mod arg;
mod builder;
mod component;
mod config;
mod entry;
mod error;
mod history;
mod instrumentation;
mod level;
mod logger;
mod output;
mod sink;
mod worker;

pub use arg::Arg;
pub use builder::InstrumentationBuilder;
pub use component::ComponentKey;
pub use config::{InstrumentationConfig, LoggerConfig};
pub use entry::LogEntry;
pub use error::{Error, LoggedRuntimeError, Result};
pub use history::{LogHistory, MAX_HISTORY_SIZE};
pub use instrumentation::Instrumentation;
pub use level::LogLevel;
pub use logger::BaseLogger;
pub use output::{Output, Outputs};
pub use sink::{CONSOLE_TAG, ConsoleWriter, FILE_TAG};
