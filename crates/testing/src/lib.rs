// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod capture;
pub mod tempdir;
pub mod util;

pub use capture::CapturedOutput;
pub use tempdir::temp_dir;
pub use util::wait::{wait_for, wait_for_condition, wait_for_lines};
