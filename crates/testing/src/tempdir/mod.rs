// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	env, fs,
	io::Result,
	path::{Path, PathBuf},
};

use uuid::Uuid;

/// Runs `f` with a private log directory, so loggers opening their files in
/// append mode never see lines from another test. The directory and every
/// log file in it are removed afterwards, also when `f` fails.
pub fn temp_dir<F>(f: F) -> Result<()>
where
	F: FnOnce(&Path) -> Result<()>,
{
	let dir: PathBuf = env::temp_dir().join(format!("spectra-logs-{}", Uuid::new_v4()));
	fs::create_dir(&dir)?;

	let result = f(&dir);

	let _ = fs::remove_dir_all(&dir);
	result
}
