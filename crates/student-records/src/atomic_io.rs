//! Atomic file replacement for snapshot writes.
//!
//! Contents go to a hidden temporary file beside the target, are synced, and
//! are then renamed over the target, so readers see either the old file or
//! the complete new one.

use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use camino::Utf8Path;
use cap_std::fs::{Dir, OpenOptions};

use crate::error::StoreError;

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Replaces `file_name` inside `dir` with `contents`.
///
/// `target` is the caller-facing path of the same file and is only used in
/// error reports. On failure the temporary file is removed and any existing
/// target is left untouched.
pub(crate) fn write_atomic(
    dir: &Dir,
    file_name: &str,
    target: &Utf8Path,
    contents: &str,
) -> Result<(), StoreError> {
    replace_via_temp(dir, &temp_name_for(file_name), file_name, target, contents)
}

fn replace_via_temp(
    dir: &Dir,
    tmp_name: &str,
    file_name: &str,
    target: &Utf8Path,
    contents: &str,
) -> Result<(), StoreError> {
    write_temp_file(dir, tmp_name, contents).map_err(|err| {
        discard_temp_file(dir, tmp_name);
        StoreError::WriteError {
            path: target.with_file_name(tmp_name),
            message: err.to_string(),
        }
    })?;

    replace_target(dir, tmp_name, file_name).map_err(|err| {
        discard_temp_file(dir, tmp_name);
        StoreError::WriteError {
            path: target.to_path_buf(),
            message: err.to_string(),
        }
    })?;

    sync_directory(dir);
    Ok(())
}

fn temp_name_for(file_name: &str) -> String {
    let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos());
    format!(
        ".{file_name}.tmp.{}.{nanos}.{counter}",
        std::process::id()
    )
}

fn write_temp_file(dir: &Dir, tmp_name: &str, contents: &str) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    let mut file = dir.open_with(tmp_name, &options)?;
    file.write_all(contents.as_bytes())?;
    file.sync_all()
}

#[cfg(windows)]
fn replace_target(dir: &Dir, tmp_name: &str, file_name: &str) -> io::Result<()> {
    // Windows rename fails if the target exists.
    match dir.remove_file(file_name) {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => return Err(err),
    }
    dir.rename(tmp_name, dir, file_name)
}

#[cfg(not(windows))]
fn replace_target(dir: &Dir, tmp_name: &str, file_name: &str) -> io::Result<()> {
    dir.rename(tmp_name, dir, file_name)
}

fn discard_temp_file(dir: &Dir, tmp_name: &str) {
    if dir.remove_file(tmp_name).is_err() {
        // Nothing was created, or it is already gone.
    }
}

fn sync_directory(dir: &Dir) {
    if dir.open(".").and_then(|handle| handle.sync_all()).is_err() {
        // Directory sync is best-effort.
    }
}
