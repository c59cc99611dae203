//! Loading the record store when the menu starts.

use std::io::Write;

use camino::Utf8Path;
use student_records::{RecordStore, StoreError};
use tracing::{info, warn};

use crate::error::CliError;

/// Loads the store from `data_file`, starting empty when that fails.
///
/// A missing file is the normal first run and is only logged. Any other
/// failure is reported to the user on `out` as `Error loading data: ...`.
///
/// # Errors
///
/// Returns [`CliError::Terminal`] only if writing the report to `out` fails.
pub fn load_or_empty(data_file: &Utf8Path, out: &mut impl Write) -> Result<RecordStore, CliError> {
    let mut store = RecordStore::new();
    match store.load(data_file) {
        Ok(count) => {
            info!(path = %data_file, count, "loaded student records");
        }
        Err(StoreError::MissingSnapshot { .. }) => {
            info!(path = %data_file, "no data file yet; starting empty");
        }
        Err(err) => {
            warn!(path = %data_file, error = %err, "failed to load student records");
            writeln!(out, "Error loading data: {err}")?;
        }
    }
    Ok(store)
}
