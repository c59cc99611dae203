//! Snapshot persistence format.
//!
//! A snapshot is the full ordered contents of a store encoded as a versioned
//! JSON document:
//!
//! ```json
//! {
//!   "version": 1,
//!   "records": [
//!     { "id": "S1", "name": "Ana", "age": 20, "course": "CS" }
//!   ]
//! }
//! ```
//!
//! Records appear in store order. Files are read and written through
//! capability-scoped directory handles opened on the snapshot's parent.

use std::io;

use camino::Utf8Path;
use cap_std::{ambient_authority, fs::Dir};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::atomic_io::write_atomic;
use crate::error::StoreError;
use crate::record::Record;

/// Snapshot format version written by this crate.
pub const SNAPSHOT_VERSION: u32 = 1;

/// The decoded contents of a snapshot file.
///
/// # Example
///
/// ```
/// use student_records::{Record, Snapshot};
///
/// let json = r#"{
///     "version": 1,
///     "records": [{"id": "S1", "name": "Ana", "age": 20, "course": "CS"}]
/// }"#;
///
/// let snapshot = Snapshot::from_json(json).expect("valid snapshot");
/// assert_eq!(snapshot.records(), [Record::new("S1", "Ana", 20, "CS")]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    version: u32,
    records: Vec<Record>,
}

impl Snapshot {
    /// Wraps records in a snapshot of the current format version.
    #[must_use]
    pub const fn new(records: Vec<Record>) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            records,
        }
    }

    /// Parses a snapshot from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ParseError`] if the JSON is malformed or missing
    /// fields, and [`StoreError::UnsupportedVersion`] for an unknown version.
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let raw: RawSnapshot =
            serde_json::from_str(json).map_err(|err| StoreError::ParseError {
                message: err.to_string(),
            })?;

        if raw.version != SNAPSHOT_VERSION {
            return Err(StoreError::UnsupportedVersion {
                expected: SNAPSHOT_VERSION,
                actual: raw.version,
            });
        }

        Ok(Self {
            version: raw.version,
            records: raw.records,
        })
    }

    /// Reads and parses the snapshot stored at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::MissingSnapshot`] when the file or its directory
    /// does not exist, [`StoreError::ReadError`] for other I/O failures, and
    /// the parse errors of [`Snapshot::from_json`].
    pub fn from_file(path: &Utf8Path) -> Result<Self, StoreError> {
        let (parent, file_name) = split_snapshot_path(path).map_err(|message| {
            StoreError::ReadError {
                path: path.to_path_buf(),
                message,
            }
        })?;
        let contents = Dir::open_ambient_dir(parent, ambient_authority())
            .and_then(|dir| dir.read_to_string(file_name))
            .map_err(|err| read_error(path, &err))?;

        let snapshot = Self::from_json(&contents)?;
        debug!(path = %path, count = snapshot.records.len(), "snapshot read");
        Ok(snapshot)
    }

    /// Serializes the snapshot as pretty-printed JSON with a trailing newline.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::SerializeError`] if encoding fails.
    pub fn to_json_pretty(&self) -> Result<String, StoreError> {
        encode(&self.records)
    }

    /// Writes the snapshot to `path`, replacing any existing file atomically.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::WriteError`] if the file cannot be written.
    pub fn write_to_file(&self, path: &Utf8Path) -> Result<(), StoreError> {
        write_records(&self.records, path)
    }

    /// Returns the format version recorded in the snapshot.
    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    /// Returns the records in stored order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Consumes the snapshot, returning its records.
    #[must_use]
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

/// Encodes `records` and writes them to `path` without cloning them into a
/// [`Snapshot`] first.
pub(crate) fn write_records(records: &[Record], path: &Utf8Path) -> Result<(), StoreError> {
    let contents = encode(records)?;
    let (parent, file_name) =
        split_snapshot_path(path).map_err(|message| StoreError::WriteError {
            path: path.to_path_buf(),
            message,
        })?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|err| {
        StoreError::WriteError {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    })?;

    write_atomic(&dir, file_name, path, &contents)?;
    debug!(path = %path, count = records.len(), "snapshot written");
    Ok(())
}

fn encode(records: &[Record]) -> Result<String, StoreError> {
    let document = SnapshotDocument {
        version: SNAPSHOT_VERSION,
        records,
    };
    let mut json =
        serde_json::to_string_pretty(&document).map_err(|err| StoreError::SerializeError {
            message: err.to_string(),
        })?;
    json.push('\n');
    Ok(json)
}

fn split_snapshot_path(path: &Utf8Path) -> Result<(&Utf8Path, &str), String> {
    let file_name = path
        .file_name()
        .ok_or_else(|| "snapshot path must be a file".to_owned())?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    Ok((parent, file_name))
}

fn read_error(path: &Utf8Path, err: &io::Error) -> StoreError {
    if err.kind() == io::ErrorKind::NotFound {
        StoreError::MissingSnapshot {
            path: path.to_path_buf(),
        }
    } else {
        StoreError::ReadError {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }
}

/// Borrowed JSON representation for serialization.
#[derive(Debug, Serialize)]
struct SnapshotDocument<'a> {
    version: u32,
    records: &'a [Record],
}

/// Raw JSON representation for deserialization.
#[derive(Debug, Deserialize)]
struct RawSnapshot {
    version: u32,
    records: Vec<Record>,
}
