//! Error types for the student-records crate.
//!
//! Every failure the store can report is recoverable: callers receive a
//! [`StoreError`] value and the in-memory store keeps the contents it had
//! before the failing call.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors reported by [`crate::RecordStore`] operations.
///
/// Lookups by id that find nothing are reported through `Option` instead;
/// this enum covers updates of absent records and snapshot persistence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No record with the requested id exists in the store.
    #[error("no record with id '{id}'")]
    RecordNotFound {
        /// The id that was looked up.
        id: String,
    },

    /// No snapshot file exists at the requested path yet.
    #[error("no snapshot found at '{path}'")]
    MissingSnapshot {
        /// Path that was looked up.
        path: Utf8PathBuf,
    },

    /// The snapshot file could not be opened or read.
    #[error("failed to read snapshot at '{path}': {message}")]
    ReadError {
        /// Path to the snapshot file.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The snapshot content is not a valid snapshot document.
    #[error("invalid snapshot JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The snapshot was written by an unknown format version.
    #[error("unsupported snapshot version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Version this build understands.
        expected: u32,
        /// Version recorded in the snapshot.
        actual: u32,
    },

    /// The store could not be encoded as a snapshot.
    #[error("failed to serialize snapshot: {message}")]
    SerializeError {
        /// Description of the serialization error.
        message: String,
    },

    /// The snapshot file could not be written.
    #[error("failed to write snapshot at '{path}': {message}")]
    WriteError {
        /// Path that was being written.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },
}
