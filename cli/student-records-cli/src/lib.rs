//! Interactive text menu for managing student records.
//!
//! The binary is a thin wrapper around this library: it resolves
//! [`config::CliSettings`], installs logging, loads the record store with
//! [`startup::load_or_empty`] and hands the store to a [`menu::Session`]
//! running over stdin and stdout. Keeping the flow here lets tests drive the
//! whole menu with in-memory input and output.
//!
//! # Example
//!
//! ```
//! use camino::Utf8Path;
//! use student_records::RecordStore;
//! use student_records_cli::menu::{Session, SessionEnd};
//!
//! let mut store = RecordStore::new();
//! let input = "1\nS1\nAna\n20\nCS\n".as_bytes();
//! let mut output = Vec::new();
//!
//! let end = Session::new(&mut store, Utf8Path::new("students.json"), input, &mut output)
//!     .run()
//!     .expect("session runs");
//!
//! assert_eq!(end, SessionEnd::InputClosed);
//! assert_eq!(store.len(), 1);
//! ```

pub mod config;
mod error;
pub mod logging;
pub mod menu;
pub mod startup;

pub use error::CliError;
