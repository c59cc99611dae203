//! In-memory student record store with versioned JSON snapshot persistence.
//!
//! The crate holds the core of the student records manager: the [`Record`]
//! value type and the ordered [`RecordStore`] that owns them. It has no
//! knowledge of terminals or menus; callers drive it directly and decide how
//! to present its results.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Appending, updating and removing records by id
//! - Exact id lookup and case-insensitive name search
//! - Saving and loading the whole store as a JSON snapshot, written
//!   atomically through a temporary file
//!
//! # Example
//!
//! ```
//! use student_records::{Listing, Record, RecordStore};
//!
//! let mut store = RecordStore::new();
//! store.add(Record::new("S1", "Ana", 20, "CS"));
//! store.add(Record::new("S2", "Ben", 22, "EE"));
//!
//! store.update("S2", "Ben T.", 23, "EE").expect("S2 exists");
//! assert_eq!(store.remove_by_id("S1"), 1);
//!
//! let Listing::Records(records) = store.list_all() else {
//!     panic!("store should not be empty");
//! };
//! assert_eq!(records, [Record::new("S2", "Ben T.", 23, "EE")]);
//! ```

mod atomic_io;
mod error;
mod record;
mod snapshot;
mod store;

pub use error::StoreError;
pub use record::Record;
pub use snapshot::{SNAPSHOT_VERSION, Snapshot};
pub use store::{Listing, RecordStore};
