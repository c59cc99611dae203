//! The ordered record store.
//!
//! Lookups are linear scans in insertion order. Ids are not required to be
//! unique: id lookups and updates act on the first match, while removal
//! drops every match.

use camino::Utf8Path;
use tracing::{debug, info};

use crate::error::StoreError;
use crate::record::Record;
use crate::snapshot::{Snapshot, write_records};

/// An ordered, in-memory collection of [`Record`]s.
///
/// # Example
///
/// ```
/// use student_records::{Record, RecordStore};
///
/// let mut store = RecordStore::new();
/// store.add(Record::new("S1", "Alicia Li", 20, "CS"));
/// store.add(Record::new("S2", "Bob", 22, "EE"));
///
/// let matches = store.find_by_name("li");
/// assert_eq!(matches.len(), 1);
/// assert!(store.find_by_id("S3").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<Record>,
}

/// The result of [`RecordStore::list_all`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listing<'a> {
    /// The store holds no records.
    Empty,
    /// Every record, in insertion order. Never empty.
    Records(&'a [Record]),
}

impl RecordStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Appends a record. Duplicate ids are accepted.
    pub fn add(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Removes every record whose id equals `id` and returns how many were
    /// removed. Removing an absent id is not an error.
    pub fn remove_by_id(&mut self, id: &str) -> usize {
        let before = self.records.len();
        self.records.retain(|record| record.id() != id);
        before.saturating_sub(self.records.len())
    }

    /// Returns the first record whose id equals `id`.
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&Record> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// Returns, in order, every record whose name contains `query`, ignoring
    /// case.
    #[must_use]
    pub fn find_by_name(&self, query: &str) -> Vec<&Record> {
        let lowered = query.to_lowercase();
        self.records
            .iter()
            .filter(|record| record.name_contains_ignore_case(&lowered))
            .collect()
    }

    /// Overwrites the name, age and course of the first record with the
    /// given id, returning the updated record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::RecordNotFound`] if no record has the id; the
    /// store is left unchanged.
    pub fn update(
        &mut self,
        id: &str,
        name: impl Into<String>,
        age: i32,
        course: impl Into<String>,
    ) -> Result<&Record, StoreError> {
        let Some(record) = self.records.iter_mut().find(|record| record.id() == id) else {
            return Err(StoreError::RecordNotFound { id: id.to_owned() });
        };
        record.overwrite(name.into(), age, course.into());
        Ok(&*record)
    }

    /// Lists every record for display, distinguishing the empty store.
    #[must_use]
    pub fn list_all(&self) -> Listing<'_> {
        if self.records.is_empty() {
            Listing::Empty
        } else {
            Listing::Records(&self.records)
        }
    }

    /// Returns the records in insertion order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Iterates over the records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Returns the number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` when the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Replaces the whole store with the snapshot at `path` and returns the
    /// number of records loaded.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the snapshot is missing, unreadable or
    /// undecodable. The current contents are kept in that case.
    pub fn load(&mut self, path: &Utf8Path) -> Result<usize, StoreError> {
        let snapshot = Snapshot::from_file(path)?;
        self.records = snapshot.into_records();
        info!(path = %path, count = self.records.len(), "record store loaded");
        Ok(self.records.len())
    }

    /// Writes the whole store to `path` as a snapshot, replacing the file
    /// atomically.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the snapshot cannot be encoded or written.
    /// The in-memory store is never modified.
    pub fn save(&self, path: &Utf8Path) -> Result<(), StoreError> {
        write_records(&self.records, path)?;
        info!(path = %path, count = self.records.len(), "record store saved");
        Ok(())
    }
}

impl From<Snapshot> for RecordStore {
    fn from(snapshot: Snapshot) -> Self {
        let records = snapshot.into_records();
        debug!(count = records.len(), "record store built from snapshot");
        Self { records }
    }
}

impl FromIterator<Record> for RecordStore {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
