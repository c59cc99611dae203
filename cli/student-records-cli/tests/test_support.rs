//! Scratch data files for the menu session scenarios.
//!
//! Every scenario gets its own directory under
//! `target/student-records-tests/`, named after the scenario label, the test
//! process and a per-process sequence number, so parallel scenarios never
//! share a data file.

use camino::Utf8PathBuf;
use cap_std::ambient_authority;
use cap_std::fs::Dir;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Returns the path of a `students.json` that does not exist yet, inside a
/// freshly created scenario directory.
///
/// # Errors
///
/// Returns any error raised while creating the scenario directory.
pub fn scratch_data_file(label: &str) -> io::Result<Utf8PathBuf> {
    static SEQUENCE: AtomicUsize = AtomicUsize::new(0);
    let sequence = SEQUENCE.fetch_add(1, Ordering::Relaxed);
    let scenario_dir = Utf8PathBuf::from("target")
        .join("student-records-tests")
        .join(format!("{label}-{}-{sequence}", std::process::id()));
    Dir::open_ambient_dir(".", ambient_authority())?.create_dir_all(&scenario_dir)?;
    Ok(scenario_dir.join("students.json"))
}
