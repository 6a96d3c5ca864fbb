//! Shared capability-based filesystem helpers for saved-itinerary tests.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs::Dir;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Create a unique empty directory under `target/saved-itineraries-tests`.
///
/// # Errors
///
/// Returns any filesystem errors encountered while creating the directory.
pub fn unique_temp_dir(prefix: &str) -> io::Result<Utf8PathBuf> {
    static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);
    let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let process_id = std::process::id();
    let dir = Utf8PathBuf::from("target")
        .join("saved-itineraries-tests")
        .join(format!("{prefix}-{process_id}-{counter}"));
    let root = Dir::open_ambient_dir(".", ambient_authority())?;
    if root.exists(&dir) {
        root.remove_dir_all(&dir)?;
    }
    root.create_dir_all(&dir)?;
    Ok(dir)
}

/// Read a file relative to the working directory, returning `None` when absent.
///
/// # Errors
///
/// Returns filesystem errors other than a missing file.
pub fn read_optional(path: &Utf8Path) -> io::Result<Option<String>> {
    let root = Dir::open_ambient_dir(".", ambient_authority())?;
    match root.read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err),
    }
}
