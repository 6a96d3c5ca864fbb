//! Whole-file replacement through a temporary sibling and a rename.
//!
//! Readers of the target observe either the previous contents or the new
//! contents, never a partial write.

use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};

use cap_std::fs::{Dir, OpenOptions};

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Replace `file_name` inside `dir` with `contents`.
///
/// `file_name` must be a single path component; callers validate it.
pub(crate) fn write_atomic(dir: &Dir, file_name: &str, contents: &str) -> io::Result<()> {
    let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let tmp_name = format!(".{file_name}.tmp.{}.{counter}", std::process::id());

    if let Err(err) = write_temp_file(dir, &tmp_name, contents) {
        discard(dir, &tmp_name);
        return Err(err);
    }
    if let Err(err) = replace_target(dir, &tmp_name, file_name) {
        discard(dir, &tmp_name);
        return Err(err);
    }
    sync_directory(dir);
    Ok(())
}

fn write_temp_file(dir: &Dir, tmp_name: &str, contents: &str) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    let mut file = dir.open_with(tmp_name, &options)?;
    file.write_all(contents.as_bytes())?;
    file.sync_all()
}

#[cfg(windows)]
fn replace_target(dir: &Dir, tmp_name: &str, target_name: &str) -> io::Result<()> {
    // Windows rename fails if the target exists.
    match dir.remove_file(target_name) {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => return Err(err),
    }
    dir.rename(tmp_name, dir, target_name)
}

#[cfg(not(windows))]
fn replace_target(dir: &Dir, tmp_name: &str, target_name: &str) -> io::Result<()> {
    dir.rename(tmp_name, dir, target_name)
}

fn discard(dir: &Dir, tmp_name: &str) {
    // Missing temp file or cleanup failure; the target is untouched.
    drop(dir.remove_file(tmp_name));
}

fn sync_directory(dir: &Dir) {
    // Best effort; some platforms cannot fsync a directory handle.
    drop(dir.open(".").and_then(|handle| handle.sync_all()));
}
