//! Atomic file writes for exported artefacts.
//!
//! Exports are written to a hidden temporary file beside the target and then
//! renamed over it, so a reader never sees a half-written file.

use std::io::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs::{Dir, OpenOptions};

use crate::console::ConsoleError;

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Write `contents` to `path` through a temporary file and rename.
///
/// # Errors
///
/// Returns [`ConsoleError::Io`] when the parent directory cannot be opened or
/// the file cannot be written.
pub(crate) fn write_atomic(path: &Utf8Path, contents: &[u8]) -> Result<(), ConsoleError> {
    let io_error = |message: String| ConsoleError::Io {
        path: path.to_path_buf(),
        message,
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| io_error("export path must name a file".to_owned()))?;
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let dir = Dir::open_ambient_dir(parent, ambient_authority())
        .map_err(|err| io_error(err.to_string()))?;

    let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos());
    let tmp_name = format!(".{file_name}.tmp.{}.{suffix}.{counter}", std::process::id());

    if let Err(err) = write_temp_file(&dir, &tmp_name, contents) {
        drop(dir.remove_file(&tmp_name));
        return Err(io_error(err.to_string()));
    }
    if let Err(err) = rename_over(&dir, &tmp_name, file_name) {
        drop(dir.remove_file(&tmp_name));
        return Err(io_error(err.to_string()));
    }
    if dir.open(".").and_then(|handle| handle.sync_all()).is_err() {
        // Directory sync is best effort.
    }
    Ok(())
}

fn write_temp_file(dir: &Dir, tmp_name: &str, contents: &[u8]) -> std::io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    let mut file = dir.open_with(tmp_name, &options)?;
    file.write_all(contents)?;
    file.sync_all()
}

#[cfg(windows)]
fn rename_over(dir: &Dir, tmp_name: &str, target_name: &str) -> std::io::Result<()> {
    match dir.remove_file(target_name) {
        Ok(()) => {}
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
        Err(err) => return Err(err),
    }
    dir.rename(tmp_name, dir, target_name)
}

#[cfg(not(windows))]
fn rename_over(dir: &Dir, tmp_name: &str, target_name: &str) -> std::io::Result<()> {
    dir.rename(tmp_name, dir, target_name)
}
