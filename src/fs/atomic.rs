//! Atomic writes for generated documents and config files.
//!
//! Content goes to a hidden sibling file (`.{name}.{pid}.tmp`), is synced, and
//! is then renamed over the target. A reader never sees a half-written
//! document. `std::fs::rename` replaces an existing target on both POSIX and
//! Windows; the temporary file must live on the same filesystem, so it is
//! always created next to the target.

use crate::error::{PracfileError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write `content` to `path`, creating parent directories.
///
/// # Errors
///
/// Returns `PracfileError::OutputError` if any step fails. The temporary file
/// is removed on failure.
pub fn write_atomic<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            PracfileError::OutputError(format!(
                "failed to create directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = temp_path_for(path)?;

    if let Err(e) = write_and_sync(&temp_path, content.as_bytes()) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        PracfileError::OutputError(format!("failed to replace '{}': {}", path.display(), e))
    })?;

    sync_parent_dir(path);

    tracing::debug!(path = %path.display(), bytes = content.len(), "file written");
    Ok(())
}

/// Persist the directory entry for `path`; best effort.
#[cfg(unix)]
fn sync_parent_dir(path: &Path) {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    if let Ok(dir) = File::open(parent) {
        let _ = dir.sync_all();
    }
}

#[cfg(not(unix))]
fn sync_parent_dir(_path: &Path) {}

fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let file_name = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            PracfileError::OutputError(format!("invalid output path '{}'", target.display()))
        })?;

    let temp_name = format!(".{}.{}.tmp", file_name, std::process::id());
    Ok(match target.parent() {
        Some(parent) => parent.join(temp_name),
        None => PathBuf::from(temp_name),
    })
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        PracfileError::OutputError(format!(
            "failed to create temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;
    file.write_all(content)
        .and_then(|_| file.sync_all())
        .map_err(|e| {
            PracfileError::OutputError(format!(
                "failed to write temporary file '{}': {}",
                path.display(),
                e
            ))
        })
}
