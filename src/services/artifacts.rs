//! Filesystem materialization for setup artifacts.
//!
//! Config artifacts are copied only when absent so operator edits survive
//! repeated runs; the hosts artifact and template seeds are always rewritten.
//! Rewrites go through a temp file in the destination directory followed by
//! an atomic rename, so an interrupted run never leaves a half-written file.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::domain::AppError;

/// Create a directory and all of its parents; fine if it already exists.
pub fn ensure_dir(path: &Path) -> Result<(), AppError> {
    fs::create_dir_all(path)?;
    Ok(())
}

/// Copy `src` to `dst` unless `dst` already exists. Returns whether a copy
/// happened. The caller is responsible for the destination directory.
pub fn copy_if_absent(src: &Path, dst: &Path) -> Result<bool, AppError> {
    if dst.exists() {
        return Ok(false);
    }
    let content = read_example(src)?;
    write_staged(dst, &content)?;
    Ok(true)
}

/// Copy `src` over `dst`, replacing any existing file in one rename.
pub fn copy_replace(src: &Path, dst: &Path) -> Result<(), AppError> {
    let content = read_example(src)?;
    write_staged(dst, &content)
}

/// Write `contents` to `path` via a sibling temp file plus atomic rename.
pub(crate) fn write_staged(path: &Path, contents: &[u8]) -> Result<(), AppError> {
    let dir = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
    let mut staged = NamedTempFile::new_in(dir)?;
    staged.write_all(contents)?;
    staged.persist(path).map_err(|err| AppError::Io(err.error))?;
    Ok(())
}

fn read_example(src: &Path) -> Result<Vec<u8>, AppError> {
    if !src.exists() {
        return Err(AppError::ExampleMissing(src.display().to_string()));
    }
    Ok(fs::read(src)?)
}
