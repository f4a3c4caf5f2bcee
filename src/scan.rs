//! Input corpus enumeration.

use anyhow::{Context, Result, bail};
use glob::glob;
use std::path::{Path, PathBuf};

/// Recursively enumerate every file under `root`, sorted for a deterministic
/// processing order within the run.
///
/// Directories themselves are skipped; an empty directory yields an empty
/// vector, not an error.
///
/// # Errors
/// Returns an error if `root` is not an existing directory or an entry cannot
/// be read during traversal. This is the pipeline's only fatal condition.
pub fn enumerate_files(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        bail!("input root is not a directory: {}", root.display());
    }
    let pattern = format!("{}/**/*", root.display());
    let entries = glob(&pattern).with_context(|| format!("invalid scan pattern: {pattern}"))?;

    let mut files = Vec::new();
    for entry in entries {
        let path =
            entry.with_context(|| format!("error reading entry under {}", root.display()))?;
        if path.is_file() {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}
