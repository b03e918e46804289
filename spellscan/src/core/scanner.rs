// src/core/scanner.rs
#[cfg(test)]
pub mod test_utils;

use crate::core::exclude::Patterns;
use anyhow::{Context as _, Result, bail};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// What the scanner looks for and how it walks.
#[derive(Debug, Clone, Copy)]
pub struct ScanOptions<'a> {
    /// Target extension, without the leading dot
    pub extension: &'a str,
    pub exclude: Option<&'a Patterns>,
    pub follow_links: bool,
}

impl<'a> ScanOptions<'a> {
    #[inline]
    #[must_use]
    pub const fn new(extension: &'a str) -> Self {
        Self {
            extension,
            exclude: None,
            follow_links: false,
        }
    }
}

/// Collects every directory under `root` that directly contains at least one
/// file with the target extension.
///
/// Directories appear once each, in depth-first pre-order: a directory comes
/// before its subdirectories, and siblings are ordered by file name. Paths
/// are `root` joined with the entry names, so a relative root gives relative
/// paths.
///
/// # Arguments
///
/// * `root` - The directory to scan
/// * `options` - Target extension, exclusions and symlink handling
///
/// # Returns
///
/// * `Ok(Vec<PathBuf>)` - The qualifying directories, possibly empty
///
/// # Errors
///
/// This function may return an error if:
/// * `root` does not exist or is not a directory
/// * Any directory in the tree cannot be read
#[inline]
pub fn scan_directories(root: &Path, options: &ScanOptions<'_>) -> Result<Vec<PathBuf>> {
    let metadata = fs::metadata(root)
        .with_context(|| format!("Failed to access directory: {}", root.display()))?;
    if !metadata.is_dir() {
        bail!("Not a directory: {}", root.display());
    }

    let extension = options.extension.trim_start_matches('.');
    let mut dirs: Vec<PathBuf> = Vec::new();

    let walker = WalkDir::new(root)
        .follow_links(options.follow_links)
        .sort_by(|a, b| {
            // Files first so a directory is recorded before any descendant.
            a.file_type()
                .is_dir()
                .cmp(&b.file_type().is_dir())
                .then_with(|| a.file_name().cmp(b.file_name()))
        })
        .into_iter()
        .filter_entry(|e| !is_excluded(e, root, options.exclude));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.loop_ancestor().is_some() => {
                let path = err.path().map(Path::to_path_buf).unwrap_or_default();
                warn!(path = %path.display(), "skipping symlink loop");
                continue;
            }
            Err(err) => {
                let path = err.path().unwrap_or(root).to_path_buf();
                return Err(err)
                    .with_context(|| format!("Failed to read directory: {}", path.display()));
            }
        };

        if !entry.file_type().is_file() || !has_extension(entry.path(), extension) {
            continue;
        }

        let Some(dir) = entry.path().parent() else {
            continue;
        };

        // All files of one directory are visited together.
        if dirs.last().is_some_and(|last| last == dir) {
            continue;
        }

        debug!(dir = %dir.display(), file = %entry.path().display(), "directory qualifies");
        dirs.push(dir.to_path_buf());
    }

    Ok(dirs)
}

pub(crate) fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension() == Some(OsStr::new(extension))
}

fn is_excluded(entry: &DirEntry, root: &Path, exclude: Option<&Patterns>) -> bool {
    if entry.depth() == 0 {
        return false;
    }
    let Some(patterns) = exclude else {
        return false;
    };
    let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
    patterns.matches(relative, entry.file_type().is_dir())
}
