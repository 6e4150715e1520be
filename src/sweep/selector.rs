// Candidate enumeration
// Walks the root recursively and collects regular files accepted by the pattern

use jwalk::WalkDir;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::pattern::FileTypePattern;

/// Recursively collect every regular file (or symlink to one) under `root`
/// whose name matches `pattern`.
///
/// A root that does not exist or is not a directory yields an empty list,
/// and unreadable subdirectories are skipped; neither is reported as an
/// error. Order follows the walker and is not stable across runs.
pub fn enumerate(root: &Path, pattern: &FileTypePattern) -> Vec<PathBuf> {
    if !root.is_dir() {
        debug!(root = %root.display(), "root is not a directory, nothing to enumerate");
        return Vec::new();
    }
    if pattern.is_empty() {
        return Vec::new();
    }

    let mut files = Vec::new();

    // RayonNewPool keeps the walk off the global pool
    for entry_result in WalkDir::new(root)
        .parallelism(jwalk::Parallelism::RayonNewPool(0))
        .skip_hidden(false)
        .follow_links(false)
    {
        match entry_result {
            Ok(entry) => {
                let file_type = entry.file_type();
                if !file_type.is_file() && !file_type.is_symlink() {
                    continue;
                }
                let path = entry.path();
                if !pattern.matches(&path) {
                    continue;
                }
                // Links count when they resolve to a regular file; removing
                // one later deletes only the link.
                if file_type.is_symlink() && !fs::metadata(&path).map(|m| m.is_file()).unwrap_or(false) {
                    continue;
                }
                files.push(path);
            }
            Err(e) => {
                debug!(error = %e, "skipping unreadable entry");
            }
        }
    }

    files
}
