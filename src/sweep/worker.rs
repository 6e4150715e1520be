// Per-chunk inspect-and-delete worker
// Every failure is local to one file: it is logged at debug level, counted as
// "not deleted", and the worker moves on.

use indicatif::ProgressBar;
use std::fs;
use std::iter::Sum;
use std::ops::Add;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::criteria::{DeletionCriteria, MatchMode};
use super::pattern::FileTypePattern;

/// Counts produced by one worker for its chunk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkerResult {
    /// Files looked at, deleted or not
    pub examined: usize,
    /// Files removed (or that would be removed in a dry run)
    pub deleted: usize,
    /// Directories removed by opportunistic cleanup
    pub dirs_removed: usize,
    /// Size of the deleted files
    pub bytes_reclaimed: u64,
}

impl Add for WorkerResult {
    type Output = WorkerResult;

    fn add(self, other: WorkerResult) -> WorkerResult {
        WorkerResult {
            examined: self.examined + other.examined,
            deleted: self.deleted + other.deleted,
            dirs_removed: self.dirs_removed + other.dirs_removed,
            bytes_reclaimed: self.bytes_reclaimed + other.bytes_reclaimed,
        }
    }
}

impl Sum for WorkerResult {
    fn sum<I: Iterator<Item = WorkerResult>>(iter: I) -> WorkerResult {
        iter.fold(WorkerResult::default(), Add::add)
    }
}

/// Inspect every file of `chunk` in order and delete the ones `criteria`
/// selects.
///
/// `progress` advances by one per file examined. With `dry_run` matches are
/// counted but nothing is touched on disk.
pub fn process_chunk(
    chunk: &[PathBuf],
    criteria: &DeletionCriteria,
    dry_run: bool,
    progress: &ProgressBar,
) -> WorkerResult {
    let mut result = WorkerResult::default();

    for path in chunk {
        result.examined += 1;

        if should_delete(path, criteria) {
            let size = fs::metadata(path).map(|m| m.len()).unwrap_or(0);

            if dry_run {
                result.deleted += 1;
                result.bytes_reclaimed += size;
            } else {
                match fs::remove_file(path) {
                    Ok(()) => {
                        result.deleted += 1;
                        result.bytes_reclaimed += size;

                        if let MatchMode::Content { .. } = criteria.mode {
                            if let Some(dir) = path.parent() {
                                if remove_dir_if_untracked(dir, &criteria.pattern) {
                                    result.dirs_removed += 1;
                                }
                            }
                        }
                    }
                    Err(e) => {
                        debug!(path = %path.display(), error = %e, "could not remove file");
                    }
                }
            }
        }

        progress.inc(1);
    }

    result
}

fn should_delete(path: &Path, criteria: &DeletionCriteria) -> bool {
    match criteria.mode {
        MatchMode::Extension => true,
        MatchMode::Content { .. } => match fs::read(path) {
            // Lossy decoding: undecodable bytes can never contain an ASCII marker
            Ok(bytes) => criteria.matches_content(&String::from_utf8_lossy(&bytes)),
            Err(e) => {
                debug!(path = %path.display(), error = %e, "could not read file");
                false
            }
        },
    }
}

/// Remove `dir` when it no longer holds any file `pattern` tracks.
///
/// `remove_dir` refuses non-empty directories, so a folder that still holds
/// audio or images stays. A directory that vanished or gained entries
/// because another worker got there first is not an error.
fn remove_dir_if_untracked(dir: &Path, pattern: &FileTypePattern) -> bool {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            debug!(dir = %dir.display(), error = %e, "could not list directory");
            return false;
        }
    };

    let still_tracked = entries.filter_map(Result::ok).any(|entry| {
        entry.file_type().map(|t| t.is_file()).unwrap_or(false) && pattern.matches(&entry.path())
    });
    if still_tracked {
        return false;
    }

    match fs::remove_dir(dir) {
        Ok(()) => true,
        Err(e) => {
            debug!(dir = %dir.display(), error = %e, "directory left in place");
            false
        }
    }
}
