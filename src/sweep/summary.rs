//! End-of-pass report.

use colored::Colorize;
use std::io::{self, Write};
use std::time::Duration;

use super::criteria::DeletionCriteria;
use super::worker::WorkerResult;

/// Read-only summary of one completed pass.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub criteria: DeletionCriteria,
    pub files_scanned: usize,
    pub files_deleted: usize,
    pub dirs_removed: usize,
    pub bytes_reclaimed: u64,
    pub enumeration_elapsed: Duration,
    pub processing_elapsed: Duration,
    pub workers: usize,
    pub dry_run: bool,
}

impl RunSummary {
    pub fn new(
        criteria: DeletionCriteria,
        files_scanned: usize,
        totals: WorkerResult,
        enumeration_elapsed: Duration,
        processing_elapsed: Duration,
        workers: usize,
        dry_run: bool,
    ) -> Self {
        Self {
            criteria,
            files_scanned,
            files_deleted: totals.deleted,
            dirs_removed: totals.dirs_removed,
            bytes_reclaimed: totals.bytes_reclaimed,
            enumeration_elapsed,
            processing_elapsed,
            workers,
            dry_run,
        }
    }

    /// Plain-text report lines, without styling.
    pub fn report_lines(&self) -> Vec<String> {
        let deleted_label = if self.dry_run { "Total files that would be deleted" } else { "Total files deleted" };
        vec![
            format!("Criteria: {}", self.criteria),
            format!("File reading elapsed time: {}", format_elapsed(self.enumeration_elapsed)),
            format!("File processing elapsed time: {}", format_elapsed(self.processing_elapsed)),
            format!("Total files read: {}", self.files_scanned),
            format!("{}: {}", deleted_label, self.files_deleted),
            format!("Directories removed: {}", self.dirs_removed),
            format!(
                "Space reclaimed: {}",
                humansize::format_size(self.bytes_reclaimed, humansize::BINARY)
            ),
            format!("Workers: {}", self.workers),
        ]
    }

    /// Write the styled report.
    pub fn write_report<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out)?;
        if self.dry_run {
            writeln!(out, "{}", "Dry run complete, nothing was deleted".yellow().bold())?;
        } else {
            writeln!(out, "{}", "Pass complete!".green().bold())?;
        }
        for line in self.report_lines() {
            match line.split_once(": ") {
                Some((label, value)) => writeln!(out, "{}: {}", label, value.cyan())?,
                None => writeln!(out, "{}", line)?,
            }
        }
        writeln!(out)?;
        out.flush()
    }
}

/// Format a duration as whole minutes and seconds, e.g. `2 m, 5 s`.
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{} m, {} s", secs / 60, secs % 60)
}
