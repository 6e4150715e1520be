// Sweep engine
// Runs one pass: enumerate, partition, one scoped worker thread per chunk,
// then aggregate the results that come back over a channel.

use crossbeam_channel::unbounded;
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use super::criteria::DeletionCriteria;
use super::partition::partition;
use super::selector::enumerate;
use super::summary::RunSummary;
use super::worker::{process_chunk, WorkerResult};

/// Cores left free for the rest of the machine by default.
pub const DEFAULT_RESERVED_CORES: usize = 4;

/// `max(cpus - reserved, 1)`.
pub fn default_worker_count(reserved: usize) -> usize {
    num_cpus::get().saturating_sub(reserved).max(1)
}

/// Sum worker results. Completion order does not matter.
pub fn aggregate<I>(results: I) -> WorkerResult
where
    I: IntoIterator<Item = WorkerResult>,
{
    results.into_iter().sum()
}

/// Engine for running sweep passes
pub struct SweepEngine {
    workers: usize,
    dry_run: bool,
    show_progress: bool,
}

impl SweepEngine {
    /// Create an engine sized from the host's CPU count
    pub fn new() -> Self {
        Self {
            workers: default_worker_count(DEFAULT_RESERVED_CORES),
            dry_run: false,
            show_progress: true,
        }
    }

    /// Set the worker count (zero is treated as one)
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    /// Count matches without deleting anything
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Enable or disable the per-worker progress bars
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Run a full pass over `root` and block until every worker is done.
    ///
    /// Never fails: a bad root produces an empty pass and per-file problems
    /// only lower the deletion count.
    pub fn run(&self, root: &Path, criteria: &DeletionCriteria) -> RunSummary {
        let (files, enumeration_elapsed) = self.collect(root, criteria);
        self.finish(&files, enumeration_elapsed, criteria)
    }

    /// Same as [`run`](Self::run), announcing each phase on `out` as it starts.
    pub fn run_with_status<W: Write>(
        &self,
        root: &Path,
        criteria: &DeletionCriteria,
        out: &mut W,
    ) -> io::Result<RunSummary> {
        writeln!(out, "File reading in progress...")?;
        out.flush()?;
        let (files, enumeration_elapsed) = self.collect(root, criteria);

        writeln!(out, "File processing in progress...(this might take a while)")?;
        out.flush()?;
        Ok(self.finish(&files, enumeration_elapsed, criteria))
    }

    fn collect(&self, root: &Path, criteria: &DeletionCriteria) -> (Vec<PathBuf>, Duration) {
        info!(root = %root.display(), criteria = %criteria, dry_run = self.dry_run, "starting pass");

        let enumeration_start = Instant::now();
        let files = enumerate(root, &criteria.pattern);
        let enumeration_elapsed = enumeration_start.elapsed();
        debug!(files = files.len(), "enumeration finished");

        (files, enumeration_elapsed)
    }

    fn finish(&self, files: &[PathBuf], enumeration_elapsed: Duration, criteria: &DeletionCriteria) -> RunSummary {
        let processing_start = Instant::now();
        let totals = self.process_files(files, criteria);
        let processing_elapsed = processing_start.elapsed();

        info!(scanned = files.len(), deleted = totals.deleted, "pass finished");

        RunSummary::new(
            criteria.clone(),
            files.len(),
            totals,
            enumeration_elapsed,
            processing_elapsed,
            self.workers,
            self.dry_run,
        )
    }

    /// Dispatch one worker per chunk and block until every worker has reported.
    pub fn process_files(&self, files: &[PathBuf], criteria: &DeletionCriteria) -> WorkerResult {
        let chunks = partition(files, self.workers);
        if chunks.is_empty() {
            return WorkerResult::default();
        }

        let multi = if self.show_progress {
            MultiProgress::new()
        } else {
            MultiProgress::with_draw_target(ProgressDrawTarget::hidden())
        };
        let style = ProgressStyle::default_bar()
            .template("{prefix:>10} [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%)")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-");

        let (sender, receiver) = unbounded::<WorkerResult>();
        let dry_run = self.dry_run;

        thread::scope(|scope| {
            for (i, chunk) in chunks.iter().enumerate() {
                let pb = multi.add(ProgressBar::new(chunk.len() as u64));
                pb.set_style(style.clone());
                pb.set_prefix(format!("Worker {}", i + 1));

                let sender = sender.clone();
                let chunk: &[PathBuf] = chunk;
                scope.spawn(move || {
                    let result = process_chunk(chunk, criteria, dry_run, &pb);
                    pb.finish();
                    // Receiver outlives the scope
                    let _ = sender.send(result);
                });
            }
        });
        drop(sender);

        // Results arrive in completion order
        aggregate(receiver.iter())
    }
}

impl Default for SweepEngine {
    fn default() -> Self {
        Self::new()
    }
}
