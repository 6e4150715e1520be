//! Sweep module - parallel scan-and-delete passes over an osu! Songs folder
//!
//! A pass enumerates candidate files, splits them into one contiguous chunk
//! per worker, lets every worker inspect and delete its chunk, then sums the
//! per-worker results into a single summary.

pub mod config;
pub mod criteria;
pub mod engine;
pub mod error;
pub mod partition;
pub mod pattern;
pub mod selector;
pub mod summary;
pub mod worker;

pub use config::Config;
pub use criteria::{BeatmapPolicy, Category, DeletionCriteria, MatchMode};
pub use engine::{aggregate, default_worker_count, SweepEngine};
pub use error::SweepError;
pub use partition::partition;
pub use pattern::FileTypePattern;
pub use selector::enumerate;
pub use summary::{format_elapsed, RunSummary};
pub use worker::{process_chunk, WorkerResult};
