use clap::Parser;
use std::path::PathBuf;

use crate::app::Selection;
use crate::sweep::{BeatmapPolicy, Category, SweepError};

/// Bulk-delete beatmap difficulties by game mode, or video files, from an osu! Songs folder
#[derive(Parser, Debug)]
#[command(name = "osu-sweep", version, about, long_about = None)]
pub struct Cli {
    /// Path to the osu! Songs folder (prompted for when omitted)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Run a single pass over this category without menus
    #[arg(short, long, value_enum, requires = "root")]
    pub category: Option<Category>,

    /// Beatmap modes to delete with `--category beatmaps` [default: all-but-standard]
    #[arg(short, long, value_enum, requires = "category")]
    pub policy: Option<BeatmapPolicy>,

    /// Number of worker threads (default: CPU count minus reserved cores)
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Report what would be deleted without deleting anything
    #[arg(long)]
    pub dry_run: bool,

    /// Hide the per-worker progress bars
    #[arg(long)]
    pub no_progress: bool,

    /// Config file (default: <config dir>/osu-sweep/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log skipped files and cleanup failures
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// The pass requested on the command line, or `None` for the menus.
    pub fn selection(&self) -> Result<Option<Selection>, SweepError> {
        match (self.category, self.policy) {
            (None, _) => Ok(None),
            (Some(Category::Beatmaps), policy) => {
                Ok(Some(Selection::Beatmaps(policy.unwrap_or_default())))
            }
            (Some(Category::Videos), None) => Ok(Some(Selection::Videos)),
            (Some(Category::Videos), Some(_)) => Err(SweepError::InvalidArguments {
                message: "--policy only applies to --category beatmaps".to_string(),
            }),
        }
    }
}
