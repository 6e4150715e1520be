use std::path::PathBuf;

use crate::sweep::{BeatmapPolicy, Config, DeletionCriteria, SweepEngine, SweepError};

/// What the user picked for the next pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Beatmaps(BeatmapPolicy),
    Videos,
}

/// Menu state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    SelectCategory,
    SelectBeatmapPolicy,
    RunPass(Selection),
    Exit, // Terminal
}

pub struct App {
    pub root: PathBuf,
    pub config: Config,
    pub mode: AppMode,
    pub dry_run: bool,
    // Shown above the next prompt after invalid input
    pub message: Option<String>,
    pub passes_run: usize,
}

impl App {
    pub fn new(root: PathBuf, config: Config) -> Self {
        Self {
            root,
            config,
            mode: AppMode::SelectCategory,
            dry_run: false,
            message: None,
            passes_run: 0,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn should_quit(&self) -> bool {
        self.mode == AppMode::Exit
    }

    /// Build the criteria for a selection from the configured extensions.
    pub fn criteria_for(&self, selection: Selection) -> Result<DeletionCriteria, SweepError> {
        match selection {
            Selection::Beatmaps(policy) => {
                Ok(DeletionCriteria::for_beatmaps(policy, self.config.beatmap_pattern()?))
            }
            Selection::Videos => Ok(DeletionCriteria::extension(self.config.video_pattern()?)),
        }
    }

    /// Engine configured from this session's settings.
    pub fn engine(&self) -> SweepEngine {
        SweepEngine::new()
            .with_workers(self.config.worker_count())
            .with_dry_run(self.dry_run)
            .with_progress(self.config.show_progress)
    }
}
