//! Optional TOML configuration.
//!
//! Looked up at `--config` or `<config dir>/osu-sweep/config.toml`. Every key
//! is optional; a missing default file simply means defaults.

use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::engine::{default_worker_count, DEFAULT_RESERVED_CORES};
use super::error::SweepError;
use super::pattern::{FileTypePattern, BEATMAP_EXTENSIONS, VIDEO_EXTENSIONS};

/// File name searched for inside the per-user config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Sweep configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Cores left free when the worker count is computed.
    pub reserved_cores: usize,
    /// Fixed worker count; overrides `reserved_cores`.
    pub workers: Option<usize>,
    /// Extensions inspected by content.
    pub beatmap_extensions: Vec<String>,
    /// Extensions deleted unconditionally.
    pub video_extensions: Vec<String>,
    /// Draw per-worker progress bars.
    pub show_progress: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reserved_cores: DEFAULT_RESERVED_CORES,
            workers: None,
            beatmap_extensions: BEATMAP_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            video_extensions: VIDEO_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            show_progress: true,
        }
    }
}

impl Config {
    /// Default location, if the platform has a config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("osu-sweep").join(CONFIG_FILE_NAME))
    }

    /// Load from an explicit path (which must exist) or from the default
    /// location (which may be absent).
    pub fn load(explicit: Option<&Path>) -> Result<Self, SweepError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) => match Self::from_file(&path) {
                    Err(SweepError::ConfigNotFound { .. }) => Ok(Self::default()),
                    other => other,
                },
                None => Ok(Self::default()),
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, SweepError> {
        let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => SweepError::ConfigNotFound {
                path: path.to_path_buf(),
            },
            _ => SweepError::from_io_error(e, "reading config", Some(path.to_path_buf())),
        })?;
        Self::from_toml(&contents).map_err(|reason| SweepError::ConfigParse {
            path: path.to_path_buf(),
            reason,
        })
    }

    pub fn from_toml(contents: &str) -> Result<Self, String> {
        toml::from_str(contents).map_err(|e| e.to_string())
    }

    /// Worker count after applying `workers` / `reserved_cores`.
    pub fn worker_count(&self) -> usize {
        match self.workers {
            Some(n) => n.max(1),
            None => default_worker_count(self.reserved_cores),
        }
    }

    pub fn beatmap_pattern(&self) -> Result<FileTypePattern, SweepError> {
        FileTypePattern::from_extensions(&self.beatmap_extensions)
    }

    pub fn video_pattern(&self) -> Result<FileTypePattern, SweepError> {
        FileTypePattern::from_extensions(&self.video_extensions)
    }
}
