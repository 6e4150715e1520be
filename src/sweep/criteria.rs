//! Deletion criteria chosen once per pass.

use std::fmt;

use super::pattern::FileTypePattern;

/// File category offered by the first menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Category {
    /// `.osu` beatmap files, inspected by content
    Beatmaps,
    /// Video files, deleted by extension
    Videos,
}

/// Which beatmap game modes to delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum BeatmapPolicy {
    /// Delete every mode except osu!standard
    #[default]
    #[value(name = "all-but-standard")]
    AllButStandard,
    /// Delete only osu!standard
    #[value(name = "standard")]
    StandardOnly,
    /// Delete only taiko
    #[value(name = "taiko")]
    TaikoOnly,
    /// Delete only catch
    #[value(name = "catch")]
    CatchOnly,
    /// Delete only mania
    #[value(name = "mania")]
    ManiaOnly,
}

impl BeatmapPolicy {
    /// Menu order.
    pub const ALL: [BeatmapPolicy; 5] = [
        BeatmapPolicy::AllButStandard,
        BeatmapPolicy::StandardOnly,
        BeatmapPolicy::TaikoOnly,
        BeatmapPolicy::CatchOnly,
        BeatmapPolicy::ManiaOnly,
    ];

    /// Marker strings whose presence in a beatmap marks it for deletion.
    pub fn markers(&self) -> &'static [&'static str] {
        match self {
            BeatmapPolicy::AllButStandard => &["Mode: 2", "Mode: 3", "Mode: 4"],
            BeatmapPolicy::StandardOnly => &["Mode: 1"],
            BeatmapPolicy::TaikoOnly => &["Mode: 2"],
            BeatmapPolicy::CatchOnly => &["Mode: 3"],
            BeatmapPolicy::ManiaOnly => &["Mode: 4"],
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            BeatmapPolicy::AllButStandard => "Delete files of all modes except osu!standard.",
            BeatmapPolicy::StandardOnly => "Delete only standard mode files.",
            BeatmapPolicy::TaikoOnly => "Delete only taiko mode files.",
            BeatmapPolicy::CatchOnly => "Delete only catch mode files.",
            BeatmapPolicy::ManiaOnly => "Delete only mania mode files.",
        }
    }
}

/// How a worker decides whether to delete a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchMode {
    /// Delete when any marker is a substring of the file's text.
    Content { markers: Vec<String> },
    /// Delete every enumerated file.
    Extension,
}

/// Everything a worker needs to judge a file, built fresh for every pass.
#[derive(Debug, Clone)]
pub struct DeletionCriteria {
    pub mode: MatchMode,
    /// Files enumerated for the pass; in content mode also the "tracked"
    /// extension used for directory cleanup.
    pub pattern: FileTypePattern,
}

impl DeletionCriteria {
    pub fn content<S: Into<String>>(markers: impl IntoIterator<Item = S>, pattern: FileTypePattern) -> Self {
        Self {
            mode: MatchMode::Content {
                markers: markers.into_iter().map(Into::into).collect(),
            },
            pattern,
        }
    }

    pub fn extension(pattern: FileTypePattern) -> Self {
        Self {
            mode: MatchMode::Extension,
            pattern,
        }
    }

    /// Content criteria for a beatmap policy over the given beatmap pattern.
    pub fn for_beatmaps(policy: BeatmapPolicy, pattern: FileTypePattern) -> Self {
        Self::content(policy.markers().iter().copied(), pattern)
    }

    /// Markers in content mode, empty in extension mode.
    pub fn markers(&self) -> &[String] {
        match &self.mode {
            MatchMode::Content { markers } => markers,
            MatchMode::Extension => &[],
        }
    }

    /// True if `content` contains any marker. Never true in extension mode,
    /// where content is not consulted.
    pub fn matches_content(&self, content: &str) -> bool {
        self.markers().iter().any(|marker| content.contains(marker.as_str()))
    }
}

impl fmt::Display for DeletionCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.mode {
            MatchMode::Content { markers } => {
                let quoted: Vec<String> = markers.iter().map(|m| format!("\"{}\"", m)).collect();
                write!(f, "[{}] in {}", quoted.join(", "), self.pattern)
            }
            MatchMode::Extension => write!(f, "every {}", self.pattern),
        }
    }
}
