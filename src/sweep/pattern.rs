//! File type patterns used to select candidate files.
//!
//! A pattern is a set of extensions compiled into `*.ext` globs and matched
//! against file names only, ignoring ASCII case.

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use std::path::Path;

use super::error::SweepError;

/// Extensions inspected in content-match mode.
pub const BEATMAP_EXTENSIONS: &[&str] = &["osu"];

/// Extensions deleted unconditionally in extension-match mode.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "avi", "flv"];

/// Compiled extension filter.
#[derive(Debug, Clone)]
pub struct FileTypePattern {
    /// Compiled glob set for matching.
    glob_set: GlobSet,
    /// Normalized extensions (lowercase, no leading dot).
    extensions: Vec<String>,
}

impl FileTypePattern {
    /// Build a pattern from extensions such as `osu`, `.mp4` or `*.avi`.
    pub fn from_extensions<S: AsRef<str>>(extensions: &[S]) -> Result<Self, SweepError> {
        let mut builder = GlobSetBuilder::new();
        let mut normalized: Vec<String> = Vec::new();

        for raw in extensions {
            let ext = normalize_extension(raw.as_ref());
            if ext.is_empty() || normalized.contains(&ext) {
                continue;
            }
            let glob = GlobBuilder::new(&format!("*.{}", ext))
                .case_insensitive(true)
                .literal_separator(true)
                .build()
                .map_err(|e| SweepError::InvalidArguments {
                    message: format!("invalid extension '{}': {}", raw.as_ref(), e),
                })?;
            builder.add(glob);
            normalized.push(ext);
        }

        let glob_set = builder.build().map_err(|e| SweepError::InvalidArguments {
            message: format!("could not compile extension filter: {}", e),
        })?;

        Ok(Self {
            glob_set,
            extensions: normalized,
        })
    }

    /// The `*.osu` pattern.
    pub fn beatmaps() -> Self {
        Self::from_extensions(BEATMAP_EXTENSIONS).unwrap_or_else(|_| Self::empty())
    }

    /// The `*.mp4|*.avi|*.flv` pattern.
    pub fn videos() -> Self {
        Self::from_extensions(VIDEO_EXTENSIONS).unwrap_or_else(|_| Self::empty())
    }

    /// A pattern that matches nothing.
    pub fn empty() -> Self {
        Self {
            glob_set: GlobSet::empty(),
            extensions: Vec::new(),
        }
    }

    /// Check whether the final component of `path` carries one of the extensions.
    pub fn matches(&self, path: &Path) -> bool {
        match path.file_name() {
            Some(name) => self.glob_set.is_match(Path::new(name)),
            None => false,
        }
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }
}

impl std::fmt::Display for FileTypePattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let globs: Vec<String> = self.extensions.iter().map(|e| format!("*.{}", e)).collect();
        write!(f, "{}", globs.join("|"))
    }
}

fn normalize_extension(raw: &str) -> String {
    raw.trim()
        .trim_start_matches('*')
        .trim_start_matches('.')
        .to_ascii_lowercase()
}
