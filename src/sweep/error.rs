// Centralized error handling for the sweep utility
// Only configuration, argument and console failures are fatal; file-level
// failures during a pass never surface as errors.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Main error type for the sweep utility
#[derive(Debug)]
pub enum SweepError {
    /// Explicitly requested config file does not exist
    ConfigNotFound { path: PathBuf },
    /// Config file exists but is not valid TOML for our schema
    ConfigParse { path: PathBuf, reason: String },

    /// Command line combination that cannot be honored
    InvalidArguments { message: String },

    /// Console or filesystem I/O outside of a pass
    Io { path: Option<PathBuf>, operation: String, source: io::Error },
}

impl fmt::Display for SweepError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SweepError::ConfigNotFound { path } => {
                writeln!(f, "Config file not found: {}", path.display())?;
                write!(f, "Suggestion: Check the --config path or remove the flag to use defaults")
            }
            SweepError::ConfigParse { path, reason } => {
                writeln!(f, "Error parsing config {}: {}", path.display(), reason)?;
                write!(f, "Suggestion: Check the TOML syntax and key names in the config file")
            }
            SweepError::InvalidArguments { message } => {
                writeln!(f, "Invalid arguments: {}", message)?;
                write!(f, "Suggestion: Run with --help to see usage information")
            }
            SweepError::Io { path, operation, source } => {
                if let Some(p) = path {
                    writeln!(f, "I/O error while {} {}: {}", operation, p.display(), source)?;
                } else {
                    writeln!(f, "I/O error while {}: {}", operation, source)?;
                }
                write!(f, "Suggestion: Check file permissions and that the console is interactive")
            }
        }
    }
}

impl std::error::Error for SweepError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SweepError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl SweepError {
    /// Wrap an io::Error with the operation that failed and an optional path
    pub fn from_io_error(err: io::Error, operation: &str, path: Option<PathBuf>) -> Self {
        SweepError::Io {
            path,
            operation: operation.to_string(),
            source: err,
        }
    }
}

impl From<io::Error> for SweepError {
    fn from(err: io::Error) -> Self {
        SweepError::from_io_error(err, "unknown operation", None)
    }
}
