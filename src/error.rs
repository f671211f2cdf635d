use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Every way a scan can fail. All of them abort the run.
#[derive(Debug, Error)]
pub enum StatsError {
    #[error("scan root {0:?} does not exist or is not a directory")]
    RootNotFound(PathBuf),

    #[error("invalid glob pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("failed to walk {path:?}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{path:?} is not valid UTF-8 text (use --lossy to decode as Windows-1252)")]
    Decode { path: PathBuf },

    #[error("failed to write report: {0}")]
    Write(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, StatsError>;
