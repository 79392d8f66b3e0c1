//! Error types for the embed pipeline.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// A failure that aborts an embed run.
#[derive(Debug)]
pub enum EmbedError {
    /// Reading or writing one of the two files failed.
    Io {
        /// The file being accessed when the failure occurred.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// The source file has no embeddable lines (it is empty, or every line
    /// is a `//` comment).
    EmptySource {
        /// The offending source file.
        path: PathBuf,
    },
}

impl fmt::Display for EmbedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmbedError::Io { path, source } => {
                write!(f, "error accessing '{}': {}", path.display(), source)
            }
            EmbedError::EmptySource { path } => {
                write!(f, "'{}' has no embeddable lines", path.display())
            }
        }
    }
}

impl std::error::Error for EmbedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EmbedError::Io { source, .. } => Some(source),
            EmbedError::EmptySource { .. } => None,
        }
    }
}
