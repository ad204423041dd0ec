use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = ConvertError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Failed to open file '{}': {source}", .path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed movetext: {0}")]
    MalformedMovetext(String),

    /// `ply` is 1-based and counts half-moves from the start position.
    #[error("Illegal move '{san}' at ply {ply}: {reason}")]
    IllegalMove {
        ply: usize,
        san: String,
        reason: String,
    },

    #[error("Invalid compression value '{0}'. Supported values: 'auto', 'plain' or 'zstd'.")]
    InvalidCompression(String),

    #[error("Invalid input pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("No input files match '{0}'")]
    NoInputFiles(String),

    #[error("Failed to write failure report: {0}")]
    Report(#[from] serde_json::Error),
}

impl ConvertError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Errors that concern a single game rather than the whole run.
    pub fn is_per_game(&self) -> bool {
        matches!(
            self,
            Self::MalformedMovetext(_) | Self::IllegalMove { .. }
        )
    }
}
