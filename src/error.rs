use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for histplot operations.
pub type Result<T> = std::result::Result<T, PlotError>;

/// Errors that can occur while loading or plotting a histogram.
#[derive(Debug, Error)]
pub enum PlotError {
    /// The input file does not exist or cannot be opened.
    #[error("Could not open {}: {source}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading failed after the file was opened.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A line of the input is not a pair of numbers.
    #[error("Bad data at line {line}: {reason}")]
    DataFormat { line: usize, reason: String },

    /// The plotting backend failed (including writing the image).
    #[error("Could not render plot: {0}")]
    Render(String),
}

impl PlotError {
    pub fn file_open(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileOpen {
            path: path.into(),
            source,
        }
    }

    pub fn data_format(line: usize, reason: impl Into<String>) -> Self {
        Self::DataFormat {
            line,
            reason: reason.into(),
        }
    }
}
