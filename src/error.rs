use std::path::PathBuf;

use thiserror::Error;

/// Failures outside the analysis pipeline (reading input, exporting results).
/// The pipeline itself cannot fail.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No analyzable .txt input found at {0}")]
    NoInput(String),

    #[error("Nothing to analyze: input is empty")]
    EmptyInput,

    #[error("JSON export failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
