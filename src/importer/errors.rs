use std::io;
use std::path::Path;

use thiserror::Error;

/// Failures around an import run: reading inputs and writing the export.
///
/// Problems inside the uploaded transactions file are never reported here;
/// they end up as `ImportError`s in the `ImportResult`.
#[derive(Debug, Error)]
pub enum ImporterError {
    #[error("Unable to read [{path}]: {source}")]
    Read {
        path: String,
        source: io::Error
    },
    #[error("Client list is missing the [{column}] column")]
    MissingClientColumn {
        column: &'static str
    },
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error)
}

impl ImporterError {
    pub fn read(path: &Path, source: io::Error) -> Self {
        Self::Read {
            path: path.display().to_string(),
            source
        }
    }
}
