use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while writing or reading back the specification files.
#[derive(Debug, Error)]
pub enum EmitError {
    #[error("failed to write {}: {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read table from {}: {source}", path.display())]
    TableRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl EmitError {
    pub(crate) fn file_write(path: impl Into<PathBuf>, source: impl Into<io::Error>) -> Self {
        Self::FileWrite {
            path: path.into(),
            source: source.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, EmitError>;
