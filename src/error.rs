// Error type shared by both pipeline stages.

use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ImportError>;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("malformed quote document {path}: {source}")]
    Document {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

impl ImportError {
    pub(crate) fn read(path: &str, source: io::Error) -> Self {
        Self::Read {
            path: path.to_string(),
            source,
        }
    }

    pub(crate) fn write(path: &str, source: io::Error) -> Self {
        Self::Write {
            path: path.to_string(),
            source,
        }
    }
}
