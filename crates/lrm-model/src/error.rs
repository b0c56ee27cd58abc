use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LrmError {
    #[error("input file not found: {0}")]
    InputNotFound(PathBuf),
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path}: malformed CSV: {source}")]
    MalformedCsv {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

pub type Result<T> = std::result::Result<T, LrmError>;
