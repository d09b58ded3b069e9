//! Errors raised while fetching post documents

use std::path::PathBuf;
use thiserror::Error;

/// A single document could not be turned into raw text
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path:?} is not valid UTF-8: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("document not found: {0}")]
    NotFound(String),

    #[error("document {path} is unavailable: {reason}")]
    Unavailable { path: String, reason: String },
}
