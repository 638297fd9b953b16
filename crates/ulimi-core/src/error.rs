//! Error types for ulimi-core

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The language code matched neither model table.
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// A bundle name that does not name any known pipeline bundle.
    #[error("Unknown pipeline bundle: {0}")]
    UnknownBundle(String),

    /// Failure from the HuggingFace Hub client.
    #[error("HuggingFace Hub error: {0}")]
    HfHubError(String),

    /// Non-success HTTP status from the pipeline weight host.
    #[error("HTTP {status} for {url}")]
    DownloadFailed {
        url: String,
        status: reqwest::StatusCode,
    },

    /// A hub repository's vocab.json could not be turned into labels.
    #[error("Invalid vocabulary in {path:?}: {reason}")]
    InvalidVocab { path: PathBuf, reason: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
