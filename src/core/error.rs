//! Crate error type.
//!
//! Searching never fails: an unsolvable problem yields `None`. Errors only
//! come from loading and parsing problem, game and configuration inputs.

use std::path::PathBuf;

/// Errors raised while loading or parsing search inputs.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown search strategy '{0}'")]
    UnknownStrategy(String),

    #[error("unknown game-tree algorithm '{0}'")]
    UnknownAlgorithm(String),

    #[error("invalid parking layout: {0}")]
    InvalidLayout(String),

    #[error("invalid graph: {0}")]
    InvalidGraph(String),

    #[error("invalid game tree: {0}")]
    InvalidTree(String),

    #[error("invalid configuration: {0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Read a whole file, attaching the path to any I/O failure.
pub(crate) fn read_file(path: &std::path::Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| Error::FileRead {
        path: path.to_path_buf(),
        source,
    })
}
