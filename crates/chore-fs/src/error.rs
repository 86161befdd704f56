use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {path}: {source}")]
    Read {
        path:   PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path:   PathBuf,
        source: std::io::Error,
    },

    #[error("{path} is not valid UTF-8 text")]
    InvalidUtf8 { path: PathBuf },

    #[error("invalid line range {start}..={end}: lines are 1-based and start must not exceed end")]
    InvalidRange { start: usize, end: usize },

    #[error("line {end} is out of range: file has {total} lines")]
    OutOfRange { end: usize, total: usize },

    #[error("line {line} does not match /{pattern}/: {content:?}")]
    BoundaryMismatch {
        line:    usize,
        pattern: String,
        content: String,
    },

    #[error("invalid boundary pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
