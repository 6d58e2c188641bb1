use std::path::PathBuf;
use thiserror::Error;

/// Failures while loading or persisting style documents.
///
/// A registry lookup miss is not an error; `StyleRegistry::get` returns `None`.
#[derive(Debug, Error)]
pub enum StyleError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON style document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid CSV style document: {0}")]
    Csv(#[from] csv::Error),

    /// Criteria identifiers are dot-separated, e.g. `std.code.lines.total`.
    #[error("invalid criteria `{0}`: expected dot-separated segments of [A-Za-z0-9_]")]
    InvalidCriteria(String),

    #[error("unsupported style document format: {0}")]
    UnsupportedFormat(String),

    #[error("style document not found: {}", .0.display())]
    MissingStyles(PathBuf),
}

pub type Result<T> = std::result::Result<T, StyleError>;
