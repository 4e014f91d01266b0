//! Showcase error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShowcaseError {
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid config {path}: {reason}")]
    ConfigParse { path: String, reason: String },

    #[error("invalid colour {0:?} (expected #RRGGBB)")]
    InvalidColor(String),

    #[error("unsupported code distance: {0} (expected 3, 5 or 11)")]
    UnknownDistance(u8),

    #[error("unknown section: {0}")]
    UnknownSection(String),

    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ShowcaseResult<T> = Result<T, ShowcaseError>;
