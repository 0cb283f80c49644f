use std::path::PathBuf;

/// Errors raised while reading, selecting or sampling bounding boxes.
#[derive(thiserror::Error, Debug)]
pub enum BbGtError {
    /// The annotation file or directory does not exist.
    #[error("Path not found: {0}")]
    NotFound(PathBuf),

    /// The annotation file declares a format version this crate cannot read.
    #[error("Unsupported annotation format version: {0}")]
    UnsupportedVersion(u32),

    /// Reading or writing an annotation file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A required configuration field is missing.
    #[error("Missing or invalid configuration: {0}")]
    Config(String),

    /// Input feature width disagrees with the reference data of a kNN model.
    #[error("Dimension mismatch: expected {expected} features, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// An annotation line could not be parsed.
    #[error("Malformed annotation on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Failure in the patch resize pipeline.
    #[error("Image operation failed: {0}")]
    ImageOps(#[from] anyhow::Error),

    #[error("Invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),
}
