use std::path::PathBuf;
use thiserror::Error;

/// The main error type for yoloprep operations.
///
/// Only run-level setup failures surface here. Per-image failures during
/// conversion are caught at the item boundary, logged, and aggregated into
/// the conversion report instead.
#[derive(Debug, Error)]
pub enum YoloPrepError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Source directory does not exist: {path}")]
    SourceMissing { path: PathBuf },

    #[error("Failed to create directory {path}: {source}")]
    OutputSetup {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid category list: {message}")]
    InvalidCategories { message: String },

    #[error("Invalid split fractions: {message}")]
    InvalidFractions { message: String },

    #[error("Manifest field '{field}' was assigned twice")]
    DuplicateManifestField { field: &'static str },

    #[error("Manifest field '{field}' was never assigned")]
    MissingManifestField { field: &'static str },

    #[error("Failed to write manifest to {path}: {source}")]
    ManifestWrite {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to read archive {path}: {source}")]
    ArchiveRead {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("Invalid entry in archive {path}: {message}")]
    ArchiveEntry { path: PathBuf, message: String },
}
