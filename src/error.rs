use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Per-file failure classes surfaced while extracting text from one image.
///
/// The three variants exist only so each front-end can word its message;
/// every one of them means "skip this file and keep going".
#[derive(Error, Debug)]
pub enum OcrError {
    /// The file could not be opened or decoded as an image.
    #[error("Error opening image file: {0}")]
    ImageRead(#[from] image::ImageError),

    /// The OCR engine itself reported a failure (bad exit status, spawn
    /// failure, engine-side diagnostics).
    #[error("Tesseract error: {0}")]
    Engine(String),

    /// Anything else: temp-file I/O, non-UTF-8 engine output.
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// Directory-level failure classes for the batch scan.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Directory not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Permission denied to access directory: {}", .0.display())]
    PermissionDenied(PathBuf),

    #[error("An unexpected error occurred while processing directory: {0}")]
    Other(io::Error),
}

impl ScanError {
    /// Classify an I/O error raised while listing `path`.
    pub fn classify(path: &std::path::Path, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => ScanError::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => ScanError::PermissionDenied(path.to_path_buf()),
            _ => ScanError::Other(source),
        }
    }
}
