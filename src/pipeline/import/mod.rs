pub mod format;
pub mod loader;

pub use format::*;
pub use loader::*;

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("File too large: {size_mb:.1}MB exceeds {max_mb}MB limit")]
    FileTooLarge { size_mb: f64, max_mb: u64 },

    #[error("PDF parsing failed: {0}")]
    PdfParsing(String),

    #[error("File is not valid UTF-8 text")]
    NotUtf8,

    #[error("Document contains no text")]
    EmptyDocument,

    #[error("Cannot read resume collection at {}: {reason}", .path.display())]
    CollectionUnavailable { path: PathBuf, reason: String },
}
