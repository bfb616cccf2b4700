use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::ImportError;

/// Broad file categories we handle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FileCategory {
    Pdf,
    PlainText,
    Unsupported,
}

impl FileCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::PlainText => "plain_text",
            Self::Unsupported => "unsupported",
        }
    }
}

/// Detect file format from magic bytes (NOT file extensions).
/// Magic bytes don't lie — extensions can be wrong.
pub fn detect_format(path: &Path) -> Result<FileCategory, ImportError> {
    let mut file = std::fs::File::open(path)?;
    let mut header = [0u8; 8];
    let bytes_read = file.read(&mut header)?;

    match &header[..bytes_read.min(4)] {
        // PDF: starts with %PDF
        [0x25, 0x50, 0x44, 0x46] => Ok(FileCategory::Pdf),
        _ if is_likely_text(path)? => Ok(FileCategory::PlainText),
        _ => Ok(FileCategory::Unsupported),
    }
}

/// Check if a file is likely plain text (valid UTF-8, mostly printable)
fn is_likely_text(path: &Path) -> Result<bool, ImportError> {
    let mut file = std::fs::File::open(path)?;
    let mut buffer = vec![0u8; 4096];
    let n = file.read(&mut buffer)?;
    buffer.truncate(n);

    if n == 0 {
        return Ok(false);
    }

    let Ok(text) = std::str::from_utf8(&buffer) else {
        return Ok(false);
    };

    // At least 80% printable characters (or whitespace)
    let printable = text
        .chars()
        .filter(|c| !c.is_control() || c.is_whitespace())
        .count();
    Ok(printable as f64 / text.chars().count().max(1) as f64 > 0.80)
}
