use std::path::{Path, PathBuf};

use tracing::debug;

use super::format::{detect_format, FileCategory};
use super::ImportError;
use crate::config::{MAX_FILE_SIZE_BYTES, SUPPORTED_EXTENSIONS};

/// Turns one document on disk into plain text for field extraction.
///
/// Implementations must be safe to share across threads. The batch runner
/// owns a boxed loader so tests can substitute an in-memory one.
pub trait DocumentLoader: Send + Sync {
    fn load_text(&self, path: &Path) -> Result<String, ImportError>;
}

/// Loader for real files: sniffs the format from content, then pulls the
/// text layer out of PDFs or reads text files whole.
pub struct FileDocumentLoader;

impl DocumentLoader for FileDocumentLoader {
    fn load_text(&self, path: &Path) -> Result<String, ImportError> {
        let size = std::fs::metadata(path)?.len();
        if size == 0 {
            return Err(ImportError::EmptyDocument);
        }
        if size > MAX_FILE_SIZE_BYTES {
            return Err(ImportError::FileTooLarge {
                size_mb: size as f64 / (1024.0 * 1024.0),
                max_mb: MAX_FILE_SIZE_BYTES / (1024 * 1024),
            });
        }

        let category = detect_format(path)?;
        debug!(
            file = %path.display(),
            format = category.as_str(),
            "Detected document format"
        );

        let text = match category {
            FileCategory::Pdf => extract_pdf_text(path)?,
            FileCategory::PlainText => read_text_file(path)?,
            FileCategory::Unsupported => {
                return Err(ImportError::UnsupportedFormat(
                    "not a PDF or text file".to_string(),
                ))
            }
        };

        if text.trim().is_empty() {
            return Err(ImportError::EmptyDocument);
        }
        Ok(text)
    }
}

fn extract_pdf_text(path: &Path) -> Result<String, ImportError> {
    let bytes = std::fs::read(path)?;
    let pages = pdf_extract::extract_text_from_mem_by_pages(&bytes)
        .map_err(|e| ImportError::PdfParsing(e.to_string()))?;
    Ok(pages.join("\n"))
}

fn read_text_file(path: &Path) -> Result<String, ImportError> {
    let bytes = std::fs::read(path)?;
    String::from_utf8(bytes).map_err(|_| ImportError::NotUtf8)
}

/// Enumerate the resume files in a collection directory, sorted by path so
/// report rows come out in a stable order. Entries with other extensions
/// are ignored without comment; an empty collection is not an error.
pub fn scan_collection(dir: &Path) -> Result<Vec<PathBuf>, ImportError> {
    let unavailable = |e: std::io::Error| ImportError::CollectionUnavailable {
        path: dir.to_path_buf(),
        reason: e.to_string(),
    };

    let mut documents = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(unavailable)? {
        let path = entry.map_err(unavailable)?.path();
        if !path.is_file() {
            continue;
        }
        let supported = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()));
        if supported {
            documents.push(path);
        }
    }
    documents.sort();
    Ok(documents)
}
