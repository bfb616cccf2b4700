//! BatchRunner — walks a resume collection and builds the report.
//!
//! Runs sequentially in the order documents are given. A document that
//! cannot be decoded is recorded as skipped and never takes the rest of
//! the batch down with it.

use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{debug, warn};

use super::types::{BatchReport, BatchStatusEvent, SkippedDocument};
use crate::pipeline::extraction::{ExtractedRecord, FieldExtractor};
use crate::pipeline::import::DocumentLoader;

pub struct BatchRunner {
    extractor: FieldExtractor,
    loader: Box<dyn DocumentLoader>,
}

impl BatchRunner {
    pub fn new(extractor: FieldExtractor, loader: Box<dyn DocumentLoader>) -> Self {
        Self { extractor, loader }
    }

    /// Process every document and build the report. Never fails as a
    /// whole: decode errors become skip entries, and extraction itself
    /// cannot fail.
    pub fn run(
        &self,
        documents: &[PathBuf],
        progress_fn: Option<&dyn Fn(BatchStatusEvent)>,
    ) -> BatchReport {
        let start = Instant::now();

        if documents.is_empty() {
            return BatchReport::empty();
        }

        let total = documents.len() as u32;

        if let Some(progress) = progress_fn {
            progress(BatchStatusEvent::Started {
                document_count: total,
            });
        }

        let mut report = BatchReport::empty();

        for (i, path) in documents.iter().enumerate() {
            let source_id = source_id_for(path);

            if let Some(progress) = progress_fn {
                progress(BatchStatusEvent::Progress {
                    completed: i as u32,
                    total,
                    current_document: source_id.clone(),
                });
            }

            report.documents_seen += 1;

            let text = match self.loader.load_text(path) {
                Ok(text) => text,
                Err(e) => {
                    warn!(
                        source_id = %source_id,
                        error = %e,
                        "Skipping document: could not decode"
                    );
                    report.skipped.push(SkippedDocument {
                        source_id,
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

            let fields = self.extractor.extract(&text);
            if fields.has_any_field() {
                report.records.push(ExtractedRecord::new(source_id, fields));
            } else {
                debug!(source_id = %source_id, "No fields found, leaving document out of the report");
                report.documents_empty += 1;
            }
        }

        report.duration_ms = start.elapsed().as_millis() as u64;

        if let Some(progress) = progress_fn {
            progress(BatchStatusEvent::Completed {
                records_found: report.records.len() as u32,
                skipped: report.skipped.len() as u32,
                duration_ms: report.duration_ms,
            });
        }

        report
    }
}

/// Display identity of a document: its file name, falling back to the
/// whole path when there is none.
fn source_id_for(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
