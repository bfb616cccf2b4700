//! Core types for a resume batch run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::pipeline::extraction::ExtractedRecord;

// ═══════════════════════════════════════════
// Batch Identity
// ═══════════════════════════════════════════

pub fn new_batch_id() -> String {
    Uuid::new_v4().to_string()
}

// ═══════════════════════════════════════════
// Batch Report (output of BatchRunner)
// ═══════════════════════════════════════════

/// A document that could not be decoded into text, with the reason it
/// was left out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedDocument {
    pub source_id: String,
    pub reason: String,
}

/// Everything one batch run produced, rows in document order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub batch_id: String,
    pub started_at: DateTime<Utc>,
    /// One record per document with at least one extracted field.
    pub records: Vec<ExtractedRecord>,
    /// Documents that failed to decode.
    pub skipped: Vec<SkippedDocument>,
    pub documents_seen: u32,
    /// Documents that decoded fine but yielded no fields at all.
    pub documents_empty: u32,
    pub duration_ms: u64,
}

impl BatchReport {
    pub fn empty() -> Self {
        Self {
            batch_id: new_batch_id(),
            started_at: Utc::now(),
            records: Vec::new(),
            skipped: Vec::new(),
            documents_seen: 0,
            documents_empty: 0,
            duration_ms: 0,
        }
    }
}

// ═══════════════════════════════════════════
// Batch Status Events
// ═══════════════════════════════════════════

/// Event emitted during batch processing for progress display.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BatchStatusEvent {
    Started {
        document_count: u32,
    },
    Progress {
        completed: u32,
        total: u32,
        current_document: String,
    },
    Completed {
        records_found: u32,
        skipped: u32,
        duration_ms: u64,
    },
}
