//! Report sinks — write a finished batch report to disk.

use std::io::Write;
use std::path::PathBuf;

use thiserror::Error;

use super::types::BatchReport;

/// Cell value used when a field was not extracted.
pub const NOT_FOUND: &str = "Not found";

/// Column order of the tabular report.
pub const CSV_HEADERS: [&str; 5] = ["Filename", "Name", "Email", "Phone", "Passout Year"];

#[derive(Error, Debug)]
pub enum SinkError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Writes a finished report somewhere useful.
pub trait ReportSink: Send + Sync {
    fn write_report(&mut self, report: &BatchReport) -> Result<(), SinkError>;
}

/// One CSV row per record, absent fields rendered as "Not found".
/// Skipped documents never get a row.
pub struct CsvSink {
    path: PathBuf,
}

impl CsvSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ReportSink for CsvSink {
    fn write_report(&mut self, report: &BatchReport) -> Result<(), SinkError> {
        let mut writer = csv::Writer::from_path(&self.path)?;
        writer.write_record(CSV_HEADERS)?;
        for record in &report.records {
            let fields = &record.fields;
            writer.write_record([
                record.source_id.as_str(),
                cell(&fields.name),
                cell(&fields.email),
                cell(&fields.phone),
                cell(&fields.graduation_year),
            ])?;
        }
        writer.flush()?;
        Ok(())
    }
}

fn cell(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or(NOT_FOUND)
}

/// The whole report as pretty JSON, skip list and counters included,
/// for downstream tooling.
pub struct JsonSink {
    path: PathBuf,
}

impl JsonSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ReportSink for JsonSink {
    fn write_report(&mut self, report: &BatchReport) -> Result<(), SinkError> {
        let file = std::fs::File::create(&self.path)?;
        let mut writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, report)?;
        writeln!(writer)?;
        // Flush here so a failed write surfaces as an error instead of
        // being swallowed by the buffer's drop.
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::extraction::{ExtractedFields, ExtractedRecord};

    fn make_report(records: Vec<ExtractedRecord>) -> BatchReport {
        let mut report = BatchReport::empty();
        report.documents_seen = records.len() as u32;
        report.records = records;
        report
    }

    #[test]
    fn csv_has_exact_header_row() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        CsvSink::new(&path).write_report(&make_report(vec![])).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content.lines().next(),
            Some("Filename,Name,Email,Phone,Passout Year")
        );
    }

    #[test]
    fn absent_fields_render_as_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let report = make_report(vec![ExtractedRecord::new(
            "resume.txt",
            ExtractedFields {
                name: Some("John Smith".to_string()),
                ..Default::default()
            },
        )]);
        CsvSink::new(&path).write_report(&report).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let row = content.lines().nth(1).unwrap();
        assert_eq!(row, "resume.txt,John Smith,Not found,Not found,Not found");
    }

    #[test]
    fn fields_with_commas_are_quoted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let report = make_report(vec![ExtractedRecord::new(
            "resume.txt",
            ExtractedFields {
                name: Some("Smith, John".to_string()),
                ..Default::default()
            },
        )]);
        CsvSink::new(&path).write_report(&report).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"Smith, John\""));
    }

    #[test]
    fn one_row_per_record_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let report = make_report(vec![
            ExtractedRecord::new(
                "a.pdf",
                ExtractedFields {
                    email: Some("a@example.com".to_string()),
                    ..Default::default()
                },
            ),
            ExtractedRecord::new(
                "b.pdf",
                ExtractedFields {
                    email: Some("b@example.com".to_string()),
                    ..Default::default()
                },
            ),
        ]);
        CsvSink::new(&path).write_report(&report).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let rows: Vec<_> = content.lines().skip(1).collect();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].starts_with("a.pdf,"));
        assert!(rows[1].starts_with("b.pdf,"));
    }

    #[test]
    #[cfg(target_os = "linux")]
    fn csv_sink_surfaces_full_disk_as_error() {
        let report = make_report(vec![ExtractedRecord::new(
            "resume.txt",
            ExtractedFields {
                name: Some("John Smith".to_string()),
                ..Default::default()
            },
        )]);
        let err = CsvSink::new("/dev/full").write_report(&report).unwrap_err();
        assert!(matches!(err, SinkError::Io(_)), "got {err:?}");
    }

    #[test]
    #[cfg(target_os = "linux")]
    fn json_sink_surfaces_full_disk_as_error() {
        // The report is smaller than the write buffer, so the failure only
        // shows up at flush time.
        let report = make_report(vec![ExtractedRecord::new(
            "resume.txt",
            ExtractedFields {
                name: Some("John Smith".to_string()),
                ..Default::default()
            },
        )]);
        let err = JsonSink::new("/dev/full").write_report(&report).unwrap_err();
        assert!(matches!(err, SinkError::Io(_)), "got {err:?}");
    }

    #[test]
    fn json_report_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let report = make_report(vec![ExtractedRecord::new(
            "cv.pdf",
            ExtractedFields {
                phone: Some("555-123-4567".to_string()),
                ..Default::default()
            },
        )]);
        JsonSink::new(&path).write_report(&report).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let back: BatchReport = serde_json::from_str(&content).unwrap();
        assert_eq!(back.batch_id, report.batch_id);
        assert_eq!(back.records.len(), 1);
        assert_eq!(back.records[0].fields.phone.as_deref(), Some("555-123-4567"));
    }
}
