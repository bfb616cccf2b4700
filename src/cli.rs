//! CLI definition, tracing setup, and the batch command itself.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use crate::config::DEFAULT_OUTPUT_FILE;
use crate::pipeline::batch::{
    BatchReport, BatchRunner, BatchStatusEvent, CsvSink, JsonSink, ReportSink, NOT_FOUND,
};
use crate::pipeline::extraction::{ExtractedRecord, ExtractionRules, FieldExtractor};
use crate::pipeline::import::{scan_collection, FileDocumentLoader};

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// cvsift — pull contact details out of a folder of resumes.
#[derive(Parser)]
#[command(
    name = "cvsift",
    version,
    about = "Extract name, email, phone and graduation year from a folder of resumes.",
    long_about = None,
)]
pub struct Cli {
    /// Directory containing the resumes (.pdf and .txt).
    pub dir: PathBuf,

    /// Report file to write.
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    pub out: PathBuf,

    /// Report format.
    #[arg(long, value_enum, default_value_t = ReportFormat::Csv)]
    pub format: ReportFormat,

    /// JSON file overriding the built-in extraction rules.
    #[arg(long)]
    pub rules: Option<PathBuf>,

    /// Verbosity level (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the spinner, per-document output and summary, errors only.
    #[arg(short, long)]
    pub quiet: bool,
}

/// Report output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    Csv,
    Json,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = filter_directive(cli.quiet, cli.verbose);
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();
}

/// Log filter for the given flags. `--quiet` wins over `-v` and drops
/// logging to errors; an explicit `RUST_LOG` overrides both.
fn filter_directive(quiet: bool, verbose: u8) -> &'static str {
    if quiet {
        return "cvsift=error";
    }
    match verbose {
        0 => "cvsift=info",
        1 => "cvsift=debug",
        _ => "cvsift=trace",
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

pub fn run(cli: Cli) -> Result<()> {
    let rules = match &cli.rules {
        Some(path) => ExtractionRules::from_json_file(path)
            .with_context(|| format!("loading extraction rules from {}", path.display()))?,
        None => ExtractionRules::default(),
    };

    let documents = scan_collection(&cli.dir)?;
    if documents.is_empty() {
        println!("No .pdf or .txt files found in {}", cli.dir.display());
        return Ok(());
    }

    info!(
        collection = %cli.dir.display(),
        documents = documents.len(),
        "starting resume batch"
    );

    let runner = BatchRunner::new(FieldExtractor::new(rules), Box::new(FileDocumentLoader));

    let report = if cli.quiet {
        runner.run(&documents, None)
    } else {
        let progress = CliProgress::new();
        let progress_fn = |event: BatchStatusEvent| progress.handle(&event);
        let report = runner.run(&documents, Some(&progress_fn));
        progress.finish();
        report
    };

    let mut sink: Box<dyn ReportSink> = match cli.format {
        ReportFormat::Csv => Box::new(CsvSink::new(&cli.out)),
        ReportFormat::Json => Box::new(JsonSink::new(&cli.out)),
    };
    sink.write_report(&report)
        .with_context(|| format!("writing report to {}", cli.out.display()))?;

    info!(
        rows = report.records.len(),
        skipped = report.skipped.len(),
        "batch complete"
    );

    if !cli.quiet {
        print_summary(&report, &cli.out);
    }

    Ok(())
}

fn print_summary(report: &BatchReport, out: &Path) {
    println!();
    if !report.records.is_empty() {
        for record in &report.records {
            println!("  {}", record_line(record));
        }
        println!();
    }
    if !report.skipped.is_empty() {
        println!("  Skipped documents:");
        for skipped in &report.skipped {
            println!("    {}: {}", skipped.source_id, skipped.reason);
        }
        println!();
    }
    println!("  Resume report written!");
    println!("  Documents seen:  {}", report.documents_seen);
    println!("  Rows written:    {}", report.records.len());
    println!("  No fields found: {}", report.documents_empty);
    println!("  Skipped:         {}", report.skipped.len());
    println!("  Output:          {}", out.display());
    println!("  Time:            {:.1}s", report.duration_ms as f64 / 1000.0);
    println!();
}

/// One console line per report row, absent fields rendered the same way
/// as in the CSV.
fn record_line(record: &ExtractedRecord) -> String {
    let fields = &record.fields;
    format!(
        "File: {}, Name: {}, Email: {}, Phone: {}, Passout Year: {}",
        record.source_id,
        field_or_not_found(&fields.name),
        field_or_not_found(&fields.email),
        field_or_not_found(&fields.phone),
        field_or_not_found(&fields.graduation_year),
    )
}

fn field_or_not_found(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(NOT_FOUND)
}

// ---------------------------------------------------------------------------
// CLI progress display
// ---------------------------------------------------------------------------

/// Spinner fed by batch status events.
struct CliProgress {
    spinner: ProgressBar,
}

impl CliProgress {
    fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap()
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        Self { spinner }
    }

    fn handle(&self, event: &BatchStatusEvent) {
        match event {
            BatchStatusEvent::Started { document_count } => {
                self.spinner
                    .set_message(format!("Scanning {document_count} documents"));
            }
            BatchStatusEvent::Progress {
                completed,
                total,
                current_document,
            } => {
                self.spinner.set_message(format!(
                    "Extracting [{}/{total}] {current_document}",
                    completed + 1
                ));
            }
            BatchStatusEvent::Completed { .. } => {}
        }
    }

    fn finish(&self) {
        self.spinner.finish_and_clear();
    }
}
