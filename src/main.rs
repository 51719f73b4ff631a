//! CLI entry point for the student grade reporter.
//!
//! Loads a roster of student names and test scores, computes per-student
//! averages and letter grades, and prints the formatted class report.

use anyhow::Result;
use clap::Parser;
use grade_reporter::grade::assign_grades;
use grade_reporter::loader::load_roster;
use grade_reporter::report::{ReportLayout, log_summary_json, print_report};
use grade_reporter::stats::{compute_averages, summarize};
use grade_reporter::types::{ClassAveragePolicy, DEFAULT_MAX_RECORDS};
use std::ffi::OsStr;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{error, info};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "grade_reporter")]
#[command(about = "Generates a formatted grade report from a student roster", long_about = None)]
struct Cli {
    /// Path to the roster file; prompted for on stdin when omitted
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Maximum number of student records to load
    #[arg(short, long, default_value_t = DEFAULT_MAX_RECORDS)]
    max_records: usize,

    /// Divide the class average by the roster capacity instead of the loaded
    /// record count, matching the legacy report
    #[arg(long, default_value_t = false)]
    legacy_class_average: bool,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/grade_reporter.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("grade_reporter.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    let path = match cli.file {
        Some(path) => path,
        None => prompt_for_filename()?,
    };

    let policy = if cli.legacy_class_average {
        ClassAveragePolicy::LegacyFixedCapacity(cli.max_records)
    } else {
        ClassAveragePolicy::LoadedCount
    };

    let mut records = match load_roster(&path, cli.max_records) {
        Ok(records) => records,
        Err(e) => {
            // An unreadable roster is reported but still exits cleanly.
            error!(path = %path.display(), error = %e, "Roster load failed");
            eprintln!("\nError opening file: {}\n", path.display());
            return Ok(());
        }
    };

    info!(path = %path.display(), count = records.len(), "Roster loaded");

    compute_averages(&mut records);
    assign_grades(&mut records);

    let summary = summarize(&records, policy);
    log_summary_json(&summary)?;

    print_report(&records, &summary, &ReportLayout::default());

    Ok(())
}

/// Prompts for a roster path on stdout and reads one token from stdin.
fn prompt_for_filename() -> Result<PathBuf> {
    print!("Enter the name of your data file: ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;

    let token = line.split_whitespace().next().unwrap_or("");
    Ok(PathBuf::from(token))
}
