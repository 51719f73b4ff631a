//! Data types shared across the grading pipeline.

use serde::Serialize;

/// Number of test scores per student record.
pub const SCORES_PER_STUDENT: usize = 5;

/// Default maximum number of records loaded from a roster file.
pub const DEFAULT_MAX_RECORDS: usize = 10;

/// One student's roster entry plus the values derived from it.
///
/// `average` and `grade` hold placeholder values until the aggregation and
/// classification stages have run.
#[derive(Debug, Clone, Serialize)]
pub struct StudentRecord {
    pub last_name: String,
    pub scores: [f64; SCORES_PER_STUDENT],
    pub average: f64,
    pub grade: char,
}

impl StudentRecord {
    pub fn new(last_name: String, scores: [f64; SCORES_PER_STUDENT]) -> Self {
        Self {
            last_name,
            scores,
            average: 0.0,
            grade: ' ',
        }
    }
}

/// Divisor used when computing the class average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ClassAveragePolicy {
    /// Divide by the number of records actually loaded.
    LoadedCount,
    /// Divide by the roster capacity, understating the average for short
    /// rosters. Kept for compatibility with the legacy report.
    LegacyFixedCapacity(usize),
}

/// Class-wide results computed from the loaded records.
#[derive(Debug, Serialize)]
pub struct ClassSummary {
    pub record_count: usize,
    pub class_average: f64,
    /// Index of the best-performing record, `None` for an empty roster.
    pub best: Option<usize>,
    /// Index of the poorest-performing record, `None` for an empty roster.
    pub poorest: Option<usize>,
}
