//! Average computation and class-wide summary statistics.

use tracing::debug;

use crate::types::{ClassAveragePolicy, ClassSummary, StudentRecord};

/// Computes the arithmetic mean of a slice of values. Returns 0.0 for empty input.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sets each record's average to the mean of its five scores, in score order.
pub fn compute_averages(records: &mut [StudentRecord]) {
    for record in records.iter_mut() {
        record.average = mean(&record.scores);
    }
}

/// Index of the record with the highest average.
///
/// Strict comparison against the running best, so the first occurrence wins
/// ties. `None` for an empty roster.
pub fn find_best(records: &[StudentRecord]) -> Option<usize> {
    if records.is_empty() {
        return None;
    }
    let mut best = 0;
    for i in 1..records.len() {
        if records[i].average > records[best].average {
            best = i;
        }
    }
    Some(best)
}

/// Index of the record with the lowest average. First occurrence wins ties.
pub fn find_poorest(records: &[StudentRecord]) -> Option<usize> {
    if records.is_empty() {
        return None;
    }
    let mut poorest = 0;
    for i in 1..records.len() {
        if records[i].average < records[poorest].average {
            poorest = i;
        }
    }
    Some(poorest)
}

/// Folds the per-record averages into a [`ClassSummary`].
///
/// The class average divides the sum of record averages by the divisor the
/// policy selects; an empty roster yields 0.0 either way.
pub fn summarize(records: &[StudentRecord], policy: ClassAveragePolicy) -> ClassSummary {
    let sum: f64 = records.iter().map(|r| r.average).sum();

    let divisor = match policy {
        ClassAveragePolicy::LoadedCount => records.len(),
        ClassAveragePolicy::LegacyFixedCapacity(capacity) => capacity,
    };

    let class_average = if divisor == 0 {
        0.0
    } else {
        sum / divisor as f64
    };

    let summary = ClassSummary {
        record_count: records.len(),
        class_average,
        best: find_best(records),
        poorest: find_poorest(records),
    };

    debug!(
        record_count = summary.record_count,
        class_average = summary.class_average,
        "Summary computed"
    );

    summary
}
