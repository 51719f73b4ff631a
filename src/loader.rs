//! Roster file parser.
//!
//! A roster is plain whitespace-delimited text made of repeating groups of one
//! last name followed by five numeric scores, with no header or record count.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::types::{SCORES_PER_STUDENT, StudentRecord};

/// Reads up to `max_records` student records from the roster file at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read. Malformed data
/// inside the file is not an error: loading stops at the first group whose
/// score tokens do not parse, keeping every record read before it.
pub fn load_roster(path: &Path, max_records: usize) -> Result<Vec<StudentRecord>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to open roster file {}", path.display()))?;

    Ok(parse_roster(&content, max_records))
}

enum GroupError {
    Malformed(String),
    Truncated,
}

/// Parses whitespace-delimited roster text into a bounded record vector.
///
/// Complete groups past `max_records` are counted and skipped rather than
/// silently overrunning the bound.
pub fn parse_roster(content: &str, max_records: usize) -> Vec<StudentRecord> {
    let mut records = Vec::new();
    let mut tokens = content.split_whitespace();
    let mut skipped = 0usize;

    while let Some(name) = tokens.next() {
        if records.len() == max_records {
            skipped += 1;
            for _ in 0..SCORES_PER_STUDENT {
                tokens.next();
            }
            continue;
        }

        match read_scores(&mut tokens) {
            Ok(scores) => records.push(StudentRecord::new(name.to_string(), scores)),
            Err(GroupError::Malformed(token)) => {
                warn!(name, token = %token, "Malformed score token, stopping load");
                break;
            }
            Err(GroupError::Truncated) => {
                warn!(name, "Incomplete trailing record dropped, stopping load");
                break;
            }
        }
    }

    if skipped > 0 {
        warn!(skipped, max_records, "Roster exceeds capacity, extra records ignored");
    }

    debug!(count = records.len(), "Roster parsed");
    records
}

fn read_scores<'a, I>(tokens: &mut I) -> std::result::Result<[f64; SCORES_PER_STUDENT], GroupError>
where
    I: Iterator<Item = &'a str>,
{
    let mut scores = [0.0; SCORES_PER_STUDENT];
    for slot in scores.iter_mut() {
        let token = tokens.next().ok_or(GroupError::Truncated)?;
        *slot = token
            .parse()
            .map_err(|_| GroupError::Malformed(token.to_string()))?;
    }
    Ok(scores)
}
