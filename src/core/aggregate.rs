// logtally - core/aggregate.rs
//
// Aggregation over parsed records: per-level counts and level filtering.
// Core layer: pure logic, no I/O.

use crate::core::model::{Level, LevelCounts, LogRecord};

/// Count records per severity level.
///
/// Levels not present in the input do not appear in the output map, and
/// input order does not affect the result.
pub fn count_by_level(records: &[LogRecord]) -> LevelCounts {
    let mut counts = LevelCounts::new();
    for record in records {
        *counts.entry(record.level).or_insert(0) += 1;
    }
    counts
}

/// Select the records matching a requested level, preserving input order.
///
/// The request is matched case-insensitively against the fixed token
/// set; a request outside that set selects nothing. An empty result is
/// not an error.
pub fn filter_by_level<'a>(records: &'a [LogRecord], requested: &str) -> Vec<&'a LogRecord> {
    match Level::from_request(requested) {
        Some(level) => records.iter().filter(|r| r.level == level).collect(),
        None => Vec::new(),
    }
}
