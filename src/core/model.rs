// logtally - core/model.rs
//
// Core data model types. Pure data definitions with no I/O.
// These types are the shared vocabulary across all layers.

use std::collections::BTreeMap;
use std::fmt;

// =============================================================================
// Severity level
// =============================================================================

/// The fixed set of severity levels a log line may carry.
///
/// Anything outside these four tokens is rejected at parse time, so a
/// malformed level can never enter the counts. Variant order matches the
/// lexicographic order of the uppercase tokens (DEBUG < ERROR < INFO <
/// WARNING); ordered maps keyed by `Level` therefore already iterate in
/// the row order the count table requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Error,
    Info,
    Warning,
}

impl Level {
    /// Returns all variants in token order.
    pub fn all() -> &'static [Level] {
        &[Level::Debug, Level::Error, Level::Info, Level::Warning]
    }

    /// The exact uppercase token as it appears in log lines.
    pub fn token(&self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Error => "ERROR",
            Level::Info => "INFO",
            Level::Warning => "WARNING",
        }
    }

    /// Case-sensitive exact match against the four tokens.
    ///
    /// Used by the parser: log lines must carry the uppercase literal.
    pub fn from_token(raw: &str) -> Option<Level> {
        match raw {
            "DEBUG" => Some(Level::Debug),
            "ERROR" => Some(Level::Error),
            "INFO" => Some(Level::Info),
            "WARNING" => Some(Level::Warning),
            _ => None,
        }
    }

    /// Case-insensitive match for user-supplied level requests.
    ///
    /// Returns `None` for anything outside the fixed set; the caller
    /// treats that as an empty selection, not an error.
    pub fn from_request(raw: &str) -> Option<Level> {
        Level::from_token(raw.to_uppercase().as_str())
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

// =============================================================================
// Log record
// =============================================================================

/// A single parsed log line.
///
/// Exists only for lines that fully match the expected pattern; the
/// parser produces no record for malformed lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// Calendar date in `YYYY-MM-DD` form. Digit-count matching only,
    /// no semantic calendar validation.
    pub date: String,

    /// Time of day in `HH:MM:SS` form. Digit-count matching only.
    pub time: String,

    /// Severity level token of the line.
    pub level: Level,

    /// Remainder of the line after the level token, with leading and
    /// trailing whitespace removed.
    pub message: String,
}

/// Occurrence count per severity level.
///
/// Keys are only levels actually observed; absent levels are not
/// zero-filled. BTreeMap iteration yields entries sorted ascending by
/// token, which is exactly the count table's row order.
pub type LevelCounts = BTreeMap<Level, usize>;
