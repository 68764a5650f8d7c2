// logtally - core/parser.rs
//
// Single-line log parsing against a fixed anchored pattern.
// Core layer: accepts text lines, never touches the filesystem.

use crate::core::model::{Level, LogRecord};
use regex::Regex;
use std::sync::OnceLock;

/// Anchored pattern every well-formed log line must match: date, time,
/// one of the four level tokens, then the message text to end of line.
const LINE_PATTERN: &str =
    r"^(\d{4}-\d{2}-\d{2}) (\d{2}:\d{2}:\d{2}) (INFO|ERROR|DEBUG|WARNING) (.+)$";

/// Compiled once per process. The pattern is a tested constant, so a
/// compile failure shows up as a failing test rather than a user-visible
/// panic.
fn line_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(LINE_PATTERN).expect("parser: invalid line pattern"))
}

/// Attempt to parse one raw line into a `LogRecord`.
///
/// `None` is the normal outcome for lines that do not match the pattern
/// (blank lines, headers, truncated timestamps, unknown level tokens).
/// Mismatch is a skip signal, not an error.
pub fn parse_line(line: &str) -> Option<LogRecord> {
    let caps = line_regex().captures(line)?;
    Some(LogRecord {
        date: caps.get(1)?.as_str().to_string(),
        time: caps.get(2)?.as_str().to_string(),
        level: Level::from_token(caps.get(3)?.as_str())?,
        message: caps.get(4)?.as_str().trim().to_string(),
    })
}
