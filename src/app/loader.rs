// logtally - app/loader.rs
//
// Reads a log file line by line and collects the records the parser
// accepts, preserving file order. Unparseable lines are skipped
// silently; they are not an error condition.

use crate::core::model::LogRecord;
use crate::core::parser;
use crate::util::error::{LogTallyError, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Load all parseable records from the file at `path`, in file order.
///
/// The file handle is scoped to this function and released whether
/// reading succeeds or fails. The first I/O error aborts the load; no
/// partial result is returned.
pub fn load_records(path: &Path) -> Result<Vec<LogRecord>> {
    let file = File::open(path).map_err(|e| open_error(path, e))?;
    let reader = BufReader::new(file);

    let mut records = Vec::new();
    let mut lines_read: u64 = 0;
    for line in reader.lines() {
        let line = line.map_err(|e| LogTallyError::Io { source: e })?;
        lines_read += 1;
        if let Some(record) = parser::parse_line(&line) {
            records.push(record);
        }
    }

    tracing::debug!(
        file = %path.display(),
        lines = lines_read,
        records = records.len(),
        "Load complete"
    );

    Ok(records)
}

/// Map an open failure to the matching user-facing error.
fn open_error(path: &Path, source: io::Error) -> LogTallyError {
    if source.kind() == io::ErrorKind::NotFound {
        LogTallyError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        LogTallyError::Io { source }
    }
}
