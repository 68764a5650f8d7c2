// logtally - app/mod.rs
//
// Application layer: pipeline orchestration and file I/O.
// Dependencies: core and util layers.

pub mod loader;

use crate::core::{aggregate, report};
use crate::util::error::{LogTallyError, Result};
use std::path::Path;

/// Run the whole pipeline: load, count, report, optional detail listing.
///
/// All user-visible output goes to stdout. Every failure is returned to
/// the caller as a typed error; nothing here terminates the process.
pub fn run(path: Option<&Path>, level: Option<&str>) -> Result<()> {
    let path = path.ok_or(LogTallyError::Usage)?;

    if !path.is_file() {
        return Err(LogTallyError::FileMissing {
            path: path.to_path_buf(),
        });
    }

    let records = loader::load_records(path)?;
    let counts = aggregate::count_by_level(&records);
    print!("{}", report::render_counts(&counts));

    if let Some(requested) = level {
        let matches = aggregate::filter_by_level(&records, requested);
        println!();
        println!("{}", report::details_heading(requested));
        print!("{}", report::render_details(&matches));
    }

    Ok(())
}
