// logtally - main.rs
//
// Binary entry point. Handles:
// 1. CLI argument parsing
// 2. Logging initialisation (debug mode support)
// 3. Delegation to the application pipeline
// 4. The single top-level error handler deciding message and exit code

use clap::Parser;
use logtally::app;
use logtally::util;
use std::path::PathBuf;

/// logtally - Log file severity analyser.
///
/// Reads a plain-text log file, tallies entries by severity level, and
/// optionally lists the entries of one requested level.
#[derive(Parser, Debug)]
#[command(name = "logtally", version, about)]
struct Cli {
    /// Path to the log file to analyse.
    path: Option<PathBuf>,

    /// Severity level whose entries are listed in detail (case-insensitive).
    level: Option<String>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    util::logging::init(cli.debug);

    tracing::debug!(version = util::constants::APP_VERSION, "logtally starting");

    if let Err(e) = app::run(cli.path.as_deref(), cli.level.as_deref()) {
        // Failure messages are user-facing text on stdout, not stderr.
        println!("{e}");
        std::process::exit(1);
    }
}
