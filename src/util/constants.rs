// logtally - util/constants.rs
//
// Single source of truth for named constants and defaults.

/// Application display name.
pub const APP_NAME: &str = "logtally";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Width in characters of the level column in the count table.
pub const LEVEL_COLUMN_WIDTH: usize = 16;

/// Default level for diagnostic tracing.
pub const DEFAULT_LOG_LEVEL: &str = "info";
