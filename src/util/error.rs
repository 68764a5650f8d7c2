// logtally - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation. Every failure is terminal: errors
// flow outward to the single top-level handler in `main`, which prints
// the message and sets the exit code, so lower-level routines stay pure
// and testable in isolation.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all logtally operations.
///
/// `Display` renders the exact user-facing message for each failure;
/// every variant maps to exit status 1.
#[derive(Debug)]
pub enum LogTallyError {
    /// Invoked without the required log file path.
    Usage,

    /// The given path does not refer to an existing regular file.
    FileMissing { path: PathBuf },

    /// The file vanished between the existence check and open.
    FileNotFound { path: PathBuf },

    /// Any other I/O fault while opening or reading the file.
    Io { source: io::Error },
}

impl fmt::Display for LogTallyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Usage => write!(
                f,
                "Використання: logtally <шлях_до_файлу_логів> [<рівень_логування>]"
            ),
            Self::FileMissing { path } => write!(f, "Файл {} не існує.", path.display()),
            Self::FileNotFound { path } => write!(f, "Файл {} не знайдено.", path.display()),
            Self::Io { source } => write!(f, "Помилка при читанні файлу: {source}"),
        }
    }
}

impl std::error::Error for LogTallyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for logtally results.
pub type Result<T> = std::result::Result<T, LogTallyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_missing_message_names_the_path() {
        let err = LogTallyError::FileMissing {
            path: PathBuf::from("logs/app.log"),
        };
        assert_eq!(err.to_string(), "Файл logs/app.log не існує.");
    }

    #[test]
    fn test_io_message_includes_underlying_detail() {
        let err = LogTallyError::Io {
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let message = err.to_string();
        assert!(message.starts_with("Помилка при читанні файлу: "));
        assert!(message.contains("denied"));
    }

    #[test]
    fn test_io_preserves_error_chain() {
        use std::error::Error;
        let err = LogTallyError::Io {
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.source().is_some());
        assert!(LogTallyError::Usage.source().is_none());
    }
}
