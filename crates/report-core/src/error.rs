use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the ticket report tool.
#[derive(Error, Debug)]
pub enum ReportError {
    /// A file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A CSV document could not be parsed or written.
    #[error("Failed to process CSV: {0}")]
    Csv(#[from] csv::Error),

    /// The ticket export lacks a column the analysis needs.
    #[error("Export is missing expected column: {0}")]
    MissingColumn(String),

    /// A configuration value or flag combination is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the report crates.
pub type Result<T> = std::result::Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_file_read() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = ReportError::FileRead {
            path: PathBuf::from("/some/export.csv"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("Failed to read file"));
        assert!(msg.contains("/some/export.csv"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_error_display_missing_column() {
        let err = ReportError::MissingColumn("Assigned To".to_string());
        assert_eq!(err.to_string(), "Export is missing expected column: Assigned To");
    }

    #[test]
    fn test_error_display_config() {
        let err = ReportError::Config("missing --worker".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing --worker");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: ReportError = io_err.into();
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_error_from_csv() {
        let csv_err = csv::ReaderBuilder::new()
            .from_reader("a,b\n1".as_bytes())
            .records()
            .next()
            .unwrap()
            .map(|_| ())
            .unwrap_err();
        let err: ReportError = csv_err.into();
        assert!(err.to_string().contains("Failed to process CSV"));
    }
}
