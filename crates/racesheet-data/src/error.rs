//! Error types for workbook loading.
//!
//! Only missing inputs are errors. Malformed cells always resolve to a
//! default value during extraction and never reach this type.

use thiserror::Error;

/// Result type for data operations
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors that can occur while loading a league workbook
#[derive(Debug, Error)]
pub enum DataError {
    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Failed to open workbook
    #[error("Failed to open workbook: {0}")]
    WorkbookOpen(String),

    /// A required sheet is missing
    #[error("{0} sheet not found in workbook")]
    MissingSheet(String),

    /// One or more standings sheets are missing
    #[error("Missing standings sheet(s): {}", .0.join(", "))]
    MissingSheets(Vec<String>),

    /// A sheet is listed but could not be read
    #[error("Failed to read sheet {sheet}: {reason}")]
    SheetRead { sheet: String, reason: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<calamine::Error> for DataError {
    fn from(err: calamine::Error) -> Self {
        DataError::WorkbookOpen(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_sheets_lists_every_name() {
        let err = DataError::MissingSheets(vec![
            "GT4 Standings".to_string(),
            "GT3 Standings".to_string(),
        ]);
        assert_eq!(
            err.to_string(),
            "Missing standings sheet(s): GT4 Standings, GT3 Standings"
        );
    }

    #[test]
    fn test_missing_entry_list_message() {
        let err = DataError::MissingSheet("Entry List".to_string());
        assert_eq!(err.to_string(), "Entry List sheet not found in workbook");
    }
}
