use thiserror::Error;

/// Convenience result type for ingestion operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Error type returned by ingestion functions.
///
/// This is the only error an upload can produce on its way to a [`crate::types::DataSet`].
/// Variants wrapping a parser error display that parser's message verbatim, so callers can show
/// `err.to_string()` to the user as-is.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Underlying I/O error (only produced by path-based ingestion).
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Delimited-text error reported by the `csv` reader (unequal record lengths, bad UTF-8, ...).
    #[error("{0}")]
    Csv(#[from] csv::Error),

    #[cfg(feature = "excel")]
    /// Spreadsheet container error (feature-gated behind `excel`).
    #[error("{0}")]
    Spreadsheet(#[from] calamine::Error),

    /// A quoted text field was still open when the input ended.
    #[error("EOF inside quoted field starting at line {line}")]
    UnterminatedQuote { line: u64 },

    /// A data record has more fields than the header.
    #[error("Expected {expected} fields in line {line}, saw {found}")]
    TooManyFields {
        line: u64,
        expected: usize,
        found: usize,
    },

    /// The text input has no header record.
    #[error("No columns to parse from file")]
    NoColumns,

    /// The upload contained no bytes.
    #[error("uploaded file is empty")]
    EmptyInput,

    /// The workbook contains no worksheets.
    #[error("workbook has no sheets")]
    NoSheets,

    /// The file name does not end in a supported suffix.
    #[error("unsupported upload type: '{name}' (expected .csv, .xlsx, .xls, .xlsm, .xlsb or .ods)")]
    UnsupportedUpload { name: String },

    /// A spreadsheet was uploaded but the crate was built without the `excel` feature.
    #[error("spreadsheet ingestion not enabled (enable cargo feature 'excel')")]
    SpreadsheetSupportDisabled,
}

/// Error returned when a chart selection does not name a catalog column.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DashboardError {
    #[error("{chart}: unknown column '{column}'")]
    UnknownColumn { chart: &'static str, column: String },
}
