//! Unified ingestion entrypoint.
//!
//! Most callers should use [`ingest_upload`], which ingests one uploaded file into an in-memory
//! [`crate::types::DataSet`].
//!
//! - If [`IngestionOptions::kind`] is `None`, the upload's declared kind (inferred from its file
//!   name) is used.
//! - If an [`super::observability::IngestionObserver`] is provided, success/failure/alerts are
//!   reported to it.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::error::{ParseError, ParseResult};
use crate::types::DataSet;

use super::cell::DEFAULT_NA_VALUES;
use super::csv;
use super::observability::{IngestionContext, IngestionObserver, IngestionSeverity, IngestionStats};

/// Supported upload kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    /// Delimiter-separated text (`.csv`).
    Csv,
    /// Spreadsheet/workbook formats (parsed only with the `excel` feature).
    Spreadsheet,
}

impl UploadKind {
    /// Parse an upload kind from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "xlsx" | "xls" | "xlsm" | "xlsb" | "ods" => Some(Self::Spreadsheet),
            _ => None,
        }
    }

    /// Infer the upload kind from a file name's suffix. Returns `None` for unsupported files.
    pub fn from_file_name(name: &str) -> Option<Self> {
        Path::new(name)
            .extension()
            .and_then(|s| s.to_str())
            .and_then(Self::from_extension)
    }
}

/// A single uploaded file: its name, declared kind and raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    /// Original file name, as supplied by the uploader.
    pub file_name: String,
    /// Kind declared for this upload.
    pub kind: UploadKind,
    /// Raw file contents.
    pub bytes: Vec<u8>,
}

impl Upload {
    /// Build an upload, inferring its kind from `file_name`.
    ///
    /// Returns `None` when the suffix is not an accepted upload type, so such files never reach
    /// ingestion.
    pub fn from_file_name(file_name: impl Into<String>, bytes: Vec<u8>) -> Option<Self> {
        let file_name = file_name.into();
        let kind = UploadKind::from_file_name(&file_name)?;
        Some(Self {
            file_name,
            kind,
            bytes,
        })
    }
}

/// Options controlling unified ingestion behavior.
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct IngestionOptions {
    /// If `None`, use the upload's declared kind.
    pub kind: Option<UploadKind>,
    /// Field delimiter for delimited text.
    pub delimiter: u8,
    /// Cell contents read as missing values, matched exactly.
    pub na_values: Vec<String>,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn IngestionObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: IngestionSeverity,
}

impl fmt::Debug for IngestionOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IngestionOptions")
            .field("kind", &self.kind)
            .field("delimiter", &(self.delimiter as char))
            .field("na_values", &self.na_values.len())
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for IngestionOptions {
    fn default() -> Self {
        Self {
            kind: None,
            delimiter: b',',
            na_values: DEFAULT_NA_VALUES.iter().map(|s| s.to_string()).collect(),
            observer: None,
            alert_at_or_above: IngestionSeverity::Critical,
        }
    }
}

/// Parse raw bytes of the given kind. No observer reporting.
///
/// Empty input fails with [`ParseError::EmptyInput`]; everything else is delegated to the
/// format-specific reader.
pub fn ingest_bytes(bytes: &[u8], kind: UploadKind, options: &IngestionOptions) -> ParseResult<DataSet> {
    if bytes.is_empty() {
        return Err(ParseError::EmptyInput);
    }
    match kind {
        UploadKind::Csv => csv::ingest_csv_from_bytes(bytes, options.delimiter, &options.na_values),
        UploadKind::Spreadsheet => ingest_spreadsheet_dispatch(bytes, &options.na_values),
    }
}

/// Unified ingestion entry point for uploads.
///
/// When an observer is configured, this function reports:
///
/// - `on_success` on success, with row/column stats
/// - `on_failure` on failure, with a computed severity
/// - `on_alert` on failure when the computed severity is >= `options.alert_at_or_above`
///
/// # Examples
///
/// ```
/// use upload_dashboard::ingestion::{ingest_upload, IngestionOptions, Upload};
///
/// # fn main() -> Result<(), upload_dashboard::ParseError> {
/// let upload = Upload::from_file_name("sales.csv", b"region,revenue\nnorth,10\n".to_vec())
///     .expect("csv is an accepted upload type");
/// let ds = ingest_upload(&upload, &IngestionOptions::default())?;
/// assert_eq!(ds.columns, vec!["region", "revenue"]);
/// assert_eq!(ds.row_count(), 1);
/// # Ok(())
/// # }
/// ```
///
/// ## Observability (`log` facade + alert threshold)
///
/// ```
/// use std::sync::Arc;
///
/// use upload_dashboard::ingestion::{
///     ingest_upload, IngestionOptions, IngestionSeverity, LogObserver, Upload,
/// };
///
/// let opts = IngestionOptions {
///     observer: Some(Arc::new(LogObserver)),
///     alert_at_or_above: IngestionSeverity::Error,
///     ..Default::default()
/// };
///
/// // An unterminated quote is an Error-severity failure and alerts at this threshold.
/// let upload = Upload::from_file_name("bad.csv", b"a,b\n1,\"open\n".to_vec()).unwrap();
/// let _err = ingest_upload(&upload, &opts).unwrap_err();
/// ```
pub fn ingest_upload(upload: &Upload, options: &IngestionOptions) -> ParseResult<DataSet> {
    let kind = options.kind.unwrap_or(upload.kind);
    let ctx = IngestionContext {
        file_name: upload.file_name.clone(),
        kind,
    };

    let result = ingest_bytes(&upload.bytes, kind, options);
    report(options, &ctx, &result);
    result
}

/// Path-based convenience: read a file and ingest it as an upload.
///
/// The kind comes from `options.kind` or, if unset, the file name's suffix; unsupported suffixes
/// fail with [`ParseError::UnsupportedUpload`].
pub fn ingest_from_path(path: impl AsRef<Path>, options: &IngestionOptions) -> ParseResult<DataSet> {
    let path = path.as_ref();
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let kind = match options.kind.or_else(|| UploadKind::from_file_name(&file_name)) {
        Some(k) => k,
        None => return Err(ParseError::UnsupportedUpload { name: file_name }),
    };
    let ctx = IngestionContext {
        file_name,
        kind,
    };

    let result = std::fs::read(path)
        .map_err(ParseError::from)
        .and_then(|bytes| ingest_bytes(&bytes, kind, options));
    report(options, &ctx, &result);
    result
}

fn report(options: &IngestionOptions, ctx: &IngestionContext, result: &ParseResult<DataSet>) {
    let Some(obs) = options.observer.as_ref() else {
        return;
    };
    match result {
        Ok(ds) => obs.on_success(
            ctx,
            IngestionStats {
                rows: ds.row_count(),
                columns: ds.column_count(),
            },
        ),
        Err(e) => {
            let sev = severity_for_error(e);
            obs.on_failure(ctx, sev, e);
            if sev >= options.alert_at_or_above {
                obs.on_alert(ctx, sev, e);
            }
        }
    }
}

fn severity_for_error(e: &ParseError) -> IngestionSeverity {
    match e {
        ParseError::Io(_) => IngestionSeverity::Critical,
        ParseError::Csv(err) => match err.kind() {
            ::csv::ErrorKind::Io(_) => IngestionSeverity::Critical,
            _ => IngestionSeverity::Error,
        },
        #[cfg(feature = "excel")]
        ParseError::Spreadsheet(calamine::Error::Io(_)) => IngestionSeverity::Critical,
        #[cfg(feature = "excel")]
        ParseError::Spreadsheet(_) => IngestionSeverity::Error,
        ParseError::SpreadsheetSupportDisabled => IngestionSeverity::Critical,
        ParseError::TooManyFields { .. }
        | ParseError::NoColumns
        | ParseError::UnterminatedQuote { .. }
        | ParseError::EmptyInput
        | ParseError::NoSheets
        | ParseError::UnsupportedUpload { .. } => IngestionSeverity::Error,
    }
}

fn ingest_spreadsheet_dispatch(bytes: &[u8], na_values: &[String]) -> ParseResult<DataSet> {
    // Avoid unused warnings when the feature is off.
    let _ = (bytes, na_values);

    #[cfg(feature = "excel")]
    {
        super::excel::ingest_excel_from_bytes(bytes, na_values)
    }

    #[cfg(not(feature = "excel"))]
    {
        Err(ParseError::SpreadsheetSupportDisabled)
    }
}
