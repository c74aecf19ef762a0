//! Ingestion entrypoints and implementations.
//!
//! Most callers should use [`ingest_upload`] (from [`unified`]) which:
//!
//! - dispatches on the upload's kind (inferred from its file name, or overridden via
//!   [`IngestionOptions`])
//! - parses the bytes into an in-memory [`crate::types::DataSet`]
//! - optionally reports success/failure/alerts to an [`IngestionObserver`]
//!
//! Format-specific functions are also available under:
//! - [`csv`]
//! - `excel` (feature `excel`)

mod cell;
pub mod csv;
#[cfg(feature = "excel")]
pub mod excel;
pub mod observability;
pub mod unified;

pub use cell::DEFAULT_NA_VALUES;
pub use observability::{
    CompositeObserver, IngestionContext, IngestionObserver, IngestionSeverity, IngestionStats, LogObserver,
};
pub use unified::{ingest_bytes, ingest_from_path, ingest_upload, IngestionOptions, Upload, UploadKind};
