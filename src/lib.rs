//! `upload-dashboard` turns one uploaded CSV or spreadsheet file into the data behind a
//! single-page dashboard: an in-memory [`types::DataSet`], a cleaned copy with its
//! [`shaping::ColumnCatalog`], and a renderer-neutral chart model.
//!
//! The pipeline per upload is:
//!
//! 1. [`ingestion::ingest_upload`]: bytes + declared kind → `DataSet` or [`ParseError`]
//! 2. [`shaping::shape`]: drop fully-empty rows, classify columns numeric/categorical
//! 3. [`dashboard::build_dashboard`]: summary metrics plus trend, bar, pie and gauge data
//!
//! [`dashboard::render`] runs all three for one render cycle.
//!
//! ## What you can upload
//!
//! - **CSV**: `.csv`. The first record is the header.
//! - **Excel/workbooks** (Cargo feature `excel`, on by default): `.xlsx`, `.xls`, `.xlsm`,
//!   `.xlsb`, `.ods`. Only the first sheet is read and its **second** row is the header; the first
//!   row is a title row and is always discarded.
//!
//! Cells are tagged [`types::Value`]s. Empty cells and the usual NA tokens (`NA`, `NaN`, `null`,
//! ...) become [`types::Value::Null`].
//!
//! ## Quick example
//!
//! ```rust
//! use upload_dashboard::ingestion::{ingest_bytes, IngestionOptions, UploadKind};
//! use upload_dashboard::shaping::{shape, ColumnKind};
//!
//! # fn main() -> Result<(), upload_dashboard::ParseError> {
//! let ds = ingest_bytes(b"a,b\n1,2\n,\n3,\n", UploadKind::Csv, &IngestionOptions::default())?;
//! assert_eq!(ds.row_count(), 3);
//!
//! let shaped = shape(ds);
//! assert_eq!(shaped.dataset.row_count(), 2);
//! assert!(shaped
//!     .catalog
//!     .columns()
//!     .iter()
//!     .all(|c| c.kind == ColumnKind::Numeric));
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`ingestion`]: upload entrypoints and format-specific readers
//! - [`shaping`]: empty-row removal and the column catalog
//! - [`dashboard`]: selector config, chart data and the render cycle
//! - [`types`]: in-memory dataset types
//! - [`error`]: error types

pub mod dashboard;
pub mod error;
pub mod ingestion;
pub mod shaping;
pub mod types;

pub use error::{DashboardError, ParseError, ParseResult};
