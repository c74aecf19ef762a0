//! Shaping: structural cleanup of an ingested [`DataSet`] plus its [`ColumnCatalog`].
//!
//! Shaping never fails. It only removes rows in which every cell is missing; there is no
//! column filtering, type coercion or deduplication.
//!
//! ## Example
//!
//! ```rust
//! use upload_dashboard::shaping::{shape, ColumnKind};
//! use upload_dashboard::types::{DataSet, Value};
//!
//! let ds = DataSet::new(
//!     vec!["a".to_string(), "b".to_string()],
//!     vec![
//!         vec![Value::Int64(1), Value::Int64(2)],
//!         vec![Value::Null, Value::Null],
//!         vec![Value::Int64(3), Value::Null],
//!     ],
//! );
//!
//! let shaped = shape(ds);
//! assert_eq!(shaped.dataset.row_count(), 2);
//! assert_eq!(shaped.catalog.columns()[1].kind, ColumnKind::Numeric);
//! ```

pub mod catalog;
pub mod filter;

pub use catalog::{classify_column, ColumnCatalog, ColumnInfo, ColumnKind};
pub use filter::{drop_empty_rows, is_blank_row};

use crate::types::DataSet;

/// A cleaned dataset together with its derived catalog.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShapedDataSet {
    pub dataset: DataSet,
    pub catalog: ColumnCatalog,
}

/// Remove fully-empty rows from `dataset` and derive its [`ColumnCatalog`].
///
/// Idempotent: shaping the returned dataset again removes nothing and yields the same catalog.
pub fn shape(dataset: DataSet) -> ShapedDataSet {
    let before = dataset.row_count();
    let dataset = drop_empty_rows(&dataset);
    let catalog = ColumnCatalog::from_dataset(&dataset);

    log::debug!(
        "shaped dataset: rows {} -> {} (dropped {}), numeric columns {:?}",
        before,
        dataset.row_count(),
        before - dataset.row_count(),
        catalog.numeric_columns().collect::<Vec<_>>()
    );

    ShapedDataSet { dataset, catalog }
}
