//! Structural row cleanup for [`crate::types::DataSet`].

use crate::types::{DataSet, Value};

/// Returns `true` when every cell of `row` is [`Value::Null`]. An empty row counts as blank.
pub fn is_blank_row(row: &[Value]) -> bool {
    row.iter().all(Value::is_null)
}

/// Returns a new [`DataSet`] without rows whose cells are all missing.
///
/// Rows with at least one non-missing cell are kept, in their original relative order. This is a
/// wrapper around [`DataSet::filter_rows`].
pub fn drop_empty_rows(dataset: &DataSet) -> DataSet {
    dataset.filter_rows(|row| !is_blank_row(row))
}
