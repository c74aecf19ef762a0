//! Core data model types for ingestion and shaping.
//!
//! An upload is ingested into an in-memory [`DataSet`]: an ordered header plus row-major
//! [`Value`] cells. Cells are tagged rather than typed by a schema, since a single uploaded
//! column may freely mix numbers, text and blanks.

use std::fmt;

use serde::Serialize;

/// A single cell in a [`DataSet`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Missing/empty value.
    Null,
    /// 64-bit signed integer.
    Int64(i64),
    /// 64-bit float.
    Float64(f64),
    /// Boolean (spreadsheet boolean cells only).
    Bool(bool),
    /// UTF-8 string.
    Utf8(String),
}

impl Value {
    /// Returns `true` for [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Numeric reading of the cell, if it has one.
    ///
    /// Numbers convert directly; text converts when its trimmed content parses as an integer or
    /// float. Booleans and nulls have no numeric reading.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int64(v) => Some(*v as f64),
            Value::Float64(v) => Some(*v),
            Value::Utf8(s) => parse_number(s),
            Value::Null | Value::Bool(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Int64(v) => write!(f, "{v}"),
            Value::Float64(v) => write!(f, "{v}"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::Utf8(s) => f.write_str(s),
        }
    }
}

/// Parse trimmed text as an `i64` first, then as an `f64`.
pub(crate) fn parse_number(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<i64>() {
        Ok(v) => Some(v as f64),
        Err(_) => trimmed.parse::<f64>().ok(),
    }
}

/// In-memory tabular dataset.
///
/// Rows are stored as `Vec<Vec<Value>>` in the same order as [`DataSet::columns`]. Every row has
/// exactly `columns.len()` cells.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DataSet {
    /// Header names exactly as they appeared in the source (duplicates and blanks included).
    pub columns: Vec<String>,
    /// Row-major value storage.
    pub rows: Vec<Vec<Value>>,
}

impl DataSet {
    /// Create a dataset from a header and rows.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        Self { columns, rows }
    }

    /// Number of rows in the dataset.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns in the dataset.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Returns the index of the first column called `name`, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Iterate the cells of column `idx` in row order.
    pub fn column_values(&self, idx: usize) -> impl Iterator<Item = &Value> {
        self.rows.iter().filter_map(move |row| row.get(idx))
    }

    /// Create a new dataset containing only rows that match `predicate`.
    ///
    /// The returned dataset preserves the header and the relative order of kept rows.
    pub fn filter_rows<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&[Value]) -> bool,
    {
        let rows = self
            .rows
            .iter()
            .filter(|row| predicate(row.as_slice()))
            .cloned()
            .collect();
        Self {
            columns: self.columns.clone(),
            rows,
        }
    }
}
