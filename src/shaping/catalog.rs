//! Column catalog: ordered column names plus a numeric/categorical classification.

use serde::Serialize;

use crate::types::{DataSet, Value};

/// How a column can be encoded in a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    /// Every non-missing cell reads as a number.
    Numeric,
    /// At least one non-missing cell is not a number.
    Categorical,
}

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnInfo {
    pub name: String,
    pub kind: ColumnKind,
}

impl ColumnInfo {
    pub fn is_numeric(&self) -> bool {
        self.kind == ColumnKind::Numeric
    }
}

/// Ordered column listing derived from a [`DataSet`].
///
/// Order matches the dataset header and drives selector ordering in the rendering surface.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct ColumnCatalog {
    columns: Vec<ColumnInfo>,
}

impl ColumnCatalog {
    /// Derive the catalog of `dataset`.
    pub fn from_dataset(dataset: &DataSet) -> Self {
        let columns = dataset
            .columns
            .iter()
            .enumerate()
            .map(|(idx, name)| ColumnInfo {
                name: name.clone(),
                kind: classify_column(dataset.column_values(idx)),
            })
            .collect();
        Self { columns }
    }

    /// Catalog entries in column order.
    pub fn columns(&self) -> &[ColumnInfo] {
        &self.columns
    }

    /// Column names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// First entry called `name`, if any.
    pub fn get(&self, name: &str) -> Option<&ColumnInfo> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// `Some(true)` for a numeric column, `Some(false)` for a categorical one, `None` if absent.
    pub fn is_numeric(&self, name: &str) -> Option<bool> {
        self.get(name).map(ColumnInfo::is_numeric)
    }

    /// Names of numeric columns, in order.
    pub fn numeric_columns(&self) -> impl Iterator<Item = &str> {
        self.columns
            .iter()
            .filter(|c| c.is_numeric())
            .map(|c| c.name.as_str())
    }
}

/// Classify a column from its cells.
///
/// Missing cells are ignored. A column with no non-missing cells is numeric.
pub fn classify_column<'a>(cells: impl IntoIterator<Item = &'a Value>) -> ColumnKind {
    let all_numeric = cells
        .into_iter()
        .filter(|v| !v.is_null())
        .all(|v| v.as_f64().is_some());
    if all_numeric {
        ColumnKind::Numeric
    } else {
        ColumnKind::Categorical
    }
}
