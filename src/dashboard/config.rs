//! Per-chart selector state.

use serde::{Deserialize, Serialize};

use crate::shaping::ColumnCatalog;

/// A pair of selected column names for one chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisSelection {
    /// Horizontal axis / category / label column.
    pub x: String,
    /// Vertical axis / value column.
    pub y: String,
}

impl AxisSelection {
    pub fn new(x: impl Into<String>, y: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }
}

/// Selector state for every configurable chart. The gauge has no selectors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Volume trend (area chart).
    pub trend: AxisSelection,
    /// Distribution (bar chart).
    pub bar: AxisSelection,
    /// Share analysis (pie chart): `x` is labels, `y` is values.
    pub pie: AxisSelection,
}

impl DashboardConfig {
    /// Default selections: every selector starts on the first catalog column.
    ///
    /// Returns `None` for an empty catalog.
    pub fn from_catalog(catalog: &ColumnCatalog) -> Option<Self> {
        let first = catalog.names().next()?;
        let sel = AxisSelection::new(first, first);
        Some(Self {
            trend: sel.clone(),
            bar: sel.clone(),
            pie: sel,
        })
    }
}
