//! Chart data for the four dashboard panels.
//!
//! Each builder takes resolved column indexes; validation of the selected names happens in
//! [`super::build_dashboard`].

use serde::Serialize;

use crate::types::{DataSet, Value};

/// Fraction of the pie radius left empty in the share-analysis donut.
pub const PIE_HOLE: f64 = 0.5;

/// Headroom factor for the gauge axis above the record count.
pub const GAUGE_AXIS_HEADROOM: f64 = 1.2;

/// One `(x, y)` sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Point {
    pub x: Value,
    pub y: Value,
}

/// Area chart of one column against another, one point per row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendChart {
    pub x: String,
    pub y: String,
    pub points: Vec<Point>,
}

/// One bar per row, colored by its category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub category: Value,
    pub value: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub x: String,
    pub y: String,
    pub bars: Vec<Bar>,
    /// Distinct non-missing categories in first-appearance order (one color each).
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
}

/// Donut chart of label shares.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    pub labels: String,
    pub values: String,
    /// `true` when slices are summed from a numeric values column, `false` when they are row
    /// counts per label.
    pub weighted: bool,
    pub hole: f64,
    pub slices: Vec<PieSlice>,
}

/// Record-count gauge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeChart {
    pub value: usize,
    pub axis_max: f64,
}

pub(crate) fn trend_chart(ds: &DataSet, x: (usize, &str), y: (usize, &str)) -> TrendChart {
    let points = ds
        .rows
        .iter()
        .map(|row| Point {
            x: cell(row, x.0),
            y: cell(row, y.0),
        })
        .collect();
    TrendChart {
        x: x.1.to_owned(),
        y: y.1.to_owned(),
        points,
    }
}

pub(crate) fn bar_chart(ds: &DataSet, x: (usize, &str), y: (usize, &str)) -> BarChart {
    let mut categories: Vec<String> = Vec::new();
    let mut bars = Vec::with_capacity(ds.row_count());
    for row in &ds.rows {
        let category = cell(row, x.0);
        if !category.is_null() {
            let label = category.to_string();
            if !categories.contains(&label) {
                categories.push(label);
            }
        }
        bars.push(Bar {
            category,
            value: cell(row, y.0),
        });
    }
    BarChart {
        x: x.1.to_owned(),
        y: y.1.to_owned(),
        bars,
        categories,
    }
}

/// Slices keyed by label in first-appearance order. Rows with a missing label are skipped.
///
/// With `weighted`, a slice is the sum of the numeric values for its label (missing values add
/// nothing); otherwise it is the number of rows carrying the label.
pub(crate) fn pie_chart(
    ds: &DataSet,
    labels: (usize, &str),
    values: (usize, &str),
    weighted: bool,
) -> PieChart {
    let mut slices: Vec<PieSlice> = Vec::new();
    for row in &ds.rows {
        let label_cell = cell(row, labels.0);
        if label_cell.is_null() {
            continue;
        }
        let label = label_cell.to_string();
        let add = if weighted {
            row.get(values.0).and_then(Value::as_f64).unwrap_or(0.0)
        } else {
            1.0
        };
        match slices.iter_mut().find(|s| s.label == label) {
            Some(slice) => slice.value += add,
            None => slices.push(PieSlice { label, value: add }),
        }
    }
    PieChart {
        labels: labels.1.to_owned(),
        values: values.1.to_owned(),
        weighted,
        hole: PIE_HOLE,
        slices,
    }
}

pub(crate) fn gauge_chart(records: usize) -> GaugeChart {
    GaugeChart {
        value: records,
        axis_max: records as f64 * GAUGE_AXIS_HEADROOM,
    }
}

fn cell(row: &[Value], idx: usize) -> Value {
    row.get(idx).cloned().unwrap_or(Value::Null)
}
