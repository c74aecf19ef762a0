//! Renderer-neutral chart model for the upload dashboard.
//!
//! The dashboard body is two summary metrics and four panels:
//!
//! - volume trend (area chart, configurable x/y)
//! - distribution (bar chart, configurable category/value)
//! - share analysis (donut chart, configurable labels/values)
//! - target gauge (record count)
//!
//! Selector state lives in an explicit [`DashboardConfig`]. [`render`] runs one full render
//! cycle, from an optional upload to a [`DashboardState`].
//!
//! ## Example
//!
//! ```rust
//! use upload_dashboard::dashboard::{render, AxisSelection, DashboardConfig, DashboardState};
//! use upload_dashboard::ingestion::{IngestionOptions, Upload};
//!
//! let upload = Upload::from_file_name(
//!     "sales.csv",
//!     b"region,units\nnorth,3\nsouth,2\n,\nnorth,4\n".to_vec(),
//! )
//! .unwrap();
//! let config = DashboardConfig {
//!     trend: AxisSelection::new("region", "units"),
//!     bar: AxisSelection::new("region", "units"),
//!     pie: AxisSelection::new("region", "units"),
//! };
//!
//! match render(Some(&upload), &IngestionOptions::default(), Some(&config)) {
//!     DashboardState::Ready(d) => {
//!         assert_eq!(d.summary.records, 3);
//!         assert_eq!(d.pie.slices[0].value, 7.0);
//!     }
//!     other => panic!("unexpected state: {other:?}"),
//! }
//! ```

pub mod charts;
pub mod config;

pub use charts::{Bar, BarChart, GaugeChart, PieChart, PieSlice, Point, TrendChart};
pub use config::{AxisSelection, DashboardConfig};

use serde::Serialize;

use crate::error::DashboardError;
use crate::ingestion::{ingest_upload, IngestionOptions, Upload};
use crate::shaping::{shape, ColumnCatalog, ShapedDataSet};

/// Headline metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Rows remaining after shaping.
    pub records: usize,
    pub columns: usize,
}

impl Summary {
    pub fn of(shaped: &ShapedDataSet) -> Self {
        Self {
            records: shaped.dataset.row_count(),
            columns: shaped.dataset.column_count(),
        }
    }
}

/// Everything a rendering surface needs to draw one dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub summary: Summary,
    /// Selector options, in column order.
    pub catalog: ColumnCatalog,
    pub config: DashboardConfig,
    pub trend: TrendChart,
    pub bar: BarChart,
    pub pie: PieChart,
    pub gauge: GaugeChart,
}

impl Dashboard {
    /// Serialize the dashboard as JSON for a rendering surface.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Outcome of one render cycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DashboardState {
    /// Nothing uploaded yet; the dashboard body is hidden.
    NoInput,
    /// The upload could not be turned into a dashboard. No charts are drawn.
    Failed { message: String },
    Ready(Box<Dashboard>),
}

/// Build the dashboard for a shaped dataset and selector state.
///
/// Fails when a selection names a column that is not in the catalog. The pie chart uses
/// weighted slices only when its values column is numeric.
pub fn build_dashboard(
    shaped: &ShapedDataSet,
    config: &DashboardConfig,
) -> Result<Dashboard, DashboardError> {
    let ds = &shaped.dataset;
    let resolve = |chart: &'static str, column: &str| {
        ds.index_of(column)
            .ok_or_else(|| DashboardError::UnknownColumn {
                chart,
                column: column.to_owned(),
            })
    };

    let trend_x = resolve("trend", &config.trend.x)?;
    let trend_y = resolve("trend", &config.trend.y)?;
    let bar_x = resolve("bar", &config.bar.x)?;
    let bar_y = resolve("bar", &config.bar.y)?;
    let pie_x = resolve("pie", &config.pie.x)?;
    let pie_y = resolve("pie", &config.pie.y)?;
    let weighted = shaped.catalog.is_numeric(&config.pie.y).unwrap_or(false);

    let summary = Summary::of(shaped);
    Ok(Dashboard {
        summary,
        catalog: shaped.catalog.clone(),
        config: config.clone(),
        trend: charts::trend_chart(ds, (trend_x, &config.trend.x), (trend_y, &config.trend.y)),
        bar: charts::bar_chart(ds, (bar_x, &config.bar.x), (bar_y, &config.bar.y)),
        pie: charts::pie_chart(ds, (pie_x, &config.pie.x), (pie_y, &config.pie.y), weighted),
        gauge: charts::gauge_chart(summary.records),
    })
}

/// Run one render cycle: ingest, shape, then build the dashboard.
///
/// - no upload: [`DashboardState::NoInput`]
/// - ingestion failure: [`DashboardState::Failed`] with the error text; shaping is skipped
/// - otherwise `config`, or the catalog defaults when `config` is `None`, drives the charts
pub fn render(
    upload: Option<&Upload>,
    options: &IngestionOptions,
    config: Option<&DashboardConfig>,
) -> DashboardState {
    let Some(upload) = upload else {
        return DashboardState::NoInput;
    };

    let dataset = match ingest_upload(upload, options) {
        Ok(ds) => ds,
        Err(e) => {
            log::warn!("render aborted for {}: {e}", upload.file_name);
            return DashboardState::Failed {
                message: e.to_string(),
            };
        }
    };
    let shaped = shape(dataset);

    let defaults;
    let config = match config {
        Some(c) => c,
        None => match DashboardConfig::from_catalog(&shaped.catalog) {
            Some(c) => {
                defaults = c;
                &defaults
            }
            None => {
                return DashboardState::Failed {
                    message: "dataset has no columns".to_string(),
                };
            }
        },
    };

    match build_dashboard(&shaped, config) {
        Ok(d) => DashboardState::Ready(Box::new(d)),
        Err(e) => DashboardState::Failed {
            message: e.to_string(),
        },
    }
}
