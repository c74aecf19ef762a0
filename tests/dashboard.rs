use upload_dashboard::dashboard::{
    build_dashboard, render, AxisSelection, DashboardConfig, DashboardState,
};
use upload_dashboard::ingestion::{IngestionOptions, Upload};
use upload_dashboard::shaping::shape;
use upload_dashboard::types::Value;
use upload_dashboard::DashboardError;

fn sales_upload() -> Upload {
    let bytes = std::fs::read("tests/fixtures/sales.csv").unwrap();
    Upload::from_file_name("sales.csv", bytes).unwrap()
}

fn sales_config() -> DashboardConfig {
    DashboardConfig {
        trend: AxisSelection::new("month", "revenue"),
        bar: AxisSelection::new("region", "units"),
        pie: AxisSelection::new("region", "revenue"),
    }
}

fn ready(state: DashboardState) -> upload_dashboard::dashboard::Dashboard {
    match state {
        DashboardState::Ready(d) => *d,
        other => panic!("expected ready dashboard, got {other:?}"),
    }
}

#[test]
fn no_upload_is_not_an_error() {
    let state = render(None, &IngestionOptions::default(), None);
    assert_eq!(state, DashboardState::NoInput);
}

#[test]
fn parse_failure_aborts_the_render() {
    let upload = Upload::from_file_name("bad.csv", b"a,b\n1,\"unterminated\n".to_vec()).unwrap();
    let state = render(Some(&upload), &IngestionOptions::default(), Some(&sales_config()));
    match state {
        DashboardState::Failed { message } => {
            assert!(message.contains("EOF inside quoted field"), "{message}");
        }
        other => panic!("expected failure, got {other:?}"),
    }
}

#[test]
fn summary_counts_shaped_rows() {
    let d = ready(render(
        Some(&sales_upload()),
        &IngestionOptions::default(),
        Some(&sales_config()),
    ));
    // 5 records in the file, one of them blank.
    assert_eq!(d.summary.records, 4);
    assert_eq!(d.summary.columns, 4);
    assert_eq!(d.gauge.value, 4);
    assert!((d.gauge.axis_max - 4.8).abs() < 1e-9);
}

#[test]
fn trend_and_bar_follow_selections() {
    let d = ready(render(
        Some(&sales_upload()),
        &IngestionOptions::default(),
        Some(&sales_config()),
    ));

    assert_eq!(d.trend.x, "month");
    assert_eq!(d.trend.points.len(), 4);
    assert_eq!(d.trend.points[0].y, Value::Float64(1200.5));

    assert_eq!(d.bar.bars.len(), 4);
    assert_eq!(d.bar.bars[2].value, Value::Null);
    assert_eq!(d.bar.categories, vec!["north", "south", "south, coastal"]);
}

#[test]
fn pie_uses_numeric_values_as_weights() {
    let d = ready(render(
        Some(&sales_upload()),
        &IngestionOptions::default(),
        Some(&sales_config()),
    ));

    assert!(d.pie.weighted);
    let north = d.pie.slices.iter().find(|s| s.label == "north").unwrap();
    assert!((north.value - 2550.75).abs() < 1e-9);
}

#[test]
fn pie_counts_rows_when_values_are_categorical() {
    let mut config = sales_config();
    config.pie = AxisSelection::new("region", "month");
    let d = ready(render(Some(&sales_upload()), &IngestionOptions::default(), Some(&config)));

    assert!(!d.pie.weighted);
    let slices: Vec<_> = d.pie.slices.iter().map(|s| (s.label.as_str(), s.value)).collect();
    assert_eq!(slices, vec![("north", 2.0), ("south", 1.0), ("south, coastal", 1.0)]);
}

#[test]
fn default_config_uses_first_column() {
    let d = ready(render(Some(&sales_upload()), &IngestionOptions::default(), None));
    assert_eq!(d.config.trend, AxisSelection::new("month", "month"));
    assert_eq!(d.catalog.names().collect::<Vec<_>>(), vec!["month", "region", "revenue", "units"]);
}

#[test]
fn unknown_selection_is_reported() {
    let shaped = shape(
        upload_dashboard::ingestion::ingest_upload(&sales_upload(), &IngestionOptions::default()).unwrap(),
    );
    let mut config = sales_config();
    config.bar.y = "profit".to_string();

    let err = build_dashboard(&shaped, &config).unwrap_err();
    assert_eq!(
        err,
        DashboardError::UnknownColumn {
            chart: "bar",
            column: "profit".to_string()
        }
    );
    assert_eq!(err.to_string(), "bar: unknown column 'profit'");
}

#[test]
fn dashboard_serializes_to_json() {
    let d = ready(render(
        Some(&sales_upload()),
        &IngestionOptions::default(),
        Some(&sales_config()),
    ));
    let json: serde_json::Value = serde_json::from_str(&d.to_json().unwrap()).unwrap();

    assert_eq!(json["summary"]["records"], 4);
    assert_eq!(json["catalog"][0]["name"], "month");
    assert_eq!(json["catalog"][2]["kind"], "numeric");
    assert_eq!(json["pie"]["hole"], 0.5);
    assert_eq!(json["trend"]["points"][0]["x"], "Jan");
}

#[test]
fn render_state_serializes_with_tag() {
    let json = serde_json::to_value(DashboardState::NoInput).unwrap();
    assert_eq!(json["state"], "no_input");

    let failed = DashboardState::Failed {
        message: "boom".to_string(),
    };
    let json = serde_json::to_value(failed).unwrap();
    assert_eq!(json["state"], "failed");
    assert_eq!(json["message"], "boom");
}
