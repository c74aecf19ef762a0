use std::sync::{Arc, Mutex};

use upload_dashboard::ingestion::{
    ingest_from_path, ingest_upload, CompositeObserver, IngestionContext, IngestionObserver,
    IngestionOptions, IngestionSeverity, IngestionStats, LogObserver, Upload, UploadKind,
};
use upload_dashboard::ParseError;

#[derive(Default)]
struct RecordingObserver {
    successes: Mutex<Vec<IngestionStats>>,
    failures: Mutex<Vec<IngestionSeverity>>,
    alerts: Mutex<Vec<IngestionSeverity>>,
    kinds: Mutex<Vec<UploadKind>>,
}

impl IngestionObserver for RecordingObserver {
    fn on_success(&self, ctx: &IngestionContext, stats: IngestionStats) {
        self.kinds.lock().unwrap().push(ctx.kind);
        self.successes.lock().unwrap().push(stats);
    }

    fn on_failure(&self, _ctx: &IngestionContext, severity: IngestionSeverity, _error: &ParseError) {
        self.failures.lock().unwrap().push(severity);
    }

    fn on_alert(&self, _ctx: &IngestionContext, severity: IngestionSeverity, _error: &ParseError) {
        self.alerts.lock().unwrap().push(severity);
    }
}

fn opts_with(obs: Arc<dyn IngestionObserver>, threshold: IngestionSeverity) -> IngestionOptions {
    IngestionOptions {
        observer: Some(obs),
        alert_at_or_above: threshold,
        ..Default::default()
    }
}

#[test]
fn observer_receives_success_stats() {
    let obs = Arc::new(RecordingObserver::default());
    let upload = Upload::from_file_name("ok.csv", b"a,b,c\n1,2,3\n4,5,6\n".to_vec()).unwrap();

    ingest_upload(&upload, &opts_with(obs.clone(), IngestionSeverity::Critical)).unwrap();

    assert_eq!(
        *obs.successes.lock().unwrap(),
        vec![IngestionStats { rows: 2, columns: 3 }]
    );
    assert_eq!(*obs.kinds.lock().unwrap(), vec![UploadKind::Csv]);
    assert!(obs.failures.lock().unwrap().is_empty());
}

#[test]
fn observer_receives_failure_and_alert_on_critical_io_error() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = opts_with(obs.clone(), IngestionSeverity::Critical);

    // Missing file -> Io error -> Critical
    let _ = ingest_from_path("tests/fixtures/does_not_exist.csv", &opts).unwrap_err();

    assert_eq!(*obs.failures.lock().unwrap(), vec![IngestionSeverity::Critical]);
    assert_eq!(*obs.alerts.lock().unwrap(), vec![IngestionSeverity::Critical]);
}

#[test]
fn observer_receives_failure_without_alert_for_parse_error() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = opts_with(obs.clone(), IngestionSeverity::Critical);
    let upload = Upload::from_file_name("bad.csv", b"a,b\n1,\"open\n".to_vec()).unwrap();

    let _ = ingest_upload(&upload, &opts).unwrap_err();

    assert_eq!(*obs.failures.lock().unwrap(), vec![IngestionSeverity::Error]);
    assert!(obs.alerts.lock().unwrap().is_empty());
}

#[test]
fn lower_threshold_alerts_on_parse_error() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = opts_with(obs.clone(), IngestionSeverity::Error);
    let upload = Upload::from_file_name("empty.csv", Vec::new()).unwrap();

    let _ = ingest_upload(&upload, &opts).unwrap_err();

    assert_eq!(*obs.alerts.lock().unwrap(), vec![IngestionSeverity::Error]);
}

#[test]
fn composite_fans_out_to_all_observers() {
    let a = Arc::new(RecordingObserver::default());
    let b = Arc::new(RecordingObserver::default());
    let observers: Vec<Arc<dyn IngestionObserver>> = vec![
        a.clone() as Arc<dyn IngestionObserver>,
        b.clone() as Arc<dyn IngestionObserver>,
        Arc::new(LogObserver),
    ];
    let composite = Arc::new(CompositeObserver::new(observers));
    let upload = Upload::from_file_name("ok.csv", b"x\n1\n".to_vec()).unwrap();

    ingest_upload(&upload, &opts_with(composite, IngestionSeverity::Critical)).unwrap();

    assert_eq!(a.successes.lock().unwrap().len(), 1);
    assert_eq!(b.successes.lock().unwrap().len(), 1);
}

#[derive(Default)]
struct FailureOnly {
    failures: Mutex<Vec<IngestionSeverity>>,
}

impl IngestionObserver for FailureOnly {
    fn on_failure(&self, _ctx: &IngestionContext, severity: IngestionSeverity, _error: &ParseError) {
        self.failures.lock().unwrap().push(severity);
    }
}

#[test]
fn default_alert_forwards_to_failure() {
    let obs = Arc::new(FailureOnly::default());
    let opts = opts_with(obs.clone(), IngestionSeverity::Error);
    let upload = Upload::from_file_name("bad.csv", Vec::new()).unwrap();

    let _ = ingest_upload(&upload, &opts).unwrap_err();

    // One on_failure call plus the alert forwarded through the default on_alert.
    assert_eq!(
        *obs.failures.lock().unwrap(),
        vec![IngestionSeverity::Error, IngestionSeverity::Error]
    );
}

#[test]
fn log_observer_handles_every_event() {
    let opts = opts_with(Arc::new(LogObserver), IngestionSeverity::Error);

    let good = Upload::from_file_name("good.csv", b"x\n1\n".to_vec()).unwrap();
    let bad = Upload::from_file_name("bad.csv", b"a,b\n1,\"open\n".to_vec()).unwrap();
    assert_eq!(ingest_upload(&good, &opts).unwrap().row_count(), 1);
    assert!(matches!(
        ingest_upload(&bad, &opts).unwrap_err(),
        ParseError::UnterminatedQuote { .. }
    ));
}
