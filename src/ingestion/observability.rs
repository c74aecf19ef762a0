use std::fmt;
use std::sync::Arc;

use crate::error::ParseError;

use super::unified::UploadKind;

/// Severity classification used for observer callbacks and alerting thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum IngestionSeverity {
    /// Informational event.
    Info,
    /// Warning-level event (non-fatal).
    Warning,
    /// Error-level event (the upload could not be parsed).
    Error,
    /// Critical error (I/O or other infrastructure failures).
    Critical,
}

/// Context about an ingestion attempt.
#[derive(Debug, Clone)]
pub struct IngestionContext {
    /// Name of the uploaded file.
    pub file_name: String,
    /// Kind the upload was ingested as.
    pub kind: UploadKind,
}

/// Stats reported on successful ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestionStats {
    /// Number of ingested rows (before shaping).
    pub rows: usize,
    /// Number of header columns.
    pub columns: usize,
}

/// Observer interface for ingestion outcomes.
pub trait IngestionObserver: Send + Sync {
    /// Called when ingestion succeeds.
    fn on_success(&self, _ctx: &IngestionContext, _stats: IngestionStats) {}

    /// Called when ingestion fails.
    fn on_failure(&self, _ctx: &IngestionContext, _severity: IngestionSeverity, _error: &ParseError) {}

    /// Called when an ingestion failure meets an alert threshold.
    ///
    /// Default behavior forwards to [`Self::on_failure`].
    fn on_alert(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &ParseError) {
        self.on_failure(ctx, severity, error)
    }
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn IngestionObserver>>,
}

impl CompositeObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn IngestionObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl IngestionObserver for CompositeObserver {
    fn on_success(&self, ctx: &IngestionContext, stats: IngestionStats) {
        for o in &self.observers {
            o.on_success(ctx, stats);
        }
    }

    fn on_failure(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &ParseError) {
        for o in &self.observers {
            o.on_failure(ctx, severity, error);
        }
    }

    fn on_alert(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &ParseError) {
        for o in &self.observers {
            o.on_alert(ctx, severity, error);
        }
    }
}

/// Forwards ingestion events to the [`log`] facade under the `ingest` target.
#[derive(Debug, Default)]
pub struct LogObserver;

impl IngestionObserver for LogObserver {
    fn on_success(&self, ctx: &IngestionContext, stats: IngestionStats) {
        log::info!(
            target: "ingest",
            "ok kind={:?} file={} rows={} columns={}",
            ctx.kind,
            ctx.file_name,
            stats.rows,
            stats.columns
        );
    }

    fn on_failure(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &ParseError) {
        log::warn!(
            target: "ingest",
            "fail severity={:?} kind={:?} file={} err={}",
            severity,
            ctx.kind,
            ctx.file_name,
            error
        );
    }

    fn on_alert(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &ParseError) {
        log::error!(
            target: "ingest",
            "ALERT severity={:?} kind={:?} file={} err={}",
            severity,
            ctx.kind,
            ctx.file_name,
            error
        );
    }
}
