//! Diagnostic reporting for soft-failure paths.
//!
//! Query and deletion paths in this engine never return errors to the
//! caller. Instead, every failure becomes an absent result plus one call
//! into an [`ErrorSink`]. The sink is the leaf of the error path: it must
//! not panic and must not block indefinitely.

use crate::error::StoreError;
use parking_lot::Mutex;
use std::fmt;

/// A structured diagnostic describing one failed operation.
#[derive(Debug)]
pub struct ErrorReport<'a> {
    /// Name of the operation that failed (`"get"`, `"delete"`, ...).
    pub operation: &'static str,
    /// Collection the operation targeted, if any.
    pub collection: Option<&'a str>,
    /// Document id the operation targeted, if any.
    pub id: Option<&'a str>,
    /// The underlying failure.
    pub error: &'a StoreError,
}

impl fmt::Display for ErrorReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.operation)?;
        if let Some(collection) = self.collection {
            write!(f, " {collection}")?;
            if let Some(id) = self.id {
                write!(f, "/{id}")?;
            }
        }
        write!(f, ": {}", self.error)
    }
}

/// Receives diagnostics from soft-failure paths.
///
/// Implementations make no decisions: a report has no control effect on
/// the operation that produced it, which has already returned its absent
/// result by the time the sink runs.
///
/// # Implementors
///
/// - [`TracingSink`] - The default; forwards to the `tracing` facade.
/// - [`MemorySink`] - Collects reports in memory for tests and inspection.
pub trait ErrorSink: Send + Sync {
    /// Delivers one diagnostic. Fire-and-forget.
    fn report(&self, report: &ErrorReport<'_>);
}

/// The default sink: forwards every report to `tracing::warn!`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl ErrorSink for TracingSink {
    fn report(&self, report: &ErrorReport<'_>) {
        tracing::warn!(
            operation = report.operation,
            collection = report.collection,
            id = report.id,
            error = %report.error,
            "store operation failed"
        );
    }
}

/// A sink that collects rendered reports in memory.
///
/// Useful in tests to assert that a soft failure was reported, and in
/// host applications that want to surface diagnostics somewhere other
/// than a log stream.
///
/// # Example
///
/// ```rust,ignore
/// let sink = Arc::new(MemorySink::new());
/// let catalog = Catalog::with_sink(path, sink.clone());
/// // ... operations ...
/// assert!(sink.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct MemorySink {
    reports: Mutex<Vec<String>>,
}

impl MemorySink {
    /// Creates a new empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of all reports received so far.
    #[must_use]
    pub fn reports(&self) -> Vec<String> {
        self.reports.lock().clone()
    }

    /// Returns the number of reports received.
    #[must_use]
    pub fn len(&self) -> usize {
        self.reports.lock().len()
    }

    /// Returns true if no reports have been received.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reports.lock().is_empty()
    }

    /// Discards all collected reports.
    pub fn clear(&self) {
        self.reports.lock().clear();
    }
}

impl ErrorSink for MemorySink {
    fn report(&self, report: &ErrorReport<'_>) {
        self.reports.lock().push(report.to_string());
    }
}
