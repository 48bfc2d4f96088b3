//! Structured findings surfaced to the reviewer.
//!
//! Checks do not print anything themselves; they return [`ErrorReport`]
//! values built through the injected [`ReportFactory`] capability, and the
//! caller decides how to surface them.

use serde::Serialize;

/// A structured finding produced by a failed check.
///
/// Created only on failure, immutable, and discarded after being surfaced
/// to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    /// Short human-readable description of what failed.
    pub message: String,
    /// Captured process output backing the failure.
    pub details: String,
}

/// Capability to construct reports.
///
/// Mirrors the host review tool's report-construction surface so checks
/// stay testable without it.
pub trait ReportFactory {
    /// Builds an error-severity report.
    fn make_error(&self, message: &str, details: &str) -> ErrorReport;
}

/// Production report factory.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reporter;

impl ReportFactory for Reporter {
    fn make_error(&self, message: &str, details: &str) -> ErrorReport {
        ErrorReport {
            message: message.to_owned(),
            details: details.to_owned(),
        }
    }
}
