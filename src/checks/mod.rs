//! Presubmit checks.
//!
//! A check inspects the pending change and returns zero or more findings.
//! Checks are plain functions over the two injected capabilities so they
//! can be run by the real CLI or by tests with stubbed hosts.


use crate::core::executor::CommandRunner;
use crate::core::report::{ErrorReport, ReportFactory};

/// A check function: runs against the injected host capabilities and
/// returns its findings. An empty vector means the check passed.
pub type Check = fn(&dyn CommandRunner, &dyn ReportFactory) -> Vec<ErrorReport>;
