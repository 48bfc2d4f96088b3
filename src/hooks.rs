//! Review-system lifecycle hooks.
//!
//! The host review tool invokes one entry point when a change is uploaded
//! and another when it is committed. This project applies identical checks
//! at both stages, so both entry points delegate to the same suite.

use crate::checks::{self, Check};
use crate::core::executor::CommandRunner;
use crate::core::report::{ErrorReport, ReportFactory};

/// An ordered collection of named checks.
///
/// Checks run in registration order and their findings are concatenated.
/// Adding a project check means appending it here.
#[derive(Debug, Default)]
pub struct CheckSuite {
    checks: Vec<(&'static str, Check)>,
}

impl CheckSuite {
    /// Creates an empty suite.
    #[must_use]
    pub const fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// Appends a named check to the suite.
    pub fn register(&mut self, name: &'static str, check: Check) {
        self.checks.push((name, check));
    }

    /// Returns the registered check names, in run order.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.checks.iter().map(|(name, _)| *name).collect()
    }

    /// Runs every check in order, concatenating their findings.
    pub fn run(
        &self,
        runner: &dyn CommandRunner,
        reports: &dyn ReportFactory,
    ) -> Vec<ErrorReport> {
        let mut results = Vec::new();

        for (name, check) in &self.checks {
            tracing::debug!(check = *name, "running check");
            results.extend(check(runner, reports));
        }

        results
    }
}

/// The suite applied to every change in this project.
#[must_use]
pub fn common_checks() -> CheckSuite {
    let mut suite = CheckSuite::new();
    suite.register("run-tests", checks::run_tests::run);
    suite
}

/// Entry point for the "on upload" lifecycle hook.
pub fn check_change_on_upload(
    runner: &dyn CommandRunner,
    reports: &dyn ReportFactory,
) -> Vec<ErrorReport> {
    common_checks().run(runner, reports)
}

/// Entry point for the "on commit" lifecycle hook.
///
/// Identical to [`check_change_on_upload`]: both stages run the same
/// checks, the two names exist to satisfy the host contract.
pub fn check_change_on_commit(
    runner: &dyn CommandRunner,
    reports: &dyn ReportFactory,
) -> Vec<ErrorReport> {
    common_checks().run(runner, reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::Result;
    use crate::core::executor::CommandOutput;
    use crate::core::report::Reporter;
    use pretty_assertions::assert_eq;

    // =========================================================================
    // Helper stubs
    // =========================================================================

    /// Stub runner that makes every subprocess exit with the given code.
    struct AlwaysExit(i32);

    impl CommandRunner for AlwaysExit {
        fn run(&self, _argv: &[&str]) -> Result<CommandOutput> {
            Ok(CommandOutput {
                exit_code: self.0,
                stdout: "captured output".to_string(),
                stderr: String::new(),
            })
        }
    }

    fn check_a(_: &dyn CommandRunner, reports: &dyn ReportFactory) -> Vec<ErrorReport> {
        vec![reports.make_error("a failed", "a details")]
    }

    fn check_b(_: &dyn CommandRunner, reports: &dyn ReportFactory) -> Vec<ErrorReport> {
        vec![
            reports.make_error("b failed", "b details"),
            reports.make_error("b failed again", ""),
        ]
    }

    fn check_clean(_: &dyn CommandRunner, _: &dyn ReportFactory) -> Vec<ErrorReport> {
        Vec::new()
    }

    // =========================================================================
    // CheckSuite tests
    // =========================================================================

    #[test]
    fn test_empty_suite_yields_no_reports() {
        let suite = CheckSuite::new();
        let reports = suite.run(&AlwaysExit(1), &Reporter);
        assert!(reports.is_empty());
    }

    #[test]
    fn test_suite_concatenates_in_registration_order() {
        let mut suite = CheckSuite::new();
        suite.register("a", check_a);
        suite.register("b", check_b);

        let reports = suite.run(&AlwaysExit(0), &Reporter);

        assert_eq!(reports.len(), 3);
        assert_eq!(reports[0].message, "a failed");
        assert_eq!(reports[1].message, "b failed");
        assert_eq!(reports[2].message, "b failed again");
    }

    #[test]
    fn test_suite_skips_nothing_on_failure() {
        // A failing check does not stop later checks from running
        let mut suite = CheckSuite::new();
        suite.register("a", check_a);
        suite.register("clean", check_clean);
        suite.register("b", check_b);

        let reports = suite.run(&AlwaysExit(0), &Reporter);
        assert_eq!(reports.len(), 3);
    }

    #[test]
    fn test_suite_names_in_order() {
        let mut suite = CheckSuite::new();
        suite.register("first", check_clean);
        suite.register("second", check_clean);
        assert_eq!(suite.names(), vec!["first", "second"]);
    }

    #[test]
    fn test_common_checks_registers_run_tests() {
        assert_eq!(common_checks().names(), vec!["run-tests"]);
    }

    // =========================================================================
    // Entry point tests
    // =========================================================================

    #[test]
    fn test_upload_and_commit_agree_on_success() {
        let runner = AlwaysExit(0);
        let upload = check_change_on_upload(&runner, &Reporter);
        let commit = check_change_on_commit(&runner, &Reporter);

        assert_eq!(upload, commit);
        assert!(upload.is_empty());
    }

    #[test]
    fn test_upload_and_commit_agree_on_failure() {
        let runner = AlwaysExit(1);
        let upload = check_change_on_upload(&runner, &Reporter);
        let commit = check_change_on_commit(&runner, &Reporter);

        assert_eq!(upload, commit);
        assert_eq!(upload.len(), 1);
        assert_eq!(upload[0].message, "run_tests.sh failed.");
        assert!(upload[0].details.contains("captured output"));
    }
}
