//! CLI command implementations.

use crate::core::error::{Error, Result};
use crate::core::executor::{CommandRunner, Executor};
use crate::core::report::{ErrorReport, ReportFactory, Reporter};
use crate::hooks;
use console::style;
use std::path::Path;
use std::process::ExitCode;

/// A lifecycle hook entry point.
type Hook = fn(&dyn CommandRunner, &dyn ReportFactory) -> Vec<ErrorReport>;

/// Run the on-upload checks.
pub fn upload(cwd: Option<&Path>, json: bool) -> Result<ExitCode> {
    run_stage("upload", hooks::check_change_on_upload, cwd, json)
}

/// Run the on-commit checks.
pub fn commit(cwd: Option<&Path>, json: bool) -> Result<ExitCode> {
    run_stage("commit", hooks::check_change_on_commit, cwd, json)
}

/// Runs one lifecycle stage and surfaces its reports.
fn run_stage(stage: &str, hook: Hook, cwd: Option<&Path>, json: bool) -> Result<ExitCode> {
    let mut executor = Executor::new();
    if let Some(dir) = cwd {
        executor = executor.cwd(dir);
    }

    tracing::debug!(stage, "running presubmit checks");

    let reports = hook(&executor, &Reporter);

    if json {
        let out = serde_json::to_string_pretty(&reports)
            .map_err(|e| Error::internal(format!("Failed to serialize reports: {e}")))?;
        println!("{out}");
    } else if reports.is_empty() {
        eprintln!("{} All presubmit checks passed", style("✓").green());
    } else {
        for report in &reports {
            eprintln!("{} {}", style("✗").red(), report.message);
            if !report.details.is_empty() {
                eprintln!("{}", report.details.trim_end());
            }
        }
    }

    if reports.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

/// List the registered checks in run order.
pub fn list() -> Result<ExitCode> {
    let suite = hooks::common_checks();

    eprintln!("Presubmit checks (upload and commit stages are identical):");
    for name in suite.names() {
        eprintln!("  {} {name}", style("•").cyan());
    }

    Ok(ExitCode::SUCCESS)
}

/// Generate shell completions.
pub fn completions(shell: clap_complete::Shell) {
    use clap::CommandFactory;

    let mut cmd = super::Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
}
