//! Command execution for running checks.
//!
//! This module provides the [`CommandRunner`] capability that checks are
//! written against, and [`Executor`], the production implementation that
//! runs a subprocess with output capture.

use crate::core::error::{Error, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Output from a command execution.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Exit code of the command.
    pub exit_code: i32,
    /// Standard output.
    pub stdout: String,
    /// Standard error.
    pub stderr: String,
}

impl CommandOutput {
    /// Returns true if the command succeeded (exit code 0).
    #[must_use]
    pub const fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Returns combined stdout and stderr output.
    #[must_use]
    pub fn combined_output(&self) -> String {
        if self.stderr.is_empty() {
            self.stdout.clone()
        } else if self.stdout.is_empty() {
            self.stderr.clone()
        } else {
            format!("{}\n{}", self.stdout, self.stderr)
        }
    }
}

/// Capability to run an external command and capture its output.
///
/// Checks receive this as an injected dependency, so tests can substitute
/// a stub instead of spawning real processes. A launch failure (binary
/// missing, not executable) is an `Err`; a process that ran and exited
/// non-zero is an `Ok` with a non-zero `exit_code`.
pub trait CommandRunner {
    /// Runs `argv` to completion, blocking until the process exits.
    fn run(&self, argv: &[&str]) -> Result<CommandOutput>;
}

/// Executor for running commands as blocking subprocesses.
#[derive(Debug, Clone, Default)]
pub struct Executor {
    cwd: Option<PathBuf>,
}

impl Executor {
    /// Creates a new executor running commands in the current directory.
    #[must_use]
    pub const fn new() -> Self {
        Self { cwd: None }
    }

    /// Sets the working directory commands run in.
    #[must_use]
    pub fn cwd(mut self, path: impl AsRef<Path>) -> Self {
        self.cwd = Some(path.as_ref().to_path_buf());
        self
    }
}

impl CommandRunner for Executor {
    fn run(&self, argv: &[&str]) -> Result<CommandOutput> {
        let (program, args) = argv.split_first().ok_or(Error::EmptyCommand)?;

        let mut cmd = Command::new(program);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        if let Some(ref cwd) = self.cwd {
            cmd.current_dir(cwd);
        }

        let output = cmd.output().map_err(|e| Error::launch(*program, e))?;

        Ok(CommandOutput {
            // A missing code means the process was killed by a signal
            exit_code: output.status.code().unwrap_or(1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
