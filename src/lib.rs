//! # presubmit-checks
//!
//! Presubmit check runner for code-review hooks.
//!
//! The review tool invokes an entry point when a change is uploaded or
//! committed; each registered check inspects the change and returns zero
//! or more structured error reports. This project carries one check: run
//! `./run_tests.sh` and surface a failing run to the reviewer.
//!
//! ## Example
//!
//! ```rust,no_run
//! use presubmit_checks::{check_change_on_upload, Executor, Reporter};
//!
//! let executor = Executor::new();
//! let reports = check_change_on_upload(&executor, &Reporter);
//!
//! for report in &reports {
//!     eprintln!("{}\n{}", report.message, report.details);
//! }
//! assert!(reports.is_empty(), "presubmit checks failed");
//! ```

#![doc(html_root_url = "https://docs.rs/presubmit-checks/0.1.0")]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod checks;
pub mod cli;
pub mod core;
pub mod hooks;

// Re-export main types for convenience
pub use crate::core::error::{Error, Result};
pub use crate::core::executor::{CommandOutput, CommandRunner, Executor};
pub use crate::core::report::{ErrorReport, ReportFactory, Reporter};
pub use crate::hooks::{check_change_on_commit, check_change_on_upload, CheckSuite};
