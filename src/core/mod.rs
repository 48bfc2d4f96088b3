//! Core functionality for presubmit-checks.
//!
//! This module contains the main components:
//! - [`error`]: Error types and result handling
//! - [`executor`]: Subprocess execution with output capture
//! - [`report`]: The report shape surfaced to reviewers

pub mod error;
pub mod executor;
pub mod report;
