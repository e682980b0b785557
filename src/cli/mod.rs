//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the script runner and reports.

pub mod audit;
pub mod check;
pub mod run;

pub use audit::{handle_audit_command, AuditArgs};
pub use check::{handle_check_command, CheckArgs};
pub use run::{handle_run_command, OutputFormat, RunArgs};
