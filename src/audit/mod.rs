//! Audit logging
//!
//! Records every registration, applied distribution and rejected
//! distribution in an append-only JSONL file. The audit log is a trail for
//! people to read; it is never replayed into engine state.
//!
//! # Example
//!
//! ```rust,ignore
//! use shelter_cli::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! let record = engine.register("Ana", DonationType::Money, amount, date, None);
//! logger.log(&AuditEntry::registered(&record))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
