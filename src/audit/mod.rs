//! Operation log for Backuper
//!
//! Records every backup and restore attempt, successful or not, in an
//! append-only log.
//!
//! # Architecture
//!
//! - `AuditEntry`: one attempt, with timestamp, operation, source,
//!   destination, status and error message.
//! - `AuditLogger`: writes entries to the log file using a line-delimited
//!   JSON format (JSONL) and reads them back.
//!
//! # Example
//!
//! ```rust,ignore
//! use backuper::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! let result = backuper::backup::backup(&source, &config);
//! logger.log(&AuditEntry::from_backup(&source, &result))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation, Status};
pub use logger::AuditLogger;
