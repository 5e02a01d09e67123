//! Operation log entry data structures
//!
//! Defines the operation and status types and the entry format itself.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::backup::{BackupOutcome, EntryKind, RestoreOutcome};
use crate::error::{BackuperError, BackuperResult};

/// Operations recorded in the log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// A backup was created from an original
    Backup,
    /// An original was restored from a backup
    Restore,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Backup => write!(f, "Backup"),
            Operation::Restore => write!(f, "Restore"),
        }
    }
}

/// Whether the operation completed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Failed,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Success => write!(f, "OK"),
            Status::Failed => write!(f, "FAILED"),
        }
    }
}

/// A single operation log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Backup or restore
    pub operation: Operation,

    /// File or directory; absent when the source could not be stat'ed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_kind: Option<EntryKind>,

    /// Path the operation copied from
    pub source: PathBuf,

    /// Path the operation copied to; absent when it failed before copying
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<PathBuf>,

    /// Outcome of the operation
    pub status: Status,

    /// Error message for failed operations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AuditEntry {
    /// Record the result of a backup of `source`
    pub fn from_backup(source: &Path, result: &BackuperResult<BackupOutcome>) -> Self {
        match result {
            Ok(outcome) => Self::succeeded(
                Operation::Backup,
                outcome.kind,
                &outcome.source,
                &outcome.destination,
            ),
            Err(err) => Self::failed(Operation::Backup, source, err),
        }
    }

    /// Record the result of a restore from `backup`
    pub fn from_restore(backup: &Path, result: &BackuperResult<RestoreOutcome>) -> Self {
        match result {
            Ok(outcome) => Self::succeeded(
                Operation::Restore,
                outcome.kind,
                &outcome.backup,
                &outcome.original,
            ),
            Err(err) => Self::failed(Operation::Restore, backup, err),
        }
    }

    fn succeeded(operation: Operation, kind: EntryKind, source: &Path, destination: &Path) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            entry_kind: Some(kind),
            source: source.to_path_buf(),
            destination: Some(destination.to_path_buf()),
            status: Status::Success,
            error: None,
        }
    }

    fn failed(operation: Operation, source: &Path, err: &BackuperError) -> Self {
        let message = match err {
            BackuperError::Access { message, .. } | BackuperError::Copy { message, .. } => {
                message.clone()
            }
            other => other.to_string(),
        };

        Self {
            timestamp: Utc::now(),
            operation,
            entry_kind: None,
            source: source.to_path_buf(),
            destination: None,
            status: Status::Failed,
            error: Some(message),
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.status,
            self.source.display()
        );

        if let Some(destination) = &self.destination {
            output.push_str(&format!(" -> {}", destination.display()));
        }

        if let Some(error) = &self.error {
            output.push_str(&format!("\n  Error: {}", error));
        }

        output
    }
}
