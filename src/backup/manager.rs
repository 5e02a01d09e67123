//! Backup creation
//!
//! Copies a file or directory to the path rendered from the naming pattern.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use super::copy::{duplicate, inspect, EntryKind};
use super::naming::resolve_backup_name;
use crate::audit::Operation;
use crate::config::settings::BackupConfig;
use crate::error::BackuperResult;

/// Result of a successful backup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupOutcome {
    /// Entry that was backed up
    pub source: PathBuf,
    /// Where the backup was written
    pub destination: PathBuf,
    /// Whether a file or a directory tree was copied
    pub kind: EntryKind,
}

/// Creates backups using a naming configuration
pub struct BackupManager {
    config: BackupConfig,
}

impl BackupManager {
    /// Create a new BackupManager
    pub fn new(config: BackupConfig) -> Self {
        Self { config }
    }

    /// Back up `source` using the current time for `{timestamp}`
    pub fn create_backup(&self, source: &Path) -> BackuperResult<BackupOutcome> {
        self.create_backup_at(source, Utc::now())
    }

    /// Back up `source`, rendering `{timestamp}` from `now`
    ///
    /// The source is stat'ed before anything else; an inaccessible source
    /// aborts with an access error and leaves the filesystem untouched.
    pub fn create_backup_at(
        &self,
        source: &Path,
        now: DateTime<Utc>,
    ) -> BackuperResult<BackupOutcome> {
        let kind = inspect(source)?;
        let destination = resolve_backup_name(source, &self.config, now);

        duplicate(Operation::Backup, source, &destination, kind)?;

        Ok(BackupOutcome {
            source: source.to_path_buf(),
            destination,
            kind,
        })
    }

    /// The backup path `source` would get at `now`, without touching disk
    pub fn backup_path_for(&self, source: &Path, now: DateTime<Utc>) -> PathBuf {
        resolve_backup_name(source, &self.config, now)
    }
}
