//! Backup and restore of single files and directories
//!
//! # Architecture
//!
//! The backup system consists of three parts:
//!
//! - `naming`: renders the backup path from a pattern and derives the
//!   original path back from a backup path. Pure, no I/O.
//! - `BackupManager`: stats the source and copies it to its backup path.
//! - `RestoreManager`: stats a backup and copies it over its original path.
//!
//! # Naming
//!
//! The pattern accepts `{name}`, `{ext}`, `{timestamp}` and `{identifier}`.
//! With the default `{name}{ext}{identifier}` and identifier `.bak`,
//! `notes.txt` is backed up to `notes.txt.bak`, and restoring
//! `notes.txt.bak` strips `.bak` to get `notes.txt` back.
//!
//! # Example
//!
//! ```rust,ignore
//! use backuper::backup;
//! use backuper::config::BackupConfig;
//!
//! let config = BackupConfig::default();
//! let outcome = backup::backup(Path::new("notes.txt"), &config)?;
//! std::fs::remove_file("notes.txt")?;
//! backup::restore(&outcome.destination, &config)?;
//! ```

mod copy;
mod manager;
pub mod naming;
mod restore;

use std::path::Path;

use crate::config::settings::BackupConfig;
use crate::error::BackuperResult;

pub use copy::EntryKind;
pub use manager::{BackupManager, BackupOutcome};
pub use naming::{derive_original_path, resolve_backup_name};
pub use restore::{RestoreManager, RestoreOutcome};

/// Back up `source` next to itself using `config`
pub fn backup(source: &Path, config: &BackupConfig) -> BackuperResult<BackupOutcome> {
    BackupManager::new(config.clone()).create_backup(source)
}

/// Restore `backup_path` over the path derived by stripping the identifier
pub fn restore(backup_path: &Path, config: &BackupConfig) -> BackuperResult<RestoreOutcome> {
    RestoreManager::new(config.clone()).restore_from(backup_path)
}
