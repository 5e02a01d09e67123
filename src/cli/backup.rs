//! Backup and restore CLI commands
//!
//! Runs a single backup or restore, records it in the operation log and
//! returns the notice to show the user.

use std::path::PathBuf;

use clap::Args;

use crate::audit::{AuditEntry, AuditLogger};
use crate::backup::{BackupManager, RestoreManager};
use crate::config::paths::BackuperPaths;
use crate::config::settings::{Settings, StripScope};
use crate::notice::Notice;

/// Arguments for `backuper backup`
#[derive(Args, Debug)]
pub struct BackupArgs {
    /// File or directory to back up
    pub path: PathBuf,

    /// Naming pattern, overriding the configured one
    #[arg(short, long, env = "BACKUPER_PATTERN")]
    pub pattern: Option<String>,

    /// Identifier, overriding the configured one
    #[arg(short, long, env = "BACKUPER_IDENTIFIER")]
    pub identifier: Option<String>,
}

/// Arguments for `backuper restore`
#[derive(Args, Debug)]
pub struct RestoreArgs {
    /// Backup file or directory to restore from
    pub path: PathBuf,

    /// Identifier to strip, overriding the configured one
    #[arg(short, long, env = "BACKUPER_IDENTIFIER")]
    pub identifier: Option<String>,

    /// Strip the identifier from the file name only, not parent directories
    #[arg(long)]
    pub file_name_only: bool,
}

/// Handle `backuper backup`
pub fn handle_backup_command(paths: &BackuperPaths, settings: &Settings, args: BackupArgs) -> Notice {
    let config = settings
        .backup_config()
        .with_overrides(args.pattern, args.identifier);

    let result = BackupManager::new(config).create_backup(&args.path);

    if settings.audit_enabled {
        record(paths, &AuditEntry::from_backup(&args.path, &result));
    }

    Notice::for_backup(&result)
}

/// Handle `backuper restore`
pub fn handle_restore_command(
    paths: &BackuperPaths,
    settings: &Settings,
    args: RestoreArgs,
) -> Notice {
    let mut config = settings.backup_config().with_overrides(None, args.identifier);
    if args.file_name_only {
        config.restore_scope = StripScope::FileName;
    }

    let result = RestoreManager::new(config).restore_from(&args.path);

    if settings.audit_enabled {
        record(paths, &AuditEntry::from_restore(&args.path, &result));
    }

    Notice::for_restore(&result)
}

/// Append to the operation log; a failure here never changes the outcome
fn record(paths: &BackuperPaths, entry: &AuditEntry) {
    let logger = AuditLogger::new(paths.audit_log());
    if let Err(e) = logger.log(entry) {
        eprintln!("Warning: could not record operation: {}", e);
    }
}
