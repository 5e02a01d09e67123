//! Backup restoration
//!
//! Copies a backup back onto the path obtained by stripping the identifier
//! from the backup path. The original path is never recomputed from the
//! pattern, so patterns that don't embed the identifier can't be restored.

use std::path::{Path, PathBuf};

use super::copy::{duplicate, inspect, EntryKind};
use super::naming::derive_original_path_scoped;
use crate::audit::Operation;
use crate::config::settings::BackupConfig;
use crate::error::BackuperResult;

/// Result of a successful restore
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestoreOutcome {
    /// Backup that was restored
    pub backup: PathBuf,
    /// Original path that was recreated or overwritten
    pub original: PathBuf,
    /// Whether a file or a directory tree was copied
    pub kind: EntryKind,
}

/// Handles restoring from backups
pub struct RestoreManager {
    config: BackupConfig,
}

impl RestoreManager {
    /// Create a new RestoreManager
    pub fn new(config: BackupConfig) -> Self {
        Self { config }
    }

    /// Restore `backup` over its original path
    ///
    /// Existing content at the original path is overwritten. For directories
    /// entries only present at the original path are left alone.
    pub fn restore_from(&self, backup: &Path) -> BackuperResult<RestoreOutcome> {
        let kind = inspect(backup)?;
        let original = self.original_path_for(backup);

        duplicate(Operation::Restore, backup, &original, kind)?;

        Ok(RestoreOutcome {
            backup: backup.to_path_buf(),
            original,
            kind,
        })
    }

    /// The path a backup would be restored to
    pub fn original_path_for(&self, backup: &Path) -> PathBuf {
        derive_original_path_scoped(backup, &self.config.identifier, self.config.restore_scope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backup::BackupManager;
    use crate::config::settings::StripScope;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_managers() -> (BackupManager, RestoreManager, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let config = BackupConfig::default();
        (
            BackupManager::new(config.clone()),
            RestoreManager::new(config),
            temp_dir,
        )
    }

    #[test]
    fn test_restore_file_after_delete() {
        let (backup_manager, restore_manager, temp) = create_test_managers();
        let source = temp.path().join("notes.txt");
        fs::write(&source, "hello").unwrap();

        let backup = backup_manager.create_backup(&source).unwrap();
        fs::remove_file(&source).unwrap();
        assert!(!source.exists());

        let result = restore_manager.restore_from(&backup.destination).unwrap();

        assert_eq!(result.original, source);
        assert_eq!(result.kind, EntryKind::File);
        assert_eq!(fs::read_to_string(&source).unwrap(), "hello");
        assert!(backup.destination.exists());
    }

    #[test]
    fn test_restore_overwrites_modified_original() {
        let (backup_manager, restore_manager, temp) = create_test_managers();
        let source = temp.path().join("config.toml");
        fs::write(&source, "good = true").unwrap();

        let backup = backup_manager.create_backup(&source).unwrap();
        fs::write(&source, "broken").unwrap();

        restore_manager.restore_from(&backup.destination).unwrap();

        assert_eq!(fs::read_to_string(&source).unwrap(), "good = true");
    }

    #[test]
    fn test_restore_directory_after_delete() {
        let (backup_manager, restore_manager, temp) = create_test_managers();
        let source = temp.path().join("testdir");
        fs::create_dir_all(source.join("sub")).unwrap();
        fs::write(source.join("a.txt"), "a").unwrap();
        fs::write(source.join("sub").join("b.txt"), "b").unwrap();

        let backup = backup_manager.create_backup(&source).unwrap();
        fs::remove_dir_all(&source).unwrap();

        let result = restore_manager.restore_from(&backup.destination).unwrap();

        assert_eq!(result.original, source);
        assert_eq!(result.kind, EntryKind::Directory);
        assert_eq!(fs::read_to_string(source.join("a.txt")).unwrap(), "a");
        assert_eq!(fs::read_to_string(source.join("sub").join("b.txt")).unwrap(), "b");
    }

    #[test]
    fn test_restore_missing_backup_is_access_error() {
        let (_, restore_manager, temp) = create_test_managers();
        let backup = temp.path().join("notes.txt.bak");

        let err = restore_manager.restore_from(&backup).unwrap_err();

        assert!(err.is_access());
        assert!(!temp.path().join("notes.txt").exists());
    }

    #[test]
    fn test_restore_without_identifier_is_copy_error() {
        let (_, restore_manager, temp) = create_test_managers();
        let plain = temp.path().join("notes.txt");
        fs::write(&plain, "hello").unwrap();

        let err = restore_manager.restore_from(&plain).unwrap_err();

        assert!(err.is_copy());
        assert_eq!(fs::read_to_string(&plain).unwrap(), "hello");
    }

    #[test]
    fn test_restore_strips_identifier_from_parent_dirs() {
        let (_, restore_manager, temp) = create_test_managers();
        let parent = temp.path().join("old.bak");
        fs::create_dir_all(&parent).unwrap();
        fs::create_dir_all(temp.path().join("old")).unwrap();
        let backup = parent.join("notes.txt.bak");
        fs::write(&backup, "x").unwrap();

        let result = restore_manager.restore_from(&backup).unwrap();

        assert_eq!(result.original, temp.path().join("old").join("notes.txt"));
    }

    #[test]
    fn test_restore_file_name_scope() {
        let temp = TempDir::new().unwrap();
        let restore_manager = RestoreManager::new(BackupConfig {
            restore_scope: StripScope::FileName,
            ..BackupConfig::default()
        });
        let parent = temp.path().join("old.bak");
        fs::create_dir_all(&parent).unwrap();
        let backup = parent.join("notes.txt.bak");
        fs::write(&backup, "x").unwrap();

        let result = restore_manager.restore_from(&backup).unwrap();

        assert_eq!(result.original, parent.join("notes.txt"));
        assert_eq!(fs::read_to_string(parent.join("notes.txt")).unwrap(), "x");
    }
}
