//! User-facing messages for a host
//!
//! Turns backup and restore results into the single line of text a host
//! shows its user. The core never displays anything itself.

use crate::backup::{BackupOutcome, RestoreOutcome};
use crate::error::{BackuperError, BackuperResult};

/// Severity of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A message for the host to display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    fn success(message: String) -> Self {
        Self {
            level: NoticeLevel::Success,
            message,
        }
    }

    fn error(err: &BackuperError) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: err.to_string(),
        }
    }

    /// Notice for the result of a backup
    pub fn for_backup(result: &BackuperResult<BackupOutcome>) -> Self {
        match result {
            Ok(outcome) => Self::success(format!(
                "Backup created: {}",
                outcome.destination.display()
            )),
            Err(err) => Self::error(err),
        }
    }

    /// Notice for the result of a restore
    pub fn for_restore(result: &BackuperResult<RestoreOutcome>) -> Self {
        match result {
            Ok(outcome) => Self::success(format!(
                "{} restored: {}",
                outcome.kind,
                outcome.original.display()
            )),
            Err(err) => Self::error(err),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::backup::EntryKind;
    use std::path::PathBuf;

    #[test]
    fn test_backup_success_message() {
        let result = Ok(BackupOutcome {
            source: PathBuf::from("/d/notes.txt"),
            destination: PathBuf::from("/d/notes.txt.bak"),
            kind: EntryKind::File,
        });
        let notice = Notice::for_backup(&result);

        assert_eq!(notice.level, NoticeLevel::Success);
        assert_eq!(notice.message, "Backup created: /d/notes.txt.bak");
    }

    #[test]
    fn test_restore_success_messages() {
        let file = Notice::for_restore(&Ok(RestoreOutcome {
            backup: PathBuf::from("/d/notes.txt.bak"),
            original: PathBuf::from("/d/notes.txt"),
            kind: EntryKind::File,
        }));
        assert_eq!(file.message, "File restored: /d/notes.txt");

        let dir = Notice::for_restore(&Ok(RestoreOutcome {
            backup: PathBuf::from("/d/site.bak"),
            original: PathBuf::from("/d/site"),
            kind: EntryKind::Directory,
        }));
        assert_eq!(dir.message, "Directory restored: /d/site");
    }

    #[test]
    fn test_error_messages() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let access: BackuperResult<BackupOutcome> =
            Err(BackuperError::access("/d/ghost", &io_err));
        let notice = Notice::for_backup(&access);
        assert!(notice.is_error());
        assert_eq!(notice.message, "Error accessing /d/ghost: missing");

        let copy: BackuperResult<RestoreOutcome> =
            Err(BackuperError::copy(Operation::Restore, "disk full"));
        assert_eq!(Notice::for_restore(&copy).to_string(), "Restore failed: disk full");
    }
}
