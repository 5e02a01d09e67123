//! User settings for Backuper
//!
//! Holds the naming pattern, the identifier, the restore strip scope and
//! whether operations are recorded in the operation log.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::paths::BackuperPaths;
use crate::error::BackuperError;

/// Default naming pattern: the original name with the identifier appended
pub const DEFAULT_PATTERN: &str = "{name}{ext}{identifier}";

/// Default identifier marking a backup
pub const DEFAULT_IDENTIFIER: &str = ".bak";

/// Which part of a backup path the identifier is stripped from on restore
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StripScope {
    /// Strip every occurrence anywhere in the path
    #[default]
    FullPath,
    /// Strip only from the final path component
    FileName,
}

impl fmt::Display for StripScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StripScope::FullPath => write!(f, "full_path"),
            StripScope::FileName => write!(f, "file_name"),
        }
    }
}

impl FromStr for StripScope {
    type Err = BackuperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "full_path" | "path" => Ok(StripScope::FullPath),
            "file_name" | "filename" | "name" => Ok(StripScope::FileName),
            other => Err(BackuperError::Config(format!(
                "Unknown restore scope '{}' (expected full_path or file_name)",
                other
            ))),
        }
    }
}

/// Naming configuration passed into every backup and restore call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupConfig {
    /// Template with `{name}`, `{ext}`, `{timestamp}` and `{identifier}` placeholders
    pub pattern: String,
    /// Literal marker inserted by the pattern and stripped on restore
    pub identifier: String,
    /// Where the identifier is stripped from on restore
    pub restore_scope: StripScope,
}

impl Default for BackupConfig {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_PATTERN.to_string(),
            identifier: DEFAULT_IDENTIFIER.to_string(),
            restore_scope: StripScope::default(),
        }
    }
}

impl BackupConfig {
    /// Override the pattern and identifier where a value is given
    pub fn with_overrides(mut self, pattern: Option<String>, identifier: Option<String>) -> Self {
        if let Some(pattern) = pattern {
            self.pattern = pattern;
        }
        if let Some(identifier) = identifier {
            self.identifier = identifier;
        }
        self
    }
}

/// User settings for Backuper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Backup naming pattern
    #[serde(default = "default_pattern")]
    pub pattern: String,

    /// Identifier marking backup names
    #[serde(default = "default_identifier")]
    pub identifier: String,

    /// Strip scope used when deriving the original path on restore
    #[serde(default)]
    pub restore_scope: StripScope,

    /// Whether backup/restore attempts are recorded in the operation log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_pattern() -> String {
    DEFAULT_PATTERN.to_string()
}

fn default_identifier() -> String {
    DEFAULT_IDENTIFIER.to_string()
}

fn default_audit_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            pattern: default_pattern(),
            identifier: default_identifier(),
            restore_scope: StripScope::default(),
            audit_enabled: default_audit_enabled(),
        }
    }
}

impl Settings {
    /// Build the naming configuration for a single invocation
    pub fn backup_config(&self) -> BackupConfig {
        BackupConfig {
            pattern: self.pattern.clone(),
            identifier: self.identifier.clone(),
            restore_scope: self.restore_scope,
        }
    }

    /// Set a setting by key from its textual value
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), BackuperError> {
        match key {
            "pattern" => self.pattern = value.to_string(),
            "identifier" => self.identifier = value.to_string(),
            "restore-scope" | "restore_scope" => self.restore_scope = value.parse()?,
            "audit" | "audit_enabled" => {
                self.audit_enabled = value.parse().map_err(|_| {
                    BackuperError::Config(format!(
                        "Invalid value '{}' for audit (expected true or false)",
                        value
                    ))
                })?
            }
            other => {
                return Err(BackuperError::Config(format!("Unknown setting '{}'", other)));
            }
        }
        Ok(())
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &BackuperPaths) -> Result<Self, BackuperError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                BackuperError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                BackuperError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BackuperPaths) -> Result<(), BackuperError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            BackuperError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            BackuperError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
