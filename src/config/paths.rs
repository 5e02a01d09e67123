//! Path management for Backuper
//!
//! Resolves where the settings file and the operation log live.
//!
//! ## Path Resolution Order
//!
//! 1. `BACKUPER_CONFIG_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/backuper` or `~/.config/backuper`
//! 3. Windows: `%APPDATA%\backuper`

use std::path::PathBuf;

use crate::error::BackuperError;

/// Environment variable overriding the configuration directory
pub const CONFIG_DIR_ENV: &str = "BACKUPER_CONFIG_DIR";

/// Manages all paths used by Backuper
#[derive(Debug, Clone)]
pub struct BackuperPaths {
    /// Base directory for settings and the operation log
    base_dir: PathBuf,
}

impl BackuperPaths {
    /// Create a new BackuperPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if neither the override nor the platform
    /// configuration directory can be determined.
    pub fn new() -> Result<Self, BackuperError> {
        let base_dir = if let Ok(custom) = std::env::var(CONFIG_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create BackuperPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/backuper/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the operation log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), BackuperError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| BackuperError::Io(format!("Failed to create config directory: {}", e)))
    }
}

/// Resolve the default configuration directory based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, BackuperError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var("HOME").map_err(|_| {
                BackuperError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("backuper"))
}

/// Resolve the default configuration directory based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, BackuperError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| BackuperError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("backuper"))
}
