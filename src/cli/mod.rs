//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the backup layer.

pub mod backup;
pub mod config;
pub mod history;

pub use backup::{handle_backup_command, handle_restore_command, BackupArgs, RestoreArgs};
pub use config::{handle_config_command, ConfigCommands};
pub use history::{handle_history_command, HistoryArgs};
