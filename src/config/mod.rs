//! Configuration module for Backuper
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence
//! - The per-invocation naming configuration

pub mod paths;
pub mod settings;

pub use paths::BackuperPaths;
pub use settings::{BackupConfig, Settings, StripScope};
