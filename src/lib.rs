//! Backuper - pattern-named backups of files and directories
//!
//! Creates a copy of a single file or directory next to the original, named
//! from a configurable pattern, and restores it back by stripping the
//! identifier from the backup path.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `backup`: name resolution and the copy engine (backup and restore)
//! - `config`: path resolution and persisted settings
//! - `error`: custom error types
//! - `audit`: append-only operation log
//! - `notice`: user-facing result messages for a host
//! - `display`: terminal formatting
//! - `cli`: command handlers for the `backuper` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use backuper::config::{BackuperPaths, Settings};
//!
//! let paths = BackuperPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let outcome = backuper::backup::backup(Path::new("notes.txt"), &settings.backup_config())?;
//! ```

pub mod audit;
pub mod backup;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod notice;

pub use error::{BackuperError, BackuperResult};
