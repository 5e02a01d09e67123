//! Backup name resolution
//!
//! Renders the configured pattern into a backup path next to the original,
//! and derives the original path back from a backup path by stripping the
//! identifier. Everything here is a pure transform with no I/O.
//!
//! Paths are handled as OS strings, never converted lossily, so a name that
//! is not valid Unicode keeps its exact bytes through backup and restore.

use std::ffi::{OsStr, OsString};
use std::path::{Component, Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::config::settings::{BackupConfig, StripScope};

/// Placeholder for the file name without its extension
pub const NAME_TOKEN: &str = "{name}";
/// Placeholder for the extension, including its leading dot
pub const EXT_TOKEN: &str = "{ext}";
/// Placeholder for the sanitized UTC timestamp
pub const TIMESTAMP_TOKEN: &str = "{timestamp}";
/// Placeholder for the configured identifier
pub const IDENTIFIER_TOKEN: &str = "{identifier}";

/// A path split into the pieces the pattern can reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathParts {
    /// Containing directory (empty for a bare relative name)
    pub dir: PathBuf,
    /// File name without its extension
    pub basename: OsString,
    /// Extension including the leading dot, or empty
    pub ext: OsString,
}

impl PathParts {
    /// Decompose a path into directory, basename and extension
    pub fn split(path: &Path) -> Self {
        let dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        let file_name = path.file_name().unwrap_or_default();

        let (basename, ext) = encoded::bytes(file_name)
            .and_then(|bytes| {
                let (basename, ext) = split_extension(bytes);
                Some((encoded::os_string(basename)?, encoded::os_string(ext)?))
            })
            .unwrap_or_else(|| (file_name.to_os_string(), OsString::new()));

        Self { dir, basename, ext }
    }
}

/// Split a file name at its last dot
///
/// A dot in first position marks a hidden file, not an extension, so
/// `.bashrc` has no extension while `file.` has the extension `"."`.
fn split_extension(file_name: &[u8]) -> (&[u8], &[u8]) {
    match file_name.iter().rposition(|&b| b == b'.') {
        Some(idx) if idx > 0 => file_name.split_at(idx),
        _ => (file_name, &file_name[file_name.len()..]),
    }
}

/// Replace up to `limit` occurrences of a non-empty `needle`
fn replace_bytes(haystack: &[u8], needle: &[u8], with: &[u8], limit: Option<usize>) -> Vec<u8> {
    let mut out = Vec::with_capacity(haystack.len());
    let mut rest = haystack;
    let mut replaced = 0;

    while limit.map_or(true, |n| replaced < n) {
        let Some(idx) = rest.windows(needle.len()).position(|w| w == needle) else {
            break;
        };
        out.extend_from_slice(&rest[..idx]);
        out.extend_from_slice(with);
        rest = &rest[idx + needle.len()..];
        replaced += 1;
    }

    out.extend_from_slice(rest);
    out
}

/// Byte access to OS strings
///
/// Unix paths are arbitrary bytes. Elsewhere only paths that are valid
/// Unicode can be taken apart, and `None` reports the ones that cannot.
#[cfg(unix)]
mod encoded {
    use std::ffi::{OsStr, OsString};
    use std::os::unix::ffi::{OsStrExt, OsStringExt};

    pub fn bytes(s: &OsStr) -> Option<&[u8]> {
        Some(s.as_bytes())
    }

    pub fn os_string(bytes: &[u8]) -> Option<OsString> {
        Some(OsString::from_vec(bytes.to_vec()))
    }
}

#[cfg(not(unix))]
mod encoded {
    use std::ffi::{OsStr, OsString};

    pub fn bytes(s: &OsStr) -> Option<&[u8]> {
        s.to_str().map(str::as_bytes)
    }

    pub fn os_string(bytes: &[u8]) -> Option<OsString> {
        std::str::from_utf8(bytes).ok().map(OsString::from)
    }
}

/// Render a timestamp safe for use in file names
///
/// This is the ISO-8601 UTC form with millisecond precision, with `:` and
/// `.` replaced by `-`, e.g. `2025-03-14T09-26-53-589Z`.
pub fn format_timestamp(now: DateTime<Utc>) -> String {
    now.format("%Y-%m-%dT%H-%M-%S-%3fZ").to_string()
}

/// Render the pattern for a given path and instant
///
/// Each placeholder is substituted once, first occurrence only, in the order
/// name, ext, timestamp, identifier. Unknown or malformed tokens stay verbatim.
/// Returns `None` when the path pieces cannot be represented as bytes on
/// this platform.
pub fn render_pattern(
    parts: &PathParts,
    config: &BackupConfig,
    now: DateTime<Utc>,
) -> Option<OsString> {
    let basename = encoded::bytes(&parts.basename)?;
    let ext = encoded::bytes(&parts.ext)?;
    let timestamp = format_timestamp(now);

    let rendered = [
        (NAME_TOKEN, basename),
        (EXT_TOKEN, ext),
        (TIMESTAMP_TOKEN, timestamp.as_bytes()),
        (IDENTIFIER_TOKEN, config.identifier.as_bytes()),
    ]
    .into_iter()
    .fold(config.pattern.as_bytes().to_vec(), |acc, (token, value)| {
        replace_bytes(&acc, token.as_bytes(), value, Some(1))
    });

    encoded::os_string(&rendered)
}

/// Compute the backup path for `original_path`
///
/// The result always lives in the same directory as the original. A root or
/// drive prefix at the start of the rendered pattern is dropped rather than
/// allowed to replace that directory. If the name cannot be rendered, the
/// original path is returned unchanged and the copy is refused downstream.
pub fn resolve_backup_name(
    original_path: &Path,
    config: &BackupConfig,
    now: DateTime<Utc>,
) -> PathBuf {
    let parts = PathParts::split(original_path);
    let Some(rendered) = render_pattern(&parts, config, now) else {
        return original_path.to_path_buf();
    };

    let relative: PathBuf = Path::new(&rendered)
        .components()
        .filter(|c| !matches!(c, Component::RootDir | Component::Prefix(_)))
        .collect();
    parts.dir.join(relative)
}

/// Recover the original path by removing every occurrence of `identifier`
///
/// This is not an inverse of the pattern: an identifier that also appears in
/// a parent directory name is stripped there too. A path that cannot be
/// taken apart on this platform is returned unchanged.
pub fn derive_original_path(backup_path: &Path, identifier: &str) -> PathBuf {
    if identifier.is_empty() {
        return backup_path.to_path_buf();
    }
    strip_identifier(backup_path.as_os_str(), identifier)
        .map(PathBuf::from)
        .unwrap_or_else(|| backup_path.to_path_buf())
}

fn strip_identifier(path: &OsStr, identifier: &str) -> Option<OsString> {
    let bytes = encoded::bytes(path)?;
    encoded::os_string(&replace_bytes(bytes, identifier.as_bytes(), &[], None))
}

/// Recover the original path, honoring the configured strip scope
pub fn derive_original_path_scoped(
    backup_path: &Path,
    identifier: &str,
    scope: StripScope,
) -> PathBuf {
    match scope {
        StripScope::FullPath => derive_original_path(backup_path, identifier),
        StripScope::FileName => {
            let Some(file_name) = backup_path.file_name() else {
                return backup_path.to_path_buf();
            };
            let stripped = derive_original_path(Path::new(file_name), identifier);
            match backup_path.parent() {
                Some(parent) => parent.join(stripped),
                None => stripped,
            }
        }
    }
}
