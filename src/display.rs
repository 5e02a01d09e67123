//! Display formatting for terminal output
//!
//! Formats settings and operation log entries for the CLI.

use crate::audit::AuditEntry;
use crate::config::{BackuperPaths, Settings};

/// Format operation log entries as a table
pub fn format_history(entries: &[AuditEntry]) -> String {
    if entries.is_empty() {
        return "No operations recorded.".to_string();
    }

    let source_width = entries
        .iter()
        .map(|e| e.source.display().to_string().len())
        .max()
        .unwrap_or(6)
        .max(6);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<19}  {:<7}  {:<6}  {:<source_width$}  {}\n",
        "Time",
        "Action",
        "Status",
        "Source",
        "Destination / Error",
        source_width = source_width,
    ));

    output.push_str(&format!(
        "{:-<19}  {:-<7}  {:-<6}  {:-<source_width$}  {:-<19}\n",
        "",
        "",
        "",
        "",
        "",
        source_width = source_width,
    ));

    for entry in entries {
        let detail = match (&entry.destination, &entry.error) {
            (_, Some(error)) => error.clone(),
            (Some(destination), None) => destination.display().to_string(),
            (None, None) => String::new(),
        };

        output.push_str(&format!(
            "{:<19}  {:<7}  {:<6}  {:<source_width$}  {}\n",
            entry.timestamp.format("%Y-%m-%d %H:%M:%S"),
            entry.operation.to_string(),
            entry.status.to_string(),
            entry.source.display().to_string(),
            detail,
            source_width = source_width,
        ));
    }

    output.push_str(&format!("\nTotal: {} operation(s)", entries.len()));
    output
}

/// Format the current settings and where they come from
pub fn format_settings(paths: &BackuperPaths, settings: &Settings) -> String {
    let mut output = String::new();
    output.push_str("Backuper Configuration\n");
    output.push_str("======================\n");
    output.push_str(&format!("Settings file:  {}\n", paths.settings_file().display()));
    output.push_str(&format!("Operation log:  {}\n", paths.audit_log().display()));
    output.push('\n');
    output.push_str(&format!("  pattern:        {}\n", settings.pattern));
    output.push_str(&format!("  identifier:     {}\n", settings.identifier));
    output.push_str(&format!("  restore-scope:  {}\n", settings.restore_scope));
    output.push_str(&format!("  audit:          {}", settings.audit_enabled));
    output
}
