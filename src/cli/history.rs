//! Operation history CLI command

use clap::Args;

use crate::audit::AuditLogger;
use crate::config::paths::BackuperPaths;
use crate::display::format_history;
use crate::error::BackuperResult;

/// Arguments for `backuper history`
#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// Number of most recent operations to show
    #[arg(short = 'n', long, default_value = "20")]
    pub limit: usize,

    /// Delete all recorded operations
    #[arg(long)]
    pub clear: bool,
}

/// Handle `backuper history`
pub fn handle_history_command(paths: &BackuperPaths, args: HistoryArgs) -> BackuperResult<()> {
    let logger = AuditLogger::new(paths.audit_log());

    if args.clear {
        let count = logger.entry_count()?;
        logger.clear()?;
        println!("Cleared {} operation(s).", count);
        return Ok(());
    }

    let entries = logger.read_recent(args.limit)?;
    println!("{}", format_history(&entries));

    Ok(())
}
