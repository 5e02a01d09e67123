use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use backuper::cli::{
    handle_backup_command, handle_config_command, handle_history_command,
    handle_restore_command, BackupArgs, ConfigCommands, HistoryArgs, RestoreArgs,
};
use backuper::config::{paths::BackuperPaths, settings::Settings};
use backuper::notice::Notice;

#[derive(Parser)]
#[command(
    name = "backuper",
    version,
    about = "Create pattern-named backups of files and directories and restore them",
    long_about = "Backuper copies a file or directory next to itself under a name \
                  rendered from a pattern such as {name}{ext}{identifier}, and \
                  restores a backup by stripping the identifier from its path."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Back up a file or directory
    Backup(BackupArgs),

    /// Restore a file or directory from its backup
    Restore(RestoreArgs),

    /// Settings management commands
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Show recorded backup and restore operations
    History(HistoryArgs),

    /// Show where settings and the operation log are stored
    Paths,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Settings are read fresh on every invocation
    let paths = BackuperPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Commands::Backup(args) => Ok(report(handle_backup_command(&paths, &settings, args))),
        Commands::Restore(args) => Ok(report(handle_restore_command(&paths, &settings, args))),
        Commands::Config(cmd) => {
            handle_config_command(&paths, settings, cmd)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::History(args) => {
            handle_history_command(&paths, args)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Paths => {
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Operation log:    {}", paths.audit_log().display());
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Print a notice to the matching stream and map it to an exit code
fn report(notice: Notice) -> ExitCode {
    if notice.is_error() {
        eprintln!("{}", notice);
        ExitCode::FAILURE
    } else {
        println!("{}", notice);
        ExitCode::SUCCESS
    }
}
