//! Configuration CLI commands

use clap::Subcommand;

use crate::config::paths::BackuperPaths;
use crate::config::settings::Settings;
use crate::display::format_settings;
use crate::error::BackuperResult;

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the current settings
    Show,

    /// Change a setting (pattern, identifier, restore-scope, audit)
    Set {
        /// Setting name
        key: String,
        /// New value
        value: String,
    },

    /// Restore all settings to their defaults
    Reset,
}

/// Handle a config command
pub fn handle_config_command(
    paths: &BackuperPaths,
    settings: Settings,
    cmd: ConfigCommands,
) -> BackuperResult<()> {
    match cmd {
        ConfigCommands::Show => {
            println!("{}", format_settings(paths, &settings));
        }

        ConfigCommands::Set { key, value } => {
            let mut settings = settings;
            settings.set(&key, &value)?;
            settings.save(paths)?;
            println!("Set {} = {}", key, value);
        }

        ConfigCommands::Reset => {
            Settings::default().save(paths)?;
            println!("Settings reset to defaults.");
        }
    }

    Ok(())
}
