//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `init`: Create a `.plugkitrc.json` configuration file
//! - `class`: Declare a class in a PHP file, creating the file if needed
//! - `method`: Add an empty method to a class
//! - `scan`: List translatable strings of a plugin
//! - `i18n`: Merge translatable strings into locale catalogs

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::core::php::Visibility;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

/// Arguments shared by commands working on a whole plugin.
#[derive(Debug, Clone, Args)]
pub struct PluginArgs {
    /// Plugin root directory (overrides config file)
    #[arg(long)]
    pub plugin_root: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ClassCommand {
    /// PHP file that should contain the class
    pub file: PathBuf,
    /// Class name
    pub class_name: String,
}

#[derive(Debug, Args)]
pub struct MethodCommand {
    /// PHP file containing the class
    pub file: PathBuf,
    /// Class receiving the method
    pub class_name: String,
    /// Name of the new method
    pub method_name: String,

    /// Method visibility
    #[arg(long, value_enum, default_value_t = Visibility::Public)]
    pub visibility: Visibility,

    /// Declare the method static
    #[arg(long = "static")]
    pub is_static: bool,

    /// Declare the class first if the file does not have it
    #[arg(long)]
    pub create_class: bool,
}

#[derive(Debug, Args)]
pub struct ScanCommand {
    #[command(flatten)]
    pub plugin: PluginArgs,
}

#[derive(Debug, Args)]
pub struct I18nCommand {
    /// Locales to update, e.g. fr_FR (default: configured and existing locales)
    pub locales: Vec<String>,

    #[command(flatten)]
    pub plugin: PluginArgs,

    /// Actually write the catalogs (default is dry-run)
    #[arg(long)]
    pub apply: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Initialize a new .plugkitrc.json configuration file
    Init,
    /// Make sure a PHP file declares a class
    Class(ClassCommand),
    /// Add an empty method to an existing class
    Method(MethodCommand),
    /// List translatable strings found in the plugin sources
    Scan(ScanCommand),
    /// Add new translatable strings to the locale catalogs
    I18n(I18nCommand),
}
