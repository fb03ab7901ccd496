pub mod class;
pub mod i18n;
pub mod init;
pub mod method;
pub mod scan;

use std::{env, path::PathBuf};

use anyhow::{Context, Result};

use super::args::PluginArgs;
use crate::{
    config::{Config, load_config},
    core::i18n::ScanOptions,
};

/// Configuration and plugin location shared by the plugin-wide commands.
pub struct PluginContext {
    pub config: Config,
    /// Canonical plugin root directory.
    pub root: PathBuf,
    pub scan_options: ScanOptions,
}

impl PluginContext {
    pub fn load(args: &PluginArgs) -> Result<Self> {
        let cwd = env::current_dir().context("Failed to get current directory")?;
        let config_result = load_config(&cwd)?;
        if config_result.path.is_none() {
            tracing::debug!("no config file found, using default configuration");
        }

        let root = match &args.plugin_root {
            Some(root) => root.clone(),
            None => config_result.plugin_root(),
        };
        let root = root
            .canonicalize()
            .with_context(|| format!("Plugin directory does not exist: {}", root.display()))?;

        let config = config_result.config;
        let scan_options = config.scan_options()?;
        Ok(Self {
            config,
            root,
            scan_options,
        })
    }
}
