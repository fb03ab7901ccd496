use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::i18n::{ScanOptions, is_valid_i18n_name};

pub const CONFIG_FILE_NAME: &str = ".plugkitrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_plugin_root")]
    pub plugin_root: String,
    #[serde(default = "default_ignores")]
    pub ignores: Vec<String>,
    #[serde(default = "default_locales")]
    pub locales: Vec<String>,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

fn default_plugin_root() -> String {
    "./".to_string()
}

fn default_ignores() -> Vec<String> {
    ["**/.git/**", "**/vendor/**", "**/node_modules/**", "**/3rdparty/**"]
        .map(String::from)
        .to_vec()
}

fn default_locales() -> Vec<String> {
    vec!["fr_FR".to_string()]
}

fn default_extensions() -> Vec<String> {
    ["php", "js", "html"].map(String::from).to_vec()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            plugin_root: default_plugin_root(),
            ignores: default_ignores(),
            locales: default_locales(),
            extensions: default_extensions(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error for invalid glob patterns in `ignores` or locale
    /// names that are not of the `fr_FR` form.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        for locale in &self.locales {
            if !is_valid_i18n_name(locale) {
                bail!(
                    "Invalid locale in 'locales': \"{}\" (expected a name like fr_FR)",
                    locale
                );
            }
        }

        Ok(())
    }

    pub fn scan_options(&self) -> Result<ScanOptions> {
        ScanOptions::new(&self.ignores, &self.extensions)
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Where the config was read from, `None` when using defaults.
    pub path: Option<PathBuf>,
}

impl ConfigLoadResult {
    /// The plugin root, relative paths resolved against the config file.
    pub fn plugin_root(&self) -> PathBuf {
        let root = Path::new(&self.config.plugin_root);
        match self.path.as_deref().and_then(Path::parent) {
            Some(dir) if root.is_relative() => dir.join(root),
            _ => root.to_path_buf(),
        }
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            tracing::debug!(path = %path.display(), "loaded config");
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
