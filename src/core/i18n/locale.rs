use std::{fs, io, path::Path, sync::LazyLock};

use anyhow::{Context, Result};
use regex::Regex;

use super::paths::get_i18n_path;

static LOCALE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]{2}_[A-Z]{2}$").unwrap());

/// Check a locale name of the form `fr_FR`.
pub fn is_valid_i18n_name(name: &str) -> bool {
    LOCALE_REGEX.is_match(name)
}

/// Locales that already have a catalog file in the plugin, sorted.
///
/// Files whose stem is not a valid locale name are ignored. A plugin
/// without an i18n directory has no locales.
pub fn existing_locales(plugin_root: &Path) -> Result<Vec<String>> {
    let dir = get_i18n_path(plugin_root);
    let entries = match fs::read_dir(&dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => {
            return Err(e)
                .with_context(|| format!("Failed to read directory: {}", dir.display()));
        }
    };

    let mut locales: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .filter_map(|path| path.file_stem().map(|s| s.to_string_lossy().into_owned()))
        .filter(|stem| is_valid_i18n_name(stem))
        .collect();
    locales.sort();
    Ok(locales)
}
