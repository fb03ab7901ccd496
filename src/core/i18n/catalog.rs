//! Per-locale translation catalogs.
//!
//! A catalog maps a file key (`plugins\/Name\/core\/file.php`) to the
//! translations of the literals found in that file. New literals are
//! stored as identity mappings, a stub for the translator to fill in.

use std::{fs, io, path::Path};

use anyhow::{Context, Result, bail};
use serde::Serialize;
use serde_json::{Map, Serializer, Value, ser::PrettyFormatter};

use super::{
    paths::{ESCAPED_SEPARATOR, escape_key, i18n_key, plugin_name, unescape_key},
    scanner::ScannedFile,
};
use crate::core::fs::write_atomic;

/// Translations of one locale, keyed by escaped file key then literal.
///
/// Key order is preserved: existing entries keep their position and new
/// ones are appended.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranslationCatalog {
    // Every value is a `Value::Object`.
    files: Map<String, Value>,
}

impl TranslationCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    /// Translations of one file.
    pub fn file(&self, key: &str) -> Option<&Map<String, Value>> {
        self.files.get(key).and_then(Value::as_object)
    }

    pub fn translation(&self, key: &str, literal: &str) -> Option<&str> {
        self.file(key)?.get(literal)?.as_str()
    }

    pub fn contains(&self, key: &str, literal: &str) -> bool {
        self.file(key).is_some_and(|t| t.contains_key(literal))
    }

    /// Add `literal -> literal` under `key` unless a translation exists.
    ///
    /// Returns true if an entry was added.
    pub fn insert_if_absent(&mut self, key: &str, literal: &str) -> bool {
        let translations = self
            .files
            .entry(key.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        let Value::Object(translations) = translations else {
            return false;
        };
        if translations.contains_key(literal) {
            return false;
        }
        translations.insert(literal.to_string(), Value::String(literal.to_string()));
        true
    }

    /// `(key, literal)` pairs present here but not in `base`, in catalog order.
    pub fn added_since<'a>(&'a self, base: &TranslationCatalog) -> Vec<(&'a str, &'a str)> {
        self.files
            .iter()
            .filter_map(|(key, value)| value.as_object().map(|t| (key, t)))
            .flat_map(|(key, translations)| {
                translations
                    .keys()
                    .filter(move |literal| !base.contains(key, literal))
                    .map(move |literal| (key.as_str(), literal.as_str()))
            })
            .collect()
    }

    /// Parse a catalog as stored on disk.
    ///
    /// Keys are read back into their escaped form whether the file spells
    /// them `plugins\/Name` (decoded as `plugins/Name`) or not.
    pub fn from_json_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::new());
        }
        let value: Value =
            serde_json::from_str(content).with_context(|| "Failed to parse catalog JSON")?;
        let Value::Object(map) = value else {
            bail!("Catalog must be a JSON object");
        };

        let mut files = Map::new();
        for (key, translations) in map {
            if !translations.is_object() {
                bail!("Catalog entry \"{}\" must be a JSON object", key);
            }
            files.insert(escape_key(&key), translations);
        }
        Ok(Self { files })
    }

    /// Serialize with 4-space indentation and every `/` escaped, the layout
    /// PHP's `json_encode` produces for these files.
    pub fn to_json_string(&self) -> Result<String> {
        let plain: Map<String, Value> = self
            .files
            .iter()
            .map(|(key, translations)| (unescape_key(key), translations.clone()))
            .collect();

        let mut buf = Vec::new();
        let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        Value::Object(plain)
            .serialize(&mut ser)
            .with_context(|| "Failed to serialize catalog")?;
        let json = String::from_utf8(buf).with_context(|| "Catalog is not valid UTF-8")?;

        // `/` only occurs inside JSON strings, where `\/` is a valid escape.
        Ok(json.replace('/', ESCAPED_SEPARATOR))
    }
}

/// Merge scan results into a copy of `existing`.
///
/// `plugin` may be the plugin directory or just its name. Absolute scanned
/// paths under `plugin` are made relative to it; relative paths are used as
/// given. Existing translations are never overwritten.
pub fn merge_i18n_json(
    plugin: &Path,
    existing: &TranslationCatalog,
    scanned: &[ScannedFile],
) -> TranslationCatalog {
    let name = plugin_name(plugin);
    let mut merged = existing.clone();

    for file in scanned {
        let path = file.file_path.as_path();
        let relative = if path.is_absolute() {
            path.strip_prefix(plugin).unwrap_or(path)
        } else {
            path
        };
        let key = i18n_key(&name, relative);
        for literal in &file.items {
            merged.insert_if_absent(&key, literal);
        }
    }

    merged
}

/// Load a catalog file; a missing file is an empty catalog.
pub fn load_catalog(path: &Path) -> Result<TranslationCatalog> {
    match fs::read_to_string(path) {
        Ok(content) => TranslationCatalog::from_json_str(&content)
            .with_context(|| format!("Invalid catalog file: {}", path.display())),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(TranslationCatalog::new()),
        Err(e) => Err(e).with_context(|| format!("Failed to read file: {}", path.display())),
    }
}

/// Write a catalog file, creating its directory if needed.
pub fn save_catalog(path: &Path, catalog: &TranslationCatalog) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    let mut content = catalog.to_json_string()?;
    content.push('\n');
    write_atomic(path, &content)
}
