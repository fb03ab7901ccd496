use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use regex::Regex;
use walkdir::WalkDir;

/// `{{Text}}`, `__('Text')` or `__("Text")`, one capture group each.
static LITERAL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\{\{(.+?)\}\}|__\(\s*'((?:[^'\\]|\\.)*)'|__\(\s*"((?:[^"\\]|\\.)*)""#).unwrap()
});

/// Translatable literals found in one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedFile {
    pub file_path: PathBuf,
    /// Distinct literals in order of first occurrence.
    pub items: Vec<String>,
}

/// Result of scanning a directory tree.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Files with at least one literal, in traversal order.
    pub files: Vec<ScannedFile>,
    /// Paths that could not be read.
    pub skipped_count: usize,
}

impl ScanResult {
    pub fn literal_count(&self) -> usize {
        self.files.iter().map(|f| f.items.len()).sum()
    }
}

/// Filters applied while walking a plugin.
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    ignores: Vec<Pattern>,
    extensions: Vec<String>,
}

impl ScanOptions {
    /// Build options from glob ignore patterns and file extensions.
    ///
    /// An empty extension list scans every file.
    pub fn new(ignores: &[String], extensions: &[String]) -> Result<Self> {
        let ignores = ignores
            .iter()
            .map(|p| {
                Pattern::new(p).with_context(|| format!("Invalid ignore pattern: \"{}\"", p))
            })
            .collect::<Result<Vec<_>>>()?;
        let extensions = extensions
            .iter()
            .map(|e| e.trim_start_matches('.').to_ascii_lowercase())
            .collect();
        Ok(Self {
            ignores,
            extensions,
        })
    }

    /// Patterns only see the path below the scan root, so folders above the
    /// plugin never hide it.
    fn is_ignored(&self, relative: &Path) -> bool {
        self.ignores.iter().any(|p| p.matches_path(relative))
    }

    fn accepts(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }
        path.extension()
            .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
            .is_some_and(|ext| self.extensions.contains(&ext))
    }
}

/// Extract translatable literals from source text.
///
/// Both markers are matched in a single pass so the result follows the
/// order of first occurrence. Repeated literals are kept once.
pub fn extract_strings(content: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut items = Vec::new();

    for caps in LITERAL_REGEX.captures_iter(content) {
        let literal = if let Some(m) = caps.get(1) {
            m.as_str().to_string()
        } else if let Some(m) = caps.get(2) {
            unescape(m.as_str(), '\'')
        } else if let Some(m) = caps.get(3) {
            unescape(m.as_str(), '"')
        } else {
            continue;
        };

        if literal.is_empty() {
            continue;
        }
        if seen.insert(literal.clone()) {
            items.push(literal);
        }
    }

    items
}

/// Read a file and extract its literals.
///
/// Files that are not valid UTF-8 (images, archives) have no literals.
pub fn scan_file_for_strings(file_path: &Path) -> Result<Vec<String>> {
    let bytes = fs::read(file_path)
        .with_context(|| format!("Failed to read file: {}", file_path.display()))?;
    match String::from_utf8(bytes) {
        Ok(content) => Ok(extract_strings(&content)),
        Err(_) => {
            tracing::trace!(path = %file_path.display(), "skipping non UTF-8 file");
            Ok(Vec::new())
        }
    }
}

/// Scan every file under `root_dir`.
pub fn scan_for_strings(root_dir: &Path) -> Result<ScanResult> {
    scan_for_strings_with(root_dir, &ScanOptions::default())
}

/// Scan the files under `root_dir` accepted by `options`.
///
/// Entries are visited depth-first and sorted by name within each
/// directory, so the result is stable across runs and platforms.
pub fn scan_for_strings_with(root_dir: &Path, options: &ScanOptions) -> Result<ScanResult> {
    if !root_dir.is_dir() {
        bail!("Directory does not exist: {}", root_dir.display());
    }

    let mut result = ScanResult::default();

    for entry in WalkDir::new(root_dir).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                result.skipped_count += 1;
                tracing::warn!(error = %e, "cannot access path");
                continue;
            }
        };
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let relative = path.strip_prefix(root_dir).unwrap_or(path);
        if options.is_ignored(relative) || !options.accepts(path) {
            tracing::trace!(path = %path.display(), "ignored");
            continue;
        }

        match scan_file_for_strings(path) {
            Ok(items) if items.is_empty() => {}
            Ok(items) => {
                tracing::debug!(path = %path.display(), count = items.len(), "found literals");
                result.files.push(ScannedFile {
                    file_path: path.to_path_buf(),
                    items,
                });
            }
            Err(e) => {
                result.skipped_count += 1;
                tracing::warn!(error = %e, "cannot read file");
            }
        }
    }

    Ok(result)
}

/// Resolve backslash escapes of a quoted PHP string.
///
/// Only the quote character and the backslash itself are unescaped; other
/// sequences are kept as written.
fn unescape(raw: &str, quote: char) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(&next) = chars.peek() {
                if next == quote || next == '\\' {
                    out.push(next);
                    chars.next();
                    continue;
                }
            }
        }
        out.push(c);
    }
    out
}
