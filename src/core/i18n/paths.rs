use std::path::{Component, Path, PathBuf};

/// First segment of every catalog key.
pub const PLUGINS_DIR: &str = "plugins";

/// Separator used inside catalog keys, a JSON-escaped forward slash.
pub const ESCAPED_SEPARATOR: &str = "\\/";

/// Directory holding the locale catalogs of a plugin: `<root>/core/i18n`.
pub fn get_i18n_path(plugin_root: &Path) -> PathBuf {
    plugin_root.join("core").join("i18n")
}

/// Catalog file of one locale: `<root>/core/i18n/<locale>.json`.
pub fn locale_file_path(plugin_root: &Path, locale: &str) -> PathBuf {
    get_i18n_path(plugin_root).join(format!("{}.json", locale))
}

/// Base name of the plugin directory.
///
/// Paths such as `.` have no name of their own; they are resolved against
/// the file system first.
pub fn plugin_name(plugin: &Path) -> String {
    if let Some(name) = plugin.file_name() {
        return name.to_string_lossy().into_owned();
    }
    plugin
        .canonicalize()
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_default()
}

/// Catalog key for a file given relative to the plugin root.
///
/// ```
/// use std::path::Path;
/// use plugkit::core::i18n::i18n_key;
///
/// assert_eq!(
///     i18n_key("PluginName", Path::new("core/file.php")),
///     r"plugins\/PluginName\/core\/file.php"
/// );
/// ```
pub fn i18n_key(plugin_name: &str, relative: &Path) -> String {
    let mut parts = vec![PLUGINS_DIR.to_string(), plugin_name.to_string()];
    parts.extend(relative.components().filter_map(|c| match c {
        Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
        _ => None,
    }));
    parts.join(ESCAPED_SEPARATOR)
}

/// Catalog key for a file inside `plugin_root`.
///
/// A file outside of `plugin_root` keeps its own components after the
/// plugin name.
pub fn transform_path_to_i18n_path(plugin_root: &Path, file_path: &Path) -> String {
    let relative = file_path.strip_prefix(plugin_root).unwrap_or(file_path);
    i18n_key(&plugin_name(plugin_root), relative)
}

/// Turn an on-disk key (`plugins/Name/file.php`) into its escaped form.
pub(crate) fn escape_key(key: &str) -> String {
    if key.contains(ESCAPED_SEPARATOR) {
        key.to_string()
    } else {
        key.replace('/', ESCAPED_SEPARATOR)
    }
}

pub(crate) fn unescape_key(key: &str) -> String {
    key.replace(ESCAPED_SEPARATOR, "/")
}
