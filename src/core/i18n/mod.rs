//! Translatable string discovery and locale catalogs.

mod catalog;
mod locale;
mod paths;
mod scanner;

pub use catalog::{TranslationCatalog, load_catalog, merge_i18n_json, save_catalog};
pub use locale::{existing_locales, is_valid_i18n_name};
pub use paths::{
    get_i18n_path, i18n_key, locale_file_path, plugin_name, transform_path_to_i18n_path,
};
pub use scanner::{
    ScanOptions, ScanResult, ScannedFile, extract_strings, scan_file_for_strings,
    scan_for_strings, scan_for_strings_with,
};
