use anyhow::Result;
use colored::Colorize;

use super::{
    super::{args::I18nCommand, exit_status::ExitStatus, report},
    PluginContext,
};
use crate::core::i18n::{
    existing_locales, is_valid_i18n_name, load_catalog, locale_file_path, merge_i18n_json,
    save_catalog, scan_for_strings_with,
};

pub fn i18n(cmd: I18nCommand) -> Result<ExitStatus> {
    let ctx = PluginContext::load(&cmd.plugin)?;

    let locales = if cmd.locales.is_empty() {
        let mut locales = ctx.config.locales.clone();
        for locale in existing_locales(&ctx.root)? {
            if !locales.contains(&locale) {
                locales.push(locale);
            }
        }
        locales
    } else {
        cmd.locales
    };

    let invalid: Vec<&String> = locales
        .iter()
        .filter(|locale| !is_valid_i18n_name(locale))
        .collect();
    if !invalid.is_empty() {
        for locale in invalid {
            report::print_failure(&format!(
                "Invalid locale name: \"{}\" (expected a name like fr_FR)",
                locale
            ));
        }
        return Ok(ExitStatus::Failure);
    }

    let scan = scan_for_strings_with(&ctx.root, &ctx.scan_options)?;
    if scan.skipped_count > 0 {
        report::print_warning(&format!(
            "{} path(s) skipped due to access errors",
            scan.skipped_count
        ));
    }

    let mut pending = 0;
    for locale in &locales {
        let path = locale_file_path(&ctx.root, locale);
        let existing = load_catalog(&path)?;
        let merged = merge_i18n_json(&ctx.root, &existing, &scan.files);
        let added = merged.added_since(&existing);

        report::print_catalog_update(locale, &path, &added, cmd.apply);
        if cmd.apply && (!added.is_empty() || !path.exists()) {
            save_catalog(&path, &merged)?;
        }
        pending += added.len();
    }

    if !cmd.apply && pending > 0 {
        println!("Run with {} to write the catalogs.", "--apply".cyan());
    }

    Ok(ExitStatus::Success)
}
