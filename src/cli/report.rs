//! Report formatting and printing utilities.
//!
//! Kept apart from the core so plugkit can be used as a library.

use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;

use crate::core::{
    i18n::ScanResult,
    php::{EditOutcome, MethodDescriptor},
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Maximum number of new strings listed per catalog in dry-run output.
const MAX_ADDED_DISPLAY: usize = 20;

pub fn print_success(message: &str) {
    print_success_to(message, &mut io::stdout().lock());
}

pub fn print_success_to<W: Write>(message: &str, writer: &mut W) {
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), message.green());
}

pub fn print_failure(message: &str) {
    print_failure_to(message, &mut io::stderr().lock());
}

pub fn print_failure_to<W: Write>(message: &str, writer: &mut W) {
    let _ = writeln!(writer, "{} {}", FAILURE_MARK.red(), message.red());
}

pub fn print_warning(message: &str) {
    let _ = writeln!(
        io::stderr().lock(),
        "{} {}",
        "warning:".bold().yellow(),
        message
    );
}

/// Describe the result of declaring `class_name` in `path`.
pub fn class_outcome_message(outcome: EditOutcome, class_name: &str, path: &Path) -> String {
    let path = path.display();
    match outcome {
        EditOutcome::Created => format!("Created {} with class {}", path, class_name),
        EditOutcome::Modified => format!("Added class {} to {}", class_name, path),
        EditOutcome::Unchanged => format!("Class {} already exists in {}", class_name, path),
        EditOutcome::FileNotFound => format!("File not found: {}", path),
        EditOutcome::ClassNotFound => format!("Class {} not found in {}", class_name, path),
        EditOutcome::MalformedClass => {
            format!("Class {} in {} has no closing brace", class_name, path)
        }
    }
}

/// Describe the result of inserting `method`.
pub fn method_outcome_message(outcome: EditOutcome, method: &MethodDescriptor) -> String {
    match outcome {
        EditOutcome::Created | EditOutcome::Modified => format!(
            "Added {} to class {}",
            method.signature(),
            method.class_name
        ),
        other => class_outcome_message(other, &method.class_name, &method.class_file_path),
    }
}

pub fn print_outcome(outcome: EditOutcome, message: &str) {
    if outcome.is_success() {
        print_success(message);
    } else {
        print_failure(message);
    }
}

/// Print every scanned file and its literals, paths relative to `root`.
pub fn print_scan(result: &ScanResult, root: &Path) {
    print_scan_to(result, root, &mut io::stdout().lock());
}

pub fn print_scan_to<W: Write>(result: &ScanResult, root: &Path, writer: &mut W) {
    for file in &result.files {
        let relative = file
            .file_path
            .strip_prefix(root)
            .unwrap_or(file.file_path.as_path());
        let _ = writeln!(writer, "{}", relative.display().to_string().bold());
        for item in &file.items {
            let _ = writeln!(writer, "  {}", item);
        }
    }

    let summary = format!(
        "Found {} {} in {} {}",
        result.literal_count(),
        plural(result.literal_count(), "string", "strings"),
        result.files.len(),
        plural(result.files.len(), "file", "files"),
    );
    print_success_to(&summary, writer);
}

/// Print the entries a catalog update adds.
pub fn print_catalog_update(locale: &str, path: &Path, added: &[(&str, &str)], applied: bool) {
    print_catalog_update_to(locale, path, added, applied, &mut io::stdout().lock());
}

pub fn print_catalog_update_to<W: Write>(
    locale: &str,
    path: &Path,
    added: &[(&str, &str)],
    applied: bool,
    writer: &mut W,
) {
    if added.is_empty() {
        print_success_to(&format!("{}: catalog is up to date", locale), writer);
        return;
    }

    let _ = writeln!(writer, "{} {}", locale.bold(), path.display());
    for (key, literal) in added.iter().take(MAX_ADDED_DISPLAY) {
        let _ = writeln!(writer, "  {} {} {}", "+".green(), key.dimmed(), literal);
    }
    if added.len() > MAX_ADDED_DISPLAY {
        let _ = writeln!(writer, "  ... and {} more", added.len() - MAX_ADDED_DISPLAY);
    }

    let count = format!(
        "{} new {}",
        added.len(),
        plural(added.len(), "string", "strings")
    );
    if applied {
        print_success_to(&format!("{}: added {}", locale, count), writer);
    } else {
        let _ = writeln!(writer, "{}: {} to add", locale, count);
    }
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
