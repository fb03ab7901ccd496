use std::{fs, io, path::Path, sync::LazyLock};

use anyhow::{Context, Result, bail};
use regex::Regex;

use super::{
    braces::{find_closing_brace, in_string_or_comment},
    method::MethodDescriptor,
};
use crate::core::fs::write_atomic;

/// Indentation added for members of a class whose body is still empty.
const DEFAULT_INDENT: &str = "    ";

const PHP_OPEN_TAG: &str = "<?php";
const PHP_CLOSE_TAG: &str = "?>";

const METHOD_MODIFIERS: &str = "(?:public|protected|private|static|final|abstract)";

static IDENTIFIER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_\x{80}-\x{10FFFF}][A-Za-z0-9_\x{80}-\x{10FFFF}]*$").unwrap()
});

/// Result of a class file edit.
///
/// The `*NotFound` and `MalformedClass` variants are ordinary negative
/// answers, not errors: the file is left untouched in those cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// The file did not exist and was created.
    Created,
    /// The file was rewritten with the requested change.
    Modified,
    /// Nothing to do, the file already satisfied the request.
    Unchanged,
    FileNotFound,
    ClassNotFound,
    /// The class declaration has no closing brace.
    MalformedClass,
}

impl EditOutcome {
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            EditOutcome::Created | EditOutcome::Modified | EditOutcome::Unchanged
        )
    }
}

/// Location of a class body inside a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ClassBlock {
    /// Leading whitespace of the declaration line.
    indent: String,
    /// Byte offset of the opening `{`.
    open: usize,
    /// Byte offset of the closing `}`.
    close: usize,
}

enum ClassLookup {
    Missing,
    Malformed,
    Found(ClassBlock),
}

/// Check whether `file_path` declares `class <class_name>`.
///
/// A missing or unreadable file is simply `false`.
pub fn class_exists(file_path: &Path, class_name: &str) -> bool {
    match fs::read_to_string(file_path) {
        Ok(content) => find_declaration(&content, class_name).is_some(),
        Err(_) => false,
    }
}

/// Check whether the body of `class_name` already declares `method_name`.
pub fn method_exists(file_path: &Path, class_name: &str, method_name: &str) -> bool {
    let Ok(content) = fs::read_to_string(file_path) else {
        return false;
    };
    let ClassLookup::Found(block) = locate_class(&content, class_name) else {
        return false;
    };
    let pattern = format!(
        r"(?mi)^[ \t]*(?:{}\s+)*function\s+&?{}\s*\(",
        METHOD_MODIFIERS,
        regex::escape(method_name)
    );
    Regex::new(&pattern)
        .map(|re| re.is_match(&content[block.open + 1..block.close]))
        .unwrap_or(false)
}

/// Make sure `file_path` declares an (initially empty) class `class_name`.
///
/// Creates the file with a PHP open tag when it does not exist, fills a
/// blank file, and appends the class to any other file lacking it.
pub fn ensure_class_declared(file_path: &Path, class_name: &str) -> Result<EditOutcome> {
    validate_identifier(class_name, "class")?;

    let content = match fs::read_to_string(file_path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            if let Some(parent) = file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create directory: {}", parent.display())
                })?;
            }
            write_atomic(file_path, &new_class_file(class_name))?;
            tracing::debug!(path = %file_path.display(), class = class_name, "created class file");
            return Ok(EditOutcome::Created);
        }
        Err(e) => {
            return Err(e)
                .with_context(|| format!("Failed to read file: {}", file_path.display()));
        }
    };

    if find_declaration(&content, class_name).is_some() {
        return Ok(EditOutcome::Unchanged);
    }

    let updated = if content.trim().is_empty() {
        new_class_file(class_name)
    } else {
        append_class(&content, class_name)
    };
    write_atomic(file_path, &updated)?;
    tracing::debug!(path = %file_path.display(), class = class_name, "declared class");
    Ok(EditOutcome::Modified)
}

/// Add an empty method to an existing class, right before its closing brace.
///
/// Existing content, other methods included, is kept byte for byte.
pub fn insert_method(method: &MethodDescriptor) -> Result<EditOutcome> {
    validate_identifier(&method.method_name, "method")?;
    let path = method.class_file_path.as_path();

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(EditOutcome::FileNotFound),
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to read file: {}", path.display()));
        }
    };

    let block = match locate_class(&content, &method.class_name) {
        ClassLookup::Found(block) => block,
        ClassLookup::Missing => return Ok(EditOutcome::ClassNotFound),
        ClassLookup::Malformed => {
            tracing::warn!(
                path = %path.display(),
                class = %method.class_name,
                "class has no closing brace"
            );
            return Ok(EditOutcome::MalformedClass);
        }
    };

    write_atomic(path, &splice_method(&content, &block, method))?;
    tracing::debug!(
        path = %path.display(),
        class = %method.class_name,
        method = %method.method_name,
        "inserted method"
    );
    Ok(EditOutcome::Modified)
}

fn validate_identifier(name: &str, kind: &str) -> Result<()> {
    if !IDENTIFIER_REGEX.is_match(name) {
        bail!("Invalid PHP {} name: \"{}\"", kind, name);
    }
    Ok(())
}

fn declaration_regex(class_name: &str) -> Option<Regex> {
    let pattern = format!(
        r"(?m)^([ \t]*)(?:(?:abstract|final|readonly)[ \t]+)*class[ \t]+{}\b",
        regex::escape(class_name)
    );
    Regex::new(&pattern).ok()
}

/// Returns the declaration indent and the offset where the declaration ends.
///
/// Declarations inside comments or string literals are skipped.
fn find_declaration(content: &str, class_name: &str) -> Option<(String, usize)> {
    declaration_regex(class_name)?
        .captures_iter(content)
        .find_map(|caps| {
            let decl = caps.get(0)?;
            if in_string_or_comment(content, decl.start()) {
                return None;
            }
            let indent = caps.get(1).map_or("", |m| m.as_str()).to_string();
            Some((indent, decl.end()))
        })
}

fn locate_class(content: &str, class_name: &str) -> ClassLookup {
    let Some((indent, decl_end)) = find_declaration(content, class_name) else {
        return ClassLookup::Missing;
    };
    let Some(open) = content[decl_end..].find('{').map(|p| decl_end + p) else {
        return ClassLookup::Malformed;
    };
    match find_closing_brace(content, open) {
        Some(close) => ClassLookup::Found(ClassBlock {
            indent,
            open,
            close,
        }),
        None => ClassLookup::Malformed,
    }
}

fn class_skeleton(class_name: &str) -> String {
    format!("class {}\n{{\n}}\n", class_name)
}

fn new_class_file(class_name: &str) -> String {
    format!("{}\n\n{}", PHP_OPEN_TAG, class_skeleton(class_name))
}

fn append_class(content: &str, class_name: &str) -> String {
    let skeleton = class_skeleton(class_name);
    let trimmed = content.trim_end();

    if let Some(before_close) = trimmed.strip_suffix(PHP_CLOSE_TAG) {
        return format!(
            "{}\n\n{}{}\n",
            before_close.trim_end(),
            skeleton,
            PHP_CLOSE_TAG
        );
    }
    // Outside of a PHP block the class would be plain output text.
    let in_php_block = match (content.rfind(PHP_OPEN_TAG), content.rfind(PHP_CLOSE_TAG)) {
        (Some(open), Some(close)) => open > close,
        (Some(_), None) => true,
        (None, _) => false,
    };
    if !in_php_block {
        return format!("{}\n{}\n\n{}", trimmed, PHP_OPEN_TAG, skeleton);
    }
    format!("{}\n\n{}", trimmed, skeleton)
}

fn splice_method(content: &str, class: &ClassBlock, method: &MethodDescriptor) -> String {
    let line_start = content[..class.close].rfind('\n').map_or(0, |i| i + 1);
    let brace_on_own_line =
        line_start > class.open && content[line_start..class.close].trim().is_empty();
    let insert_at = if brace_on_own_line {
        line_start
    } else {
        class.close
    };

    let body = &content[class.open + 1..insert_at];
    let indent = member_indent(body, &class.indent);

    let mut insertion = String::new();
    if !brace_on_own_line {
        insertion.push('\n');
    }
    if !body.trim().is_empty() && !body.trim_end_matches([' ', '\t']).ends_with("\n\n") {
        insertion.push('\n');
    }
    insertion.push_str(&method.render(&indent));
    if !brace_on_own_line {
        insertion.push_str(&class.indent);
    }

    let mut updated = String::with_capacity(content.len() + insertion.len());
    updated.push_str(&content[..insert_at]);
    updated.push_str(&insertion);
    updated.push_str(&content[insert_at..]);
    updated
}

/// Indentation of the first member line, or one level past the class.
fn member_indent(body: &str, class_indent: &str) -> String {
    body.lines()
        .find(|line| !line.trim().is_empty())
        .map(|line| line[..line.len() - line.trim_start().len()].to_string())
        .unwrap_or_else(|| format!("{}{}", class_indent, DEFAULT_INDENT))
}
