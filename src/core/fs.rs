use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use tempfile::NamedTempFile;

/// Replace the contents of `path` with `content` in a single rename.
///
/// The data is written to a temporary file next to the target and then
/// persisted over it, so a failed write leaves the previous file untouched.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let parent = parent_dir(path);
    let mut tmp = NamedTempFile::new_in(&parent)
        .with_context(|| format!("Failed to create temp file in: {}", parent.display()))?;
    tmp.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write file: {}", path.display()))?;
    tmp.as_file()
        .sync_all()
        .with_context(|| format!("Failed to flush file: {}", path.display()))?;

    // Keep the permissions of a file we are replacing.
    if let Ok(meta) = fs::metadata(path) {
        fs::set_permissions(tmp.path(), meta.permissions()).ok();
    }

    tmp.persist(path)
        .with_context(|| format!("Failed to replace file: {}", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(())
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
