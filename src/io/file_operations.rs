use anyhow::{Context, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, instrument};

use crate::config::{BACKUP_SUFFIX, UPDATED_SUFFIX};

#[instrument]
pub async fn read_file_safe(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    debug!("Read {} bytes", content.len());
    Ok(content)
}

#[instrument(skip(content))]
pub async fn write_file_safe(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    debug!("Wrote {} bytes", content.len());
    Ok(())
}

/// Sibling path holding the patched text: `<target>.updated`.
pub fn updated_path(target: &Path) -> PathBuf {
    with_suffix(target, UPDATED_SUFFIX)
}

/// Sibling path the operator is told to back the original up to.
pub fn backup_path(target: &Path) -> PathBuf {
    with_suffix(target, BACKUP_SUFFIX)
}

fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}
