//! Configuration file I/O operations

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use fs2::FileExt;
use tracing::{debug, info};

use super::{License, ServerConfig};

impl ServerConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config = Self::from_json_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        debug!("Loaded server config from {}", path.display());
        Ok(config)
    }

    /// Write the config as pretty JSON, holding `<name>.json.lock` while the
    /// new content goes to `<name>.json.tmp` and is renamed over the file.
    /// Missing parent directories are created.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content =
            serde_json::to_string_pretty(self).context("Failed to serialize server config")?;
        write_locked(path, content.as_bytes())?;
        info!("Saved server config to {}", path.display());
        Ok(())
    }
}

fn write_locked(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(dir) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }

    let lock_path = path.with_extension("json.lock");
    let lock = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&lock_path)
        .with_context(|| format!("Failed to open lock file: {}", lock_path.display()))?;
    lock.lock_exclusive()
        .with_context(|| format!("Failed to lock {}", lock_path.display()))?;

    let temp_path = path.with_extension("json.tmp");
    let mut temp = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .with_context(|| format!("Failed to open temp file: {}", temp_path.display()))?;
    temp.write_all(bytes)
        .and_then(|()| temp.sync_all())
        .with_context(|| format!("Failed to write {}", temp_path.display()))?;

    std::fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to replace {}", path.display()))?;
    // `lock` drops here and releases the lock
    Ok(())
}

impl License {
    /// Load a license descriptor from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read license file: {}", path.display()))?;

        let license: License = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse license file: {}", path.display()))?;

        debug!(
            "Loaded license from {} (licensed: {}, hosted push: {})",
            path.display(),
            license.is_licensed,
            license.hosted_push
        );
        Ok(license)
    }

    /// Load a license if a path was given, otherwise treat the server as unlicensed
    pub fn load_optional(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}
