//! Persistence collaborators for the admin panel

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use tracing::warn;

use super::{EnvOverrides, ServerConfig};

/// Persists an edited configuration.
///
/// Returns the configuration as it is now in effect, which the panel uses to
/// re-sync its local state.
pub trait ConfigStore {
    fn save_config(&mut self, config: &ServerConfig) -> Result<ServerConfig>;
}

/// Stores the configuration as a JSON file
#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
    overrides: EnvOverrides,
}

impl FileConfigStore {
    pub fn new(path: impl Into<PathBuf>, overrides: EnvOverrides) -> Self {
        Self {
            path: path.into(),
            overrides,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored configuration with environment overrides applied
    pub fn load(&self) -> Result<ServerConfig> {
        let mut config = ServerConfig::from_file(&self.path)?;
        self.overrides.apply(&mut config);
        Ok(config)
    }

    /// Like [`load`](Self::load), but a missing file yields the defaults
    pub fn load_or_default(&self) -> Result<ServerConfig> {
        if self.path.exists() {
            return self.load();
        }

        warn!(
            "No config found at {}, starting from defaults",
            self.path.display()
        );
        let mut config = ServerConfig::default();
        self.overrides.apply(&mut config);
        Ok(config)
    }
}

impl ConfigStore for FileConfigStore {
    /// Write the config with overridden fields kept at their stored values,
    /// then reload it with the overrides applied again
    fn save_config(&mut self, config: &ServerConfig) -> Result<ServerConfig> {
        if self.overrides.is_empty() {
            config.save_to_file(&self.path)?;
        } else {
            let stored = if self.path.exists() {
                ServerConfig::from_file(&self.path)?
            } else {
                ServerConfig::default()
            };
            let mut to_write = config.clone();
            self.overrides.restore(&mut to_write, &stored);
            to_write.save_to_file(&self.path)?;
        }
        self.load()
    }
}

/// Keeps saved configurations in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryConfigStore {
    /// Every configuration saved so far, oldest first
    pub saved: Vec<ServerConfig>,
    /// When set, the next save fails with this message
    pub fail_next: Option<String>,
}

impl MemoryConfigStore {
    pub fn last_saved(&self) -> Option<&ServerConfig> {
        self.saved.last()
    }
}

impl ConfigStore for MemoryConfigStore {
    fn save_config(&mut self, config: &ServerConfig) -> Result<ServerConfig> {
        if let Some(message) = self.fail_next.take() {
            bail!(message);
        }
        self.saved.push(config.clone());
        Ok(config.clone())
    }
}
