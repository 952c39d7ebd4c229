//! Sources of runner configuration

use super::RunnerConfig;
use crate::error::Result;
use std::path::{Path, PathBuf};

/// Supplies the configuration read at the start of every invocation
pub trait ConfigurationProvider: Send + Sync {
    fn configuration(&self) -> RunnerConfig;
}

/// Always returns the same configuration
#[derive(Debug, Clone, Default)]
pub struct StaticConfigurationProvider {
    config: RunnerConfig,
}

impl StaticConfigurationProvider {
    pub fn new(config: RunnerConfig) -> Self {
        Self { config }
    }
}

impl ConfigurationProvider for StaticConfigurationProvider {
    fn configuration(&self) -> RunnerConfig {
        self.config.clone()
    }
}

/// Configuration loaded once from the nearest config file above a workspace
#[derive(Debug, Clone)]
pub struct FileConfigurationProvider {
    config: RunnerConfig,
    source: Option<PathBuf>,
}

impl FileConfigurationProvider {
    /// Load from the first config file found walking up from `workspace_root`
    ///
    /// No file means default settings; a file that fails to parse is an error.
    pub fn discover(workspace_root: &Path) -> Result<Self> {
        match RunnerConfig::find_config_file(workspace_root) {
            Some(path) => Self::from_file(path),
            None => {
                tracing::debug!(
                    "No config file found above {:?}, using defaults",
                    workspace_root
                );
                Ok(Self {
                    config: RunnerConfig::default(),
                    source: None,
                })
            }
        }
    }

    pub fn from_file(path: PathBuf) -> Result<Self> {
        tracing::debug!("Loading config from {:?}", path);
        let config = RunnerConfig::load_from_file(&path)?;
        Ok(Self {
            config,
            source: Some(path),
        })
    }

    /// The file the configuration came from, if any
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

impl ConfigurationProvider for FileConfigurationProvider {
    fn configuration(&self) -> RunnerConfig {
        self.config.clone()
    }
}
