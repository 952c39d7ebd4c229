//! Configuration management for react-runner

mod provider;
mod settings;

// Re-export main types
pub use provider::{ConfigurationProvider, FileConfigurationProvider, StaticConfigurationProvider};
pub use settings::{CONFIG_FILE_NAMES, RunnerConfig};
