//! Debug session starter that hands launch configurations to an external host

use crate::{
    command::{DebugConfiguration, LaunchFile},
    dispatch::DebugSessionStarter,
    error::{Error, Result},
    types::WorkspaceFolder,
};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// Where a launch file is written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchTarget {
    Stdout,
    /// Relative paths are resolved against the workspace root
    File(PathBuf),
}

/// Writes each configuration as a `launch.json` document for the debug host
/// to pick up
#[derive(Debug, Clone)]
pub struct LaunchFileDebugStarter {
    target: LaunchTarget,
}

impl LaunchFileDebugStarter {
    pub fn new(target: LaunchTarget) -> Self {
        Self { target }
    }

    pub fn stdout() -> Self {
        Self::new(LaunchTarget::Stdout)
    }

    pub fn to_file(path: impl Into<PathBuf>) -> Self {
        Self::new(LaunchTarget::File(path.into()))
    }

    pub fn target(&self) -> &LaunchTarget {
        &self.target
    }
}

impl DebugSessionStarter for LaunchFileDebugStarter {
    fn start(&self, scope: &WorkspaceFolder, configuration: &DebugConfiguration) -> Result<()> {
        let launch = LaunchFile::from(configuration.clone());
        let json = serde_json::to_string_pretty(&launch)?;

        match &self.target {
            LaunchTarget::Stdout => {
                let mut stdout = std::io::stdout().lock();
                writeln!(stdout, "{json}")
                    .map_err(|e| Error::DebugSessionError(format!("Failed to write launch file: {e}")))?;
            }
            LaunchTarget::File(path) => {
                let path = if path.is_absolute() {
                    path.clone()
                } else {
                    scope.path.join(path)
                };
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(&path, json)?;
                info!("Wrote launch configuration to {:?}", path);
            }
        }

        Ok(())
    }
}
